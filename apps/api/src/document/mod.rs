// Résumé document assembly.
// Implements: non-fabrication gating, fixed section ordering, block output for renderers.
// The assembler itself is pure; batch work runs inside tokio::task::spawn_blocking.

pub mod assembler;
pub mod block;
pub mod handlers;
pub mod inclusion;
pub mod sections;
pub mod service;

// Re-export the public API consumed by other modules (handlers, errors).
pub use assembler::{assemble, AssemblyError};
