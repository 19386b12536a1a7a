pub mod lenient;
pub mod presence;
pub mod resume;
