//! Document Assembler — turns a tailored résumé into an ordered block sequence.
//!
//! Pure and synchronous: no I/O, no shared state. The only failure is a record
//! without a name; every other missing value is omission, not an error.

use thiserror::Error;
use tracing::debug;

use crate::document::block::DocumentBlock;
use crate::document::sections::SectionKind;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("fullName is required and must not be blank")]
    InvalidRecord,
}

/// One emitted section and its blocks. Omitted sections never appear.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledSection {
    pub kind: SectionKind,
    pub blocks: Vec<DocumentBlock>,
}

/// Assembles the record section by section, in document order.
pub fn assemble_sections(record: &ResumeRecord) -> Result<Vec<AssembledSection>, AssemblyError> {
    if record.full_name.trim().is_empty() {
        return Err(AssemblyError::InvalidRecord);
    }

    let sections: Vec<AssembledSection> = SectionKind::ORDER
        .iter()
        .map(|kind| AssembledSection {
            kind: *kind,
            blocks: kind.build(record),
        })
        .filter(|section| !section.blocks.is_empty())
        .collect();

    debug!(
        sections = sections.len(),
        blocks = sections.iter().map(|s| s.blocks.len()).sum::<usize>(),
        "Assembled résumé document"
    );

    Ok(sections)
}

/// Assembles the record into a flat, ordered block sequence.
pub fn assemble(record: &ResumeRecord) -> Result<Vec<DocumentBlock>, AssemblyError> {
    Ok(assemble_sections(record)?
        .into_iter()
        .flat_map(|section| section.blocks)
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
