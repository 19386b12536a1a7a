//! Previewers for assembled documents.
//!
//! Page-format serialization (DOCX/PDF) happens downstream; these renderers
//! only produce a quick textual preview of the block sequence.

pub mod markdown;
pub mod text;

use serde::Deserialize;

use crate::document::block::DocumentBlock;

pub use markdown::MarkdownRenderer;
pub use text::PlainTextRenderer;

pub trait DocumentRenderer {
    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;

    fn render(&self, blocks: &[DocumentBlock]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewFormat {
    #[default]
    Markdown,
    Text,
}

impl PreviewFormat {
    pub fn renderer(self) -> Box<dyn DocumentRenderer + Send + Sync> {
        match self {
            PreviewFormat::Markdown => Box::new(MarkdownRenderer),
            PreviewFormat::Text => Box::new(PlainTextRenderer),
        }
    }
}
