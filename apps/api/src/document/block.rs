//! Format-agnostic document blocks handed to renderers.
//!
//! Blocks carry styling *intent* only (bold, italic, color role, alignment,
//! spacing). Turning them into DOCX/PDF/HTML is the renderer's job.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Block types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Header,
    Paragraph,
    BulletItem,
    Spacer,
}

/// Only set on `BlockKind::Header` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderLevel {
    /// The candidate's name at the top of the page.
    Title,
    /// A section heading such as "WORK EXPERIENCE".
    Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorIntent {
    #[default]
    Default,
    /// Brand/theme color: section headers, employer names.
    Accent,
    /// De-emphasized: dates, locations, separators.
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Justified,
}

/// A span of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub color: ColorIntent,
    /// Hyperlink target. The run's `text` is the visible label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            color: ColorIntent::Default,
            link: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: ColorIntent) -> Self {
        self.color = color;
        self
    }

    pub fn link(mut self, target: impl Into<String>) -> Self {
        self.link = Some(target.into());
        self
    }
}

/// Paragraph-level layout hints. Spacing is in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphFormat {
    pub alignment: Alignment,
    pub indent_level: u8,
    pub spacing_before_pt: u8,
    pub spacing_after_pt: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBlock {
    pub kind: BlockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<HeaderLevel>,
    pub runs: Vec<TextRun>,
    pub format: ParagraphFormat,
}

// ────────────────────────────────────────────────────────────────────────────
// Constructors
// ────────────────────────────────────────────────────────────────────────────

impl DocumentBlock {
    /// Name header: centered, bold.
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Header,
            level: Some(HeaderLevel::Title),
            runs: vec![TextRun::plain(text).bold()],
            format: ParagraphFormat {
                alignment: Alignment::Center,
                spacing_after_pt: 4,
                ..ParagraphFormat::default()
            },
        }
    }

    /// Section heading. Renderers typically draw a rule under it.
    pub fn section_header(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Header,
            level: Some(HeaderLevel::Section),
            runs: vec![TextRun::plain(text).bold().color(ColorIntent::Accent)],
            format: ParagraphFormat {
                spacing_before_pt: 10,
                spacing_after_pt: 4,
                ..ParagraphFormat::default()
            },
        }
    }

    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            level: None,
            runs,
            format: ParagraphFormat {
                spacing_after_pt: 2,
                ..ParagraphFormat::default()
            },
        }
    }

    pub fn bullet(runs: Vec<TextRun>) -> Self {
        Self {
            kind: BlockKind::BulletItem,
            level: None,
            runs,
            format: ParagraphFormat {
                indent_level: 1,
                spacing_after_pt: 1,
                ..ParagraphFormat::default()
            },
        }
    }

    pub fn spacer() -> Self {
        Self {
            kind: BlockKind::Spacer,
            level: None,
            runs: Vec::new(),
            format: ParagraphFormat {
                spacing_after_pt: 6,
                ..ParagraphFormat::default()
            },
        }
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.format.alignment = alignment;
        self
    }

    /// Concatenated run text, without styling or link targets.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_section_header(&self) -> bool {
        self.kind == BlockKind::Header && self.level == Some(HeaderLevel::Section)
    }
}

/// Interleaves `fragments` with a separator run. Empty input gives empty output.
pub fn join_runs(fragments: Vec<TextRun>, separator: &str) -> Vec<TextRun> {
    let mut runs = Vec::with_capacity(fragments.len().saturating_mul(2));
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            runs.push(TextRun::plain(separator));
        }
        runs.push(fragment);
    }
    runs
}
