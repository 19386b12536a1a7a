use crate::document::block::{BlockKind, DocumentBlock, HeaderLevel};
use crate::render::DocumentRenderer;

/// Plain-text preview with underlined section headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl DocumentRenderer for PlainTextRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, blocks: &[DocumentBlock]) -> String {
        let mut lines: Vec<String> = Vec::new();

        for block in blocks {
            let text = block.plain_text();
            match (block.kind, block.level) {
                (BlockKind::Header, Some(HeaderLevel::Title)) => lines.push(text),
                (BlockKind::Header, _) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    let rule = "-".repeat(text.chars().count());
                    lines.push(text);
                    lines.push(rule);
                }
                (BlockKind::BulletItem, _) => {
                    let indent = "  ".repeat(usize::from(block.format.indent_level));
                    lines.push(format!("{indent}• {text}"));
                }
                (BlockKind::Paragraph, _) => lines.push(text),
                (BlockKind::Spacer, _) => lines.push(String::new()),
            }
        }

        if lines.is_empty() {
            return String::new();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
