use crate::document::block::{BlockKind, DocumentBlock, TextRun};
use crate::render::DocumentRenderer;

/// Markdown preview. Title → `#`, section header → `##`, bullets → `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl DocumentRenderer for MarkdownRenderer {
    fn content_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }

    fn render(&self, blocks: &[DocumentBlock]) -> String {
        let mut out = String::new();
        let mut previous: Option<BlockKind> = None;

        for block in blocks {
            // Spacers fall out naturally: markdown blocks are already blank-line separated.
            if block.kind == BlockKind::Spacer {
                continue;
            }
            if let Some(prev) = previous {
                let tight = prev == BlockKind::BulletItem && block.kind == BlockKind::BulletItem;
                out.push_str(if tight { "\n" } else { "\n\n" });
            }
            out.push_str(&render_block(block));
            previous = Some(block.kind);
        }

        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

fn render_block(block: &DocumentBlock) -> String {
    match block.kind {
        BlockKind::Header => {
            let marker = if block.is_section_header() { "##" } else { "#" };
            // Heading styling is implied by the marker.
            format!("{marker} {}", escape(&block.plain_text()))
        }
        BlockKind::BulletItem => {
            let indent = "  ".repeat(usize::from(block.format.indent_level.saturating_sub(1)));
            format!("{indent}- {}", render_runs(&block.runs))
        }
        BlockKind::Paragraph => render_runs(&block.runs),
        BlockKind::Spacer => String::new(),
    }
}

fn render_runs(runs: &[TextRun]) -> String {
    let text: String = runs.iter().map(render_run).collect();
    text.split('\n').map(escape_line_start).collect::<Vec<_>>().join("\n")
}

/// Neutralizes a leading block marker (`#`, `>`, `-`, `+`, `1.`) so content
/// never turns into a heading, quote or list.
fn escape_line_start(line: &str) -> String {
    let body = line.trim_start_matches(' ');
    let indent = &line[..line.len() - body.len()];
    if body.starts_with(['#', '>', '-', '+', '=']) {
        return format!("{indent}\\{body}");
    }
    let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && body[digits..].starts_with(['.', ')']) {
        return format!("{indent}{}\\{}", &body[..digits], &body[digits..]);
    }
    line.to_string()
}

fn render_run(run: &TextRun) -> String {
    let mut text = escape(&run.text);
    if text.trim().is_empty() {
        return text;
    }
    if run.italic {
        text = format!("_{text}_");
    }
    if run.bold {
        text = format!("**{text}**");
    }
    match &run.link {
        Some(target) => format!("[{text}]({})", encode_target(target)),
        None => text,
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '[' | ']' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Percent-encodes the characters that would end or split a link destination.
fn encode_target(target: &str) -> String {
    let mut out = String::with_capacity(target.len());
    for c in target.chars() {
        match c {
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            _ => out.push(c),
        }
    }
    out
}
