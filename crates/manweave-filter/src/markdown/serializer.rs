//! Markdown output for normalized document trees.

use super::DocumentSerializer;
use super::slug::slugify;
use crate::tree::{Block, Document, Inline, plain_text};

/// Writes a [`Document`] back out as Markdown.
///
/// Heading ids are emitted as `{#id}` attributes only when they differ from
/// the id the parser would derive, so a parse/serialize cycle is stable.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownSerializer;

impl DocumentSerializer for MarkdownSerializer {
    fn serialize(&self, document: &Document) -> String {
        let mut out = render_blocks(&document.blocks);
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Header { level, id, content } => {
            let text = render_inlines(content);
            let mut line = format!("{} {}", "#".repeat(usize::from(*level)), text.trim());
            if !id.is_empty() && *id != slugify(&plain_text(content)) {
                line.push_str(&format!(" {{#{id}}}"));
            }
            line
        }
        Block::Paragraph(content) => render_inlines(content).trim().to_owned(),
        Block::CodeBlock { info, text } => {
            let fence = "`".repeat(longest_backtick_run(text).max(2) + 1);
            let newline = if text.ends_with('\n') || text.is_empty() {
                ""
            } else {
                "\n"
            };
            format!("{fence}{info}\n{text}{newline}{fence}")
        }
        Block::BlockQuote(blocks) => prefix_lines(&render_blocks(blocks), "> ", "> "),
        Block::List { start, items } => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let marker = match start {
                    Some(first) => format!("{}. ", first.saturating_add(index as u64)),
                    None => "- ".to_owned(),
                };
                let body = render_blocks(item);
                if body.is_empty() {
                    marker.trim_end().to_owned()
                } else {
                    let indent = " ".repeat(marker.len());
                    prefix_lines(&body, &marker, &indent)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Rule => "* * *".to_owned(),
    }
}

/// Prefix the first line with `first` and every other line with `rest`.
///
/// Blank lines get the trimmed prefix so no trailing whitespace is emitted.
fn prefix_lines(body: &str, first: &str, rest: &str) -> String {
    body.lines()
        .enumerate()
        .map(|(index, line)| {
            let prefix = if index == 0 { first } else { rest };
            if line.is_empty() {
                prefix.trim_end().to_owned()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_inlines(content: &[Inline]) -> String {
    let mut out = String::new();
    for inline in content {
        push_inline(inline, &mut out);
    }
    out
}

fn push_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Str(text) => push_text(text, out),
        Inline::Space => out.push(' '),
        Inline::SoftBreak => out.push('\n'),
        Inline::LineBreak => out.push_str("\\\n"),
        Inline::Code(code) => {
            let ticks = "`".repeat(longest_backtick_run(code) + 1);
            if code.starts_with('`') || code.ends_with('`') {
                out.push_str(&format!("{ticks} {code} {ticks}"));
            } else {
                out.push_str(&format!("{ticks}{code}{ticks}"));
            }
        }
        Inline::Emph(content) => {
            out.push('*');
            out.push_str(&render_inlines(content));
            out.push('*');
        }
        Inline::Strong(content) => {
            out.push_str("**");
            out.push_str(&render_inlines(content));
            out.push_str("**");
        }
        Inline::Link { target, content } => {
            out.push('[');
            out.push_str(&render_inlines(content));
            out.push_str("](");
            out.push_str(target);
            out.push(')');
        }
    }
}

/// Characters that always need a backslash in text.
const ESCAPED: &[char] = &['\\', '*', '_', '`', '[', ']', '<', '&'];

/// Characters that open a block when they start a line.
const BLOCK_MARKERS: &[char] = &['#', '>', '-', '+', '=', '~'];

fn push_text(text: &str, out: &mut String) {
    let line_start = {
        let before = out.trim_end_matches(' ');
        before.is_empty() || before.ends_with('\n')
    };
    let marker = if line_start { block_marker(text) } else { None };

    for (index, ch) in text.char_indices() {
        if ESCAPED.contains(&ch) || marker == Some(index) {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Byte offset of the character that would make `text` open a block, such
/// as a heading, quote, list item, or setext underline.
fn block_marker(text: &str) -> Option<usize> {
    if text.starts_with(BLOCK_MARKERS) {
        return Some(0);
    }
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let after = text.get(digits..)?;
    (digits > 0 && after.starts_with(['.', ')'])).then_some(digits)
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|ch| ch != '`')
        .map(str::len)
        .max()
        .unwrap_or(0)
}
