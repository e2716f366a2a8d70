//! Document tree construction from pulldown-cmark events.

use std::iter::Peekable;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use super::DocumentParser;
use super::slug::slugify;
use crate::tree::{Block, Document, Inline, plain_text, tokenize};

/// Markdown parser producing a [`Document`].
///
/// Text is split into `Str` words and `Space` separators, so filters can
/// match on whole words. Headings get their `{#id}` attribute when present,
/// otherwise an id derived from their text. Front matter, raw HTML blocks,
/// and tables are dropped.
///
/// # Example
///
/// ```
/// use manweave_filter::markdown::{DocumentParser, MarkdownParser};
/// use manweave_filter::{Block, Inline};
///
/// let document = MarkdownParser::new().parse("## See also\n");
///
/// assert_eq!(
///     document.blocks,
///     vec![Block::Header {
///         level: 2,
///         id: "see-also".to_owned(),
///         content: vec![Inline::str("See"), Inline::Space, Inline::str("also")],
///     }]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    /// Create a parser with heading attributes and front matter enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_HEADING_ATTRIBUTES
                | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS,
        }
    }
}

impl DocumentParser for MarkdownParser {
    fn parse(&self, source: &str) -> Document {
        let mut builder = TreeBuilder {
            events: Parser::new_ext(source, self.options).peekable(),
        };
        Document::new(builder.blocks())
    }
}

/// What the next event starts.
enum Peeked {
    Done,
    End,
    Inline,
    Block,
}

struct TreeBuilder<'a> {
    events: Peekable<Parser<'a>>,
}

impl<'a> TreeBuilder<'a> {
    fn peek(&mut self) -> Peeked {
        match self.events.peek() {
            None => Peeked::Done,
            Some(Event::End(_)) => Peeked::End,
            Some(event) if is_inline(event) => Peeked::Inline,
            Some(_) => Peeked::Block,
        }
    }

    /// Collect blocks up to and including the end tag of the enclosing
    /// container, or to the end of input at top level.
    fn blocks(&mut self) -> Vec<Block> {
        let mut blocks = Vec::new();
        loop {
            match self.peek() {
                Peeked::Done => break,
                Peeked::End => {
                    self.events.next();
                    break;
                }
                // Tight list items hold inline content without a paragraph.
                Peeked::Inline => {
                    let content = self.inline_run();
                    if !content.is_empty() {
                        blocks.push(Block::Paragraph(content));
                    }
                }
                Peeked::Block => {
                    if let Some(block) = self.events.next().and_then(|event| self.block(event)) {
                        blocks.push(block);
                    }
                }
            }
        }
        blocks
    }

    fn block(&mut self, event: Event<'a>) -> Option<Block> {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let content = self.inlines();
                let id = id.map_or_else(|| slugify(&plain_text(&content)), |id| id.to_string());
                Some(Block::Header {
                    level: heading_level_to_num(level),
                    id,
                    content,
                })
            }
            Event::Start(Tag::Paragraph) => Some(Block::Paragraph(self.inlines())),
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                Some(Block::CodeBlock {
                    info,
                    text: self.literal(),
                })
            }
            Event::Start(Tag::BlockQuote(_)) => Some(Block::BlockQuote(self.blocks())),
            Event::Start(Tag::List(start)) => Some(Block::List {
                start,
                items: self.items(),
            }),
            Event::Rule => Some(Block::Rule),
            Event::Start(tag) => {
                tracing::debug!(?tag, "dropping unsupported block");
                self.skip();
                None
            }
            _ => None,
        }
    }

    fn items(&mut self) -> Vec<Vec<Block>> {
        let mut items = Vec::new();
        while let Some(event) = self.events.next() {
            match event {
                Event::Start(Tag::Item) => items.push(self.blocks()),
                Event::End(_) => break,
                _ => {}
            }
        }
        items
    }

    /// Collect inline content and consume the end tag that closes it.
    fn inlines(&mut self) -> Vec<Inline> {
        let content = self.inline_run();
        if matches!(self.peek(), Peeked::End) {
            self.events.next();
        }
        content
    }

    /// Collect consecutive inline events.
    ///
    /// Adjacent text events are merged before tokenizing, since pulldown-cmark
    /// splits text at brackets and entities.
    fn inline_run(&mut self) -> Vec<Inline> {
        let mut content = Vec::new();
        let mut text = String::new();

        while matches!(self.peek(), Peeked::Inline) {
            let Some(event) = self.events.next() else {
                break;
            };
            if !matches!(event, Event::Text(_) | Event::InlineHtml(_)) {
                flush_text(&mut text, &mut content);
            }
            match event {
                Event::Text(t) | Event::InlineHtml(t) => text.push_str(&t),
                Event::Code(code) => content.push(Inline::Code(code.into_string())),
                Event::SoftBreak => content.push(Inline::SoftBreak),
                Event::HardBreak => content.push(Inline::LineBreak),
                Event::Start(Tag::Emphasis) => content.push(Inline::Emph(self.inlines())),
                Event::Start(Tag::Strong) => content.push(Inline::Strong(self.inlines())),
                Event::Start(Tag::Link { dest_url, .. }) => content.push(Inline::Link {
                    target: dest_url.into_string(),
                    content: self.inlines(),
                }),
                // Images and strikethrough keep their text only.
                Event::Start(_) => content.extend(self.inlines()),
                _ => {}
            }
        }
        flush_text(&mut text, &mut content);
        content
    }

    /// Collect the literal text of a code or HTML block, consuming its end tag.
    fn literal(&mut self) -> String {
        let mut text = String::new();
        for event in self.events.by_ref() {
            match event {
                Event::Text(t) | Event::Html(t) => text.push_str(&t),
                Event::End(_) => break,
                _ => {}
            }
        }
        text
    }

    /// Skip everything up to and including the matching end tag.
    fn skip(&mut self) {
        let mut depth = 1usize;
        for event in self.events.by_ref() {
            match event {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
    }
}

fn is_inline(event: &Event<'_>) -> bool {
    match event {
        Event::Text(_)
        | Event::Code(_)
        | Event::InlineHtml(_)
        | Event::InlineMath(_)
        | Event::FootnoteReference(_)
        | Event::SoftBreak
        | Event::HardBreak => true,
        Event::Start(tag) => matches!(
            tag,
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
        ),
        _ => false,
    }
}

fn flush_text(text: &mut String, content: &mut Vec<Inline>) {
    if !text.is_empty() {
        content.extend(tokenize(text));
        text.clear();
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
