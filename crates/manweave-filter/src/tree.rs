//! Document tree consumed and produced by the filter chain.
//!
//! The shape follows the block/inline split used by man-page converters:
//! blocks carry structure (headers, paragraphs, quotes, lists), inlines carry
//! text and markup. Both are closed enums so every pass matches exhaustively.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed document: an ordered sequence of blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    /// Top-level blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document from its blocks.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

/// Block-level node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "t", content = "c")
)]
pub enum Block {
    /// Section heading.
    Header {
        /// Heading level, 1 through 6.
        level: u8,
        /// Anchor identifier (explicit `{#id}` or derived from the text).
        id: String,
        /// Heading text.
        content: Vec<Inline>,
    },
    /// Paragraph of inline content.
    Paragraph(Vec<Inline>),
    /// Fenced or indented code block.
    CodeBlock {
        /// Info string after the opening fence (empty for indented blocks).
        info: String,
        /// Literal code, including the trailing newline.
        text: String,
    },
    /// Block quote containing nested blocks.
    BlockQuote(Vec<Block>),
    /// Bullet list (`start` is `None`) or ordered list.
    List {
        /// First item number for ordered lists.
        start: Option<u64>,
        /// Each item is its own block sequence.
        items: Vec<Vec<Block>>,
    },
    /// Thematic break.
    Rule,
}

/// Inline node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "t", content = "c")
)]
pub enum Inline {
    /// A run of non-whitespace text.
    Str(String),
    /// Inter-word space.
    Space,
    /// Line break in the source that renders as a space.
    SoftBreak,
    /// Forced line break.
    LineBreak,
    /// Inline code span.
    Code(String),
    /// Emphasized content.
    Emph(Vec<Inline>),
    /// Strongly emphasized content.
    Strong(Vec<Inline>),
    /// Hyperlink with a label.
    Link {
        /// Link destination.
        target: String,
        /// Link label.
        content: Vec<Inline>,
    },
}

impl Inline {
    /// Convenience constructor for [`Inline::Str`].
    pub fn str(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    /// Literal text carried directly by this node, if any.
    ///
    /// Only [`Inline::Str`] and [`Inline::Code`] carry text of their own;
    /// containers carry children instead.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Str(text) | Self::Code(text) => Some(text),
            _ => None,
        }
    }

    /// Nested inline content for container nodes.
    #[must_use]
    pub fn children(&self) -> Option<&[Inline]> {
        match self {
            Self::Emph(content) | Self::Strong(content) | Self::Link { content, .. } => {
                Some(content)
            }
            _ => None,
        }
    }
}

/// Split text into `Str` words separated by `Space`.
///
/// Runs of whitespace collapse into a single `Space`. Leading and trailing
/// whitespace produce a `Space` at the corresponding edge.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut word = String::new();
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !word.is_empty() {
                inlines.push(Inline::Str(std::mem::take(&mut word)));
            }
            pending_space = true;
        } else {
            if pending_space {
                inlines.push(Inline::Space);
                pending_space = false;
            }
            word.push(ch);
        }
    }
    if !word.is_empty() {
        inlines.push(Inline::Str(word));
    }
    if pending_space {
        inlines.push(Inline::Space);
    }
    inlines
}

/// Section title used to match recognized section names.
///
/// Joins the `Str` elements of a heading with single spaces and lowercases
/// the result, so `Environment Variables` and `ENVIRONMENT variables` both
/// yield `environment variables`. Markup other than plain words is ignored.
#[must_use]
pub fn section_title(content: &[Inline]) -> String {
    content
        .iter()
        .filter_map(|inline| match inline {
            Inline::Str(text) => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Flatten inline content to plain text, descending into containers.
#[must_use]
pub fn plain_text(content: &[Inline]) -> String {
    let mut out = String::new();
    push_plain_text(content, &mut out);
    out
}

fn push_plain_text(content: &[Inline], out: &mut String) {
    for inline in content {
        match inline {
            Inline::Str(text) | Inline::Code(text) => out.push_str(text),
            Inline::Space | Inline::SoftBreak | Inline::LineBreak => out.push(' '),
            Inline::Emph(children) | Inline::Strong(children) | Inline::Link { content: children, .. } => {
                push_plain_text(children, out);
            }
        }
    }
}
