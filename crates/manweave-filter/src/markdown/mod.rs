//! Markdown adapters around the document tree.
//!
//! The filter chain only works on [`Document`](crate::Document) values. These
//! adapters connect it to text: [`MarkdownParser`] builds a tree from
//! pulldown-cmark events and [`MarkdownSerializer`] writes a tree back out as
//! Markdown for the man-page renderer.

mod parser;
mod serializer;
mod slug;

pub use parser::MarkdownParser;
pub use serializer::MarkdownSerializer;
pub use slug::slugify;

use crate::tree::Document;

/// Builds a document tree from source text.
pub trait DocumentParser {
    /// Parse source text into a document.
    fn parse(&self, source: &str) -> Document;
}

/// Writes a document tree to an output format.
pub trait DocumentSerializer {
    /// Serialize a document.
    fn serialize(&self, document: &Document) -> String;
}
