//! Demotion of version-conditional headings.

use crate::error::FilterError;
use crate::tree::{Block, Inline};
use crate::walk::{Filter, FilterState};

/// Demotes headings whose id starts with a version prefix to level 2.
///
/// Version headings are written as a single wrapped element, typically a tab
/// link such as `# [.NET Core 2.x](#tab/netcore2x)`. The wrapper is dropped
/// and its label becomes the heading content. Headings whose first element
/// has no nested content keep their content and are only demoted.
#[derive(Clone, Debug)]
pub struct DemoteVersioned {
    prefix: String,
}

impl DemoteVersioned {
    /// Create the pass for the given heading-id prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

fn unwrap_first(content: Vec<Inline>) -> Vec<Inline> {
    match content.into_iter().next() {
        Some(Inline::Emph(inner) | Inline::Strong(inner) | Inline::Link { content: inner, .. }) => {
            inner
        }
        Some(first) => vec![first],
        None => Vec::new(),
    }
}

impl Filter for DemoteVersioned {
    fn name(&self) -> &'static str {
        "demote-versioned"
    }

    fn block(&self, block: Block, _state: &mut FilterState) -> Result<Option<Block>, FilterError> {
        match block {
            Block::Header { id, content, .. } if id.starts_with(&self.prefix) => {
                let content = if content.first().and_then(Inline::children).is_some() {
                    unwrap_first(content)
                } else {
                    content
                };
                Ok(Some(Block::Header {
                    level: 2,
                    id,
                    content,
                }))
            }
            other => Ok(Some(other)),
        }
    }
}
