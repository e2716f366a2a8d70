//! Top-down document traversal shared by all filter passes.
//!
//! A walk visits every node in document order. Each node is offered to the
//! filter first; the node it returns (if any) is then descended into. This
//! lets a pass rewrite a container and still see the children of whatever it
//! produced.

use crate::error::FilterError;
use crate::tree::{Block, Document, Inline};

/// Traversal state carried across nodes of a single document.
///
/// A fresh value is created for every walk, so nothing leaks between
/// documents or between passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Whether the walk is currently inside a section titled "Name".
    pub in_name_section: bool,
}

/// A single rewrite pass over a document tree.
///
/// Both hooks receive ownership of the node and return:
/// - `Ok(Some(node))` to keep it (unchanged or rewritten),
/// - `Ok(None)` to remove it,
/// - `Err(_)` to abort the document.
///
/// The default hooks pass every node through unchanged.
pub trait Filter: Send + Sync {
    /// Pass name used in logs (e.g., "promote-sections").
    fn name(&self) -> &'static str;

    /// Inspect or rewrite a block.
    fn block(&self, block: Block, _state: &mut FilterState) -> Result<Option<Block>, FilterError> {
        Ok(Some(block))
    }

    /// Inspect or rewrite an inline.
    fn inline(
        &self,
        inline: Inline,
        _state: &mut FilterState,
    ) -> Result<Option<Inline>, FilterError> {
        Ok(Some(inline))
    }
}

/// Run one filter over a whole document with fresh traversal state.
///
/// # Errors
///
/// Returns the first error raised by the filter.
pub fn walk_document(document: Document, filter: &dyn Filter) -> Result<Document, FilterError> {
    let mut state = FilterState::default();
    let blocks = walk_blocks(document.blocks, filter, &mut state)?;
    Ok(Document { blocks })
}

fn walk_blocks(
    blocks: Vec<Block>,
    filter: &dyn Filter,
    state: &mut FilterState,
) -> Result<Vec<Block>, FilterError> {
    let mut out = Vec::with_capacity(blocks.len());
    for block in blocks {
        if let Some(block) = filter.block(block, state)? {
            out.push(walk_block_children(block, filter, state)?);
        }
    }
    Ok(out)
}

fn walk_block_children(
    block: Block,
    filter: &dyn Filter,
    state: &mut FilterState,
) -> Result<Block, FilterError> {
    Ok(match block {
        Block::Header { level, id, content } => Block::Header {
            level,
            id,
            content: walk_inlines(content, filter, state)?,
        },
        Block::Paragraph(content) => Block::Paragraph(walk_inlines(content, filter, state)?),
        Block::BlockQuote(blocks) => Block::BlockQuote(walk_blocks(blocks, filter, state)?),
        Block::List { start, items } => Block::List {
            start,
            items: items
                .into_iter()
                .map(|item| walk_blocks(item, filter, state))
                .collect::<Result<_, _>>()?,
        },
        leaf @ (Block::CodeBlock { .. } | Block::Rule) => leaf,
    })
}

fn walk_inlines(
    inlines: Vec<Inline>,
    filter: &dyn Filter,
    state: &mut FilterState,
) -> Result<Vec<Inline>, FilterError> {
    let mut out = Vec::with_capacity(inlines.len());
    for inline in inlines {
        if let Some(inline) = filter.inline(inline, state)? {
            out.push(walk_inline_children(inline, filter, state)?);
        }
    }
    Ok(out)
}

fn walk_inline_children(
    inline: Inline,
    filter: &dyn Filter,
    state: &mut FilterState,
) -> Result<Inline, FilterError> {
    Ok(match inline {
        Inline::Emph(content) => Inline::Emph(walk_inlines(content, filter, state)?),
        Inline::Strong(content) => Inline::Strong(walk_inlines(content, filter, state)?),
        Inline::Link { target, content } => Inline::Link {
            target,
            content: walk_inlines(content, filter, state)?,
        },
        leaf @ (Inline::Str(_)
        | Inline::Space
        | Inline::SoftBreak
        | Inline::LineBreak
        | Inline::Code(_)) => leaf,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Drops every `Space`.
    struct DropSpaces;

    impl Filter for DropSpaces {
        fn name(&self) -> &'static str {
            "drop-spaces"
        }

        fn inline(
            &self,
            inline: Inline,
            _state: &mut FilterState,
        ) -> Result<Option<Inline>, FilterError> {
            Ok((inline != Inline::Space).then_some(inline))
        }
    }

    /// Flags the state on every header and fails on paragraphs seen while flagged.
    struct FailAfterHeader;

    impl Filter for FailAfterHeader {
        fn name(&self) -> &'static str {
            "fail-after-header"
        }

        fn block(&self, block: Block, state: &mut FilterState) -> Result<Option<Block>, FilterError> {
            match block {
                Block::Header { .. } => {
                    state.in_name_section = true;
                    Ok(Some(block))
                }
                Block::Paragraph(_) if state.in_name_section => {
                    Err(FilterError::UnresolvedInclude {
                        paragraph: String::new(),
                    })
                }
                other => Ok(Some(other)),
            }
        }
    }

    #[test]
    fn test_walk_reaches_nested_inlines() {
        let document = Document::new(vec![Block::BlockQuote(vec![Block::Paragraph(vec![
            Inline::str("a"),
            Inline::Space,
            Inline::Emph(vec![Inline::str("b"), Inline::Space, Inline::str("c")]),
        ])])]);

        let result = walk_document(document, &DropSpaces).unwrap();

        assert_eq!(
            result,
            Document::new(vec![Block::BlockQuote(vec![Block::Paragraph(vec![
                Inline::str("a"),
                Inline::Emph(vec![Inline::str("b"), Inline::str("c")]),
            ])])])
        );
    }

    #[test]
    fn test_walk_reaches_list_items() {
        let document = Document::new(vec![Block::List {
            start: None,
            items: vec![vec![Block::Paragraph(vec![
                Inline::str("x"),
                Inline::Space,
                Inline::str("y"),
            ])]],
        }]);

        let result = walk_document(document, &DropSpaces).unwrap();

        assert_eq!(
            result.blocks[0],
            Block::List {
                start: None,
                items: vec![vec![Block::Paragraph(vec![Inline::str("x"), Inline::str("y")])]],
            }
        );
    }

    #[test]
    fn test_state_threads_through_walk() {
        let paragraph_first = Document::new(vec![
            Block::Paragraph(vec![Inline::str("ok")]),
            Block::Header {
                level: 1,
                id: "h".to_owned(),
                content: vec![],
            },
        ]);
        assert!(walk_document(paragraph_first, &FailAfterHeader).is_ok());

        let header_first = Document::new(vec![
            Block::Header {
                level: 1,
                id: "h".to_owned(),
                content: vec![],
            },
            Block::Paragraph(vec![Inline::str("boom")]),
        ]);
        assert!(walk_document(header_first, &FailAfterHeader).is_err());
    }

    #[test]
    fn test_state_resets_between_documents() {
        let header_only = Document::new(vec![Block::Header {
            level: 1,
            id: "h".to_owned(),
            content: vec![],
        }]);
        let paragraph_only = Document::new(vec![Block::Paragraph(vec![Inline::str("ok")])]);

        walk_document(header_only, &FailAfterHeader).unwrap();
        assert!(walk_document(paragraph_only, &FailAfterHeader).is_ok());
    }
}
