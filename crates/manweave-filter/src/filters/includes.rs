//! Guards against inclusion directives that reached the document tree.

use crate::consts::INCLUDE_MARKER;
use crate::error::FilterError;
use crate::tree::{Block, Inline, plain_text};
use crate::walk::{Filter, FilterState};

/// Whether a paragraph starts with an unresolved inclusion directive.
fn is_include_paragraph(content: &[Inline]) -> bool {
    matches!(content.first(), Some(Inline::Str(text)) if text == INCLUDE_MARKER)
}

/// Fails the document on any paragraph that still holds `[!INCLUDE`.
///
/// The include resolver replaces every directive line before parsing, so a
/// surviving directive means that step was skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectIncludes;

impl Filter for RejectIncludes {
    fn name(&self) -> &'static str {
        "reject-includes"
    }

    fn block(&self, block: Block, _state: &mut FilterState) -> Result<Option<Block>, FilterError> {
        match block {
            Block::Paragraph(content) if is_include_paragraph(&content) => {
                Err(FilterError::UnresolvedInclude {
                    paragraph: plain_text(&content),
                })
            }
            other => Ok(Some(other)),
        }
    }
}

/// Blanks out paragraphs that still hold `[!INCLUDE` instead of failing.
///
/// Lenient counterpart of [`RejectIncludes`] for sources whose partials are
/// rendered elsewhere. Not part of any built-in profile.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlankIncludes;

impl Filter for BlankIncludes {
    fn name(&self) -> &'static str {
        "blank-includes"
    }

    fn block(&self, block: Block, _state: &mut FilterState) -> Result<Option<Block>, FilterError> {
        match block {
            Block::Paragraph(content) if is_include_paragraph(&content) => {
                tracing::debug!(paragraph = %plain_text(&content), "blanking include directive");
                Ok(Some(Block::Paragraph(vec![Inline::Str(String::new())])))
            }
            other => Ok(Some(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::Document;
    use crate::walk::walk_document;

    fn include_paragraph() -> Block {
        Block::Paragraph(vec![
            Inline::str("[!INCLUDE"),
            Inline::Space,
            Inline::Link {
                target: "../includes/cli-advertising.md".to_owned(),
                content: vec![Inline::str("cli-advertising")],
            },
            Inline::str("]"),
        ])
    }

    #[test]
    fn test_reject_fails_on_include_paragraph() {
        let document = Document::new(vec![include_paragraph()]);

        let err = walk_document(document, &RejectIncludes).unwrap_err();

        assert!(matches!(err, FilterError::UnresolvedInclude { .. }));
        assert!(err.to_string().contains("[!INCLUDE"));
    }

    #[test]
    fn test_reject_ignores_marker_later_in_paragraph() {
        let document = Document::new(vec![Block::Paragraph(vec![
            Inline::str("see"),
            Inline::Space,
            Inline::str("[!INCLUDE"),
        ])]);

        assert!(walk_document(document, &RejectIncludes).is_ok());
    }

    #[test]
    fn test_reject_finds_include_inside_quote() {
        let document = Document::new(vec![Block::BlockQuote(vec![include_paragraph()])]);

        assert!(walk_document(document, &RejectIncludes).is_err());
    }

    #[test]
    fn test_blank_replaces_include_paragraph() {
        let document = Document::new(vec![
            Block::Paragraph(vec![Inline::str("before")]),
            include_paragraph(),
        ]);

        let result = walk_document(document, &BlankIncludes).unwrap();

        assert_eq!(
            result.blocks,
            vec![
                Block::Paragraph(vec![Inline::str("before")]),
                Block::Paragraph(vec![Inline::Str(String::new())]),
            ]
        );
    }
}
