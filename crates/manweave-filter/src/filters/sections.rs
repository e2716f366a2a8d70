//! Promotion of recognized man-page sections.

use crate::error::FilterError;
use crate::tree::{Block, Inline, section_title};
use crate::walk::{Filter, FilterState};

/// Uppercases recognized section headings and lifts them to level 1.
///
/// A heading matches when its words, lowercased and joined by single spaces,
/// equal one of the configured section names. Nesting depth in the source
/// does not matter: `### Options` becomes `# OPTIONS`.
#[derive(Clone, Debug)]
pub struct PromoteSections {
    sections: Vec<String>,
}

impl PromoteSections {
    /// Create the pass for the given lowercase section names.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
        }
    }

    fn recognizes(&self, title: &str) -> bool {
        self.sections.iter().any(|section| section == title)
    }
}

impl Filter for PromoteSections {
    fn name(&self) -> &'static str {
        "promote-sections"
    }

    fn block(&self, block: Block, _state: &mut FilterState) -> Result<Option<Block>, FilterError> {
        match block {
            Block::Header { id, content, .. } if self.recognizes(&section_title(&content)) => {
                let content = content
                    .into_iter()
                    .map(|inline| match inline {
                        Inline::Str(text) => Inline::Str(text.to_uppercase()),
                        other => other,
                    })
                    .collect();
                Ok(Some(Block::Header {
                    level: 1,
                    id,
                    content,
                }))
            }
            other => Ok(Some(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::consts::BASE_SECTIONS;
    use crate::tree::{Document, tokenize};
    use crate::walk::walk_document;

    fn header(level: u8, text: &str) -> Block {
        Block::Header {
            level,
            id: text.to_lowercase().replace(' ', "-"),
            content: tokenize(text),
        }
    }

    fn promote(blocks: Vec<Block>) -> Vec<Block> {
        let filter = PromoteSections::new(BASE_SECTIONS.iter().copied());
        walk_document(Document::new(blocks), &filter).unwrap().blocks
    }

    #[test]
    fn test_nested_options_becomes_top_level_uppercase() {
        let result = promote(vec![header(3, "Options")]);

        assert_eq!(
            result,
            vec![Block::Header {
                level: 1,
                id: "options".to_owned(),
                content: vec![Inline::str("OPTIONS")],
            }]
        );
    }

    #[test]
    fn test_multi_word_section_keeps_spaces() {
        let result = promote(vec![header(2, "Environment variables")]);

        assert_eq!(
            result,
            vec![Block::Header {
                level: 1,
                id: "environment-variables".to_owned(),
                content: vec![
                    Inline::str("ENVIRONMENT"),
                    Inline::Space,
                    Inline::str("VARIABLES"),
                ],
            }]
        );
    }

    #[test]
    fn test_unrecognized_heading_untouched() {
        let original = vec![header(2, "Arguments"), header(3, "Implicit restore")];

        assert_eq!(promote(original.clone()), original);
    }

    #[test]
    fn test_extended_set_recognizes_see_also() {
        let filter = PromoteSections::new(["see also"]);
        let document = Document::new(vec![header(2, "See also")]);

        let result = walk_document(document, &filter).unwrap();

        assert!(matches!(
            &result.blocks[0],
            Block::Header { level: 1, content, .. } if content[0] == Inline::str("SEE")
        ));
    }

    #[test]
    fn test_promotion_is_idempotent() {
        let once = promote(vec![header(2, "Examples"), header(4, "Synopsis")]);
        let twice = promote(once.clone());

        assert_eq!(once, twice);
    }
}
