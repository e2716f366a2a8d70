//! Flattening of hyperlinks for targets without link support.

use crate::error::FilterError;
use crate::tree::{Inline, plain_text};
use crate::walk::{Filter, FilterState};

/// Replaces every link with its label.
///
/// A label that starts with a code span collapses to that code span alone.
/// Any other label becomes one text node: the text of each label element
/// that carries text, joined by single spaces. The target is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlattenLinks;

fn flatten_label(mut content: Vec<Inline>) -> Inline {
    if matches!(content.first(), Some(Inline::Code(_))) {
        return content.swap_remove(0);
    }
    let words: Vec<String> = content
        .iter()
        .filter_map(|inline| match inline {
            Inline::Str(text) | Inline::Code(text) => Some(text.clone()),
            Inline::Emph(children) | Inline::Strong(children) | Inline::Link { content: children, .. } => {
                Some(plain_text(children))
            }
            Inline::Space | Inline::SoftBreak | Inline::LineBreak => None,
        })
        .collect();
    Inline::Str(words.join(" "))
}

impl Filter for FlattenLinks {
    fn name(&self) -> &'static str {
        "flatten-links"
    }

    fn inline(
        &self,
        inline: Inline,
        _state: &mut FilterState,
    ) -> Result<Option<Inline>, FilterError> {
        match inline {
            Inline::Link { content, .. } => Ok(Some(flatten_label(content))),
            other => Ok(Some(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::{Block, Document, tokenize};
    use crate::walk::walk_document;

    fn flatten(content: Vec<Inline>) -> Vec<Inline> {
        let document = Document::new(vec![Block::Paragraph(content)]);
        let Block::Paragraph(content) = walk_document(document, &FlattenLinks)
            .unwrap()
            .blocks
            .remove(0)
        else {
            panic!("expected paragraph");
        };
        content
    }

    #[test]
    fn test_code_label_keeps_code_only() {
        let result = flatten(vec![Inline::Link {
            target: "dotnet-restore.md".to_owned(),
            content: vec![Inline::Code("dotnet restore".to_owned()), Inline::str("!")],
        }]);

        assert_eq!(result, vec![Inline::Code("dotnet restore".to_owned())]);
    }

    #[test]
    fn test_text_label_joins_words() {
        let mut content = tokenize("See the ");
        content.push(Inline::Link {
            target: "https://aka.ms/docs".to_owned(),
            content: tokenize("online documentation"),
        });

        let result = flatten(content);

        let mut expected = tokenize("See the ");
        expected.push(Inline::str("online documentation"));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_emphasis_in_label_is_flattened() {
        let result = flatten(vec![Inline::Link {
            target: "x".to_owned(),
            content: vec![
                Inline::str("the"),
                Inline::Space,
                Inline::Emph(tokenize("global tools")),
            ],
        }]);

        assert_eq!(result, vec![Inline::str("the global tools")]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let once = flatten(vec![Inline::Link {
            target: "x".to_owned(),
            content: tokenize("a b"),
        }]);

        assert_eq!(flatten(once.clone()), once);
    }
}
