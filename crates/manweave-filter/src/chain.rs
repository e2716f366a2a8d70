//! Ordered composition of filter passes.

use crate::error::FilterError;
use crate::filters::{
    BlankIncludes, DemoteVersioned, FixCommandNames, FlattenLinks, PromoteSections,
    RejectIncludes, StripAdmonitions,
};
use crate::profile::{FilterKind, Profile};
use crate::tree::Document;
use crate::walk::{Filter, walk_document};

/// Ordered list of filter passes applied to a document.
///
/// Each pass walks the whole document before the next one starts, so a pass
/// always sees the output of every pass before it.
///
/// # Example
///
/// ```
/// use manweave_filter::{Block, Document, FilterChain, Inline, Profile};
///
/// let document = Document::new(vec![Block::Header {
///     level: 3,
///     id: "options".to_owned(),
///     content: vec![Inline::str("Options")],
/// }]);
///
/// let result = FilterChain::from_profile(&Profile::man())
///     .apply(document)
///     .unwrap();
///
/// assert_eq!(
///     result.blocks[0],
///     Block::Header {
///         level: 1,
///         id: "options".to_owned(),
///         content: vec![Inline::str("OPTIONS")],
///     }
/// );
/// ```
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chain a profile describes.
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        profile
            .filters
            .iter()
            .fold(Self::new(), |chain, kind| match kind {
                FilterKind::RejectIncludes => chain.with_filter(RejectIncludes),
                FilterKind::BlankIncludes => chain.with_filter(BlankIncludes),
                FilterKind::PromoteSections => {
                    chain.with_filter(PromoteSections::new(profile.sections.iter().cloned()))
                }
                FilterKind::DemoteVersioned => {
                    chain.with_filter(DemoteVersioned::new(profile.version_prefix.clone()))
                }
                FilterKind::FixCommandNames => {
                    chain.with_filter(FixCommandNames::new(profile.command_prefix.clone()))
                }
                FilterKind::StripAdmonitions => {
                    chain.with_filter(StripAdmonitions::new(profile.admonitions.iter().cloned()))
                }
                FilterKind::FlattenLinks => chain.with_filter(FlattenLinks),
            })
    }

    /// Append a pass to the chain.
    #[must_use]
    pub fn with_filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the passes, in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Run every pass over the document.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any pass; later passes do not run.
    pub fn apply(&self, document: Document) -> Result<Document, FilterError> {
        self.filters.iter().try_fold(document, |document, filter| {
            tracing::debug!(filter = filter.name(), "applying filter");
            walk_document(document, filter.as_ref())
        })
    }
}

/// Normalize a document with the chain of the given profile.
///
/// # Errors
///
/// Returns an error if any pass rejects the document.
pub fn normalize(document: Document, profile: &Profile) -> Result<Document, FilterError> {
    FilterChain::from_profile(profile).apply(document)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::{Block, Inline, tokenize};

    fn sample() -> Document {
        let mut name_line = vec![Inline::Code("dotnet build".to_owned())];
        name_line.extend(tokenize(" - Builds a project. See "));
        name_line.push(Inline::Link {
            target: "dotnet-msbuild.md".to_owned(),
            content: vec![Inline::Code("dotnet msbuild".to_owned())],
        });

        Document::new(vec![
            Block::Header {
                level: 2,
                id: "name".to_owned(),
                content: tokenize("Name"),
            },
            Block::Paragraph(name_line),
            Block::Header {
                level: 3,
                id: "see-also".to_owned(),
                content: tokenize("See also"),
            },
            Block::BlockQuote(vec![Block::Paragraph(vec![
                Inline::str("[!NOTE]"),
                Inline::SoftBreak,
                Inline::str("Note."),
            ])]),
        ])
    }

    #[test]
    fn test_chain_runs_profile_filters_in_order() {
        assert_eq!(
            FilterChain::from_profile(&Profile::man()).names(),
            vec![
                "reject-includes",
                "promote-sections",
                "demote-versioned",
                "fix-command-names",
                "strip-admonitions",
            ]
        );
        assert_eq!(
            FilterChain::from_profile(&Profile::legacy()).names(),
            vec![
                "reject-includes",
                "promote-sections",
                "demote-versioned",
                "flatten-links",
            ]
        );
    }

    #[test]
    fn test_man_profile_normalizes_sample() {
        let result = normalize(sample(), &Profile::man()).unwrap();

        assert_eq!(
            result.blocks[0],
            Block::Header {
                level: 1,
                id: "name".to_owned(),
                content: vec![Inline::str("NAME")],
            }
        );
        let Block::Paragraph(name_line) = &result.blocks[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(name_line[0], Inline::str("dotnet-build"));
        // Links survive in the man profile.
        assert!(matches!(name_line.last(), Some(Inline::Link { .. })));
        assert_eq!(
            result.blocks[2],
            Block::Header {
                level: 1,
                id: "see-also".to_owned(),
                content: vec![Inline::str("SEE"), Inline::Space, Inline::str("ALSO")],
            }
        );
        assert_eq!(
            result.blocks[3],
            Block::BlockQuote(vec![Block::Paragraph(vec![
                Inline::Str(String::new()),
                Inline::SoftBreak,
                Inline::str("Note."),
            ])])
        );
    }

    #[test]
    fn test_legacy_profile_normalizes_sample() {
        let result = normalize(sample(), &Profile::legacy()).unwrap();

        let Block::Paragraph(name_line) = &result.blocks[1] else {
            panic!("expected paragraph");
        };
        // No command-name fix in the legacy profile, links flattened.
        assert_eq!(name_line[0], Inline::Code("dotnet build".to_owned()));
        assert_eq!(
            name_line.last(),
            Some(&Inline::Code("dotnet msbuild".to_owned()))
        );
        // "see also" is not a base section.
        assert!(matches!(result.blocks[2], Block::Header { level: 3, .. }));
    }

    #[test]
    fn test_chain_is_idempotent() {
        for profile in [Profile::man(), Profile::legacy()] {
            let once = normalize(sample(), &profile).unwrap();
            let twice = normalize(once.clone(), &profile).unwrap();
            assert_eq!(once, twice, "profile {}", profile.name);
        }
    }

    #[test]
    fn test_error_stops_chain() {
        let document = Document::new(vec![Block::Paragraph(vec![Inline::str("[!INCLUDE")])]);

        assert!(normalize(document, &Profile::man()).is_err());
    }

    #[test]
    fn test_empty_chain_is_identity() {
        assert_eq!(FilterChain::new().apply(sample()).unwrap(), sample());
    }
}
