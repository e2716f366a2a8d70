//! Output profiles: which sections are recognized and which passes run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::{
    BASE_SECTIONS, DEFAULT_ADMONITIONS, DEFAULT_COMMAND_PREFIX, DEFAULT_VERSION_PREFIX,
    EXTENDED_SECTIONS,
};

/// Identifier of a built-in filter pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FilterKind {
    /// Fail on paragraphs that still hold `[!INCLUDE`.
    RejectIncludes,
    /// Blank paragraphs that still hold `[!INCLUDE`.
    BlankIncludes,
    /// Uppercase recognized sections and lift them to level 1.
    PromoteSections,
    /// Demote version-conditional headings to level 2.
    DemoteVersioned,
    /// Hyphenate command code spans in the Name section.
    FixCommandNames,
    /// Remove callout markers.
    StripAdmonitions,
    /// Replace links by their labels.
    FlattenLinks,
}

impl FilterKind {
    /// All passes, in their canonical order.
    pub const ALL: [Self; 7] = [
        Self::RejectIncludes,
        Self::BlankIncludes,
        Self::PromoteSections,
        Self::DemoteVersioned,
        Self::FixCommandNames,
        Self::StripAdmonitions,
        Self::FlattenLinks,
    ];

    /// Parse a pass from its kebab-case name.
    ///
    /// Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Kebab-case name of the pass.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RejectIncludes => "reject-includes",
            Self::BlankIncludes => "blank-includes",
            Self::PromoteSections => "promote-sections",
            Self::DemoteVersioned => "demote-versioned",
            Self::FixCommandNames => "fix-command-names",
            Self::StripAdmonitions => "strip-admonitions",
            Self::FlattenLinks => "flatten-links",
        }
    }
}

/// Named configuration of the filter chain for one output target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    /// Profile name (e.g., "man").
    pub name: String,
    /// Lowercase section names promoted to top level.
    pub sections: Vec<String>,
    /// Passes to run, in order.
    pub filters: Vec<FilterKind>,
    /// Heading-id prefix of version-conditional headings.
    pub version_prefix: String,
    /// Code-span prefix of command names in the Name section.
    pub command_prefix: String,
    /// Exact callout markers to strip.
    pub admonitions: Vec<String>,
}

impl Profile {
    /// Name of the default profile.
    pub const DEFAULT: &'static str = "man";

    /// Names of all built-in profiles.
    pub const BUILTIN: [&'static str; 2] = ["man", "legacy"];

    /// Current man-page profile.
    ///
    /// Recognizes the extended section set and cleans up command names and
    /// callouts. Links are kept for the renderer.
    #[must_use]
    pub fn man() -> Self {
        Self {
            name: "man".to_owned(),
            sections: owned_strings(BASE_SECTIONS.iter().chain(EXTENDED_SECTIONS)),
            filters: vec![
                FilterKind::RejectIncludes,
                FilterKind::PromoteSections,
                FilterKind::DemoteVersioned,
                FilterKind::FixCommandNames,
                FilterKind::StripAdmonitions,
            ],
            ..Self::defaults()
        }
    }

    /// Legacy profile for renderers without hyperlink support.
    ///
    /// Recognizes only the base section set and flattens every link.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            name: "legacy".to_owned(),
            sections: owned_strings(BASE_SECTIONS),
            filters: vec![
                FilterKind::RejectIncludes,
                FilterKind::PromoteSections,
                FilterKind::DemoteVersioned,
                FilterKind::FlattenLinks,
            ],
            ..Self::defaults()
        }
    }

    /// Look up a built-in profile by name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "man" => Some(Self::man()),
            "legacy" => Some(Self::legacy()),
            _ => None,
        }
    }

    fn defaults() -> Self {
        Self {
            name: String::new(),
            sections: Vec::new(),
            filters: Vec::new(),
            version_prefix: DEFAULT_VERSION_PREFIX.to_owned(),
            command_prefix: DEFAULT_COMMAND_PREFIX.to_owned(),
            admonitions: owned_strings(DEFAULT_ADMONITIONS),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::man()
    }
}

fn owned_strings<'a>(items: impl IntoIterator<Item = &'a &'a str>) -> Vec<String> {
    items.into_iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_man_profile_extends_base_sections() {
        let profile = Profile::man();
        assert!(profile.sections.iter().any(|s| s == "see also"));
        assert!(profile.sections.iter().any(|s| s == "arguments"));
        assert!(profile.sections.iter().any(|s| s == "environment variables"));
        assert!(!profile.filters.contains(&FilterKind::FlattenLinks));
    }

    #[test]
    fn test_legacy_profile_uses_base_sections() {
        let profile = Profile::legacy();
        assert_eq!(profile.sections.len(), BASE_SECTIONS.len());
        assert!(!profile.sections.iter().any(|s| s == "see also"));
        assert_eq!(profile.filters.last(), Some(&FilterKind::FlattenLinks));
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(Profile::builtin("legacy"), Some(Profile::legacy()));
        assert_eq!(Profile::builtin(Profile::DEFAULT), Some(Profile::man()));
        assert!(Profile::builtin("html").is_none());
    }

    #[test]
    fn test_filter_kind_names_round_trip() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::parse(kind.as_str()), Some(kind));
        }
        assert!(FilterKind::parse("remove-everything").is_none());
    }
}
