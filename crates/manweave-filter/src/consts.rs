//! Fixed markers recognized by the filter passes.

/// First word of an inclusion directive once tokenized into a paragraph.
pub const INCLUDE_MARKER: &str = "[!INCLUDE";

/// Heading-id prefix that marks version-conditional headings.
pub const DEFAULT_VERSION_PREFIX: &str = "net-core-";

/// Code-span prefix of command names rewritten inside the Name section.
pub const DEFAULT_COMMAND_PREFIX: &str = "dotnet ";

/// Callout markers removed from the text.
pub const DEFAULT_ADMONITIONS: &[&str] = &[
    "[!NOTE]",
    "[!TIP]",
    "[!IMPORTANT]",
    "[!WARNING]",
    "[!CAUTION]",
];

/// Section names promoted to top level in every profile.
pub const BASE_SECTIONS: &[&str] = &[
    "name",
    "synopsis",
    "description",
    "options",
    "examples",
    "environment variables",
];

/// Section names the `man` profile recognizes on top of [`BASE_SECTIONS`].
pub const EXTENDED_SECTIONS: &[&str] = &["arguments", "see also"];

/// Title of the section whose command names get hyphenated.
pub const NAME_SECTION: &str = "name";
