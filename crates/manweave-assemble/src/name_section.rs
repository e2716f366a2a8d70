//! Synthesis of the `# Name` section man pages require.

use std::path::Path;

use crate::error::AssembleError;

/// Heading line of the Name section.
pub const NAME_HEADING: &str = "# Name";

/// Heading line inserted after a synthesized Name section.
pub const DESCRIPTION_HEADING: &str = "# Description";

/// Ensure the document has a `# Name` section.
///
/// Documents that already have one are returned unchanged. Otherwise the
/// first non-blank line becomes the summary of a new Name section:
///
/// ```text
/// # Name
///
/// <file stem> - <first line without heading markers>
///
/// # Description
///
/// <remaining lines>
/// ```
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use manweave_assemble::ensure_name_section;
///
/// let lines = vec!["# A cool tool".to_owned(), "Details.".to_owned()];
/// let lines = ensure_name_section(Path::new("foo-bar.md"), lines)?;
///
/// assert_eq!(
///     lines,
///     ["# Name", "", "foo-bar - A cool tool", "", "# Description", "", "Details."]
/// );
/// # Ok::<(), manweave_assemble::AssembleError>(())
/// ```
pub fn ensure_name_section(path: &Path, lines: Vec<String>) -> Result<Vec<String>, AssembleError> {
    if has_name_section(&lines) {
        tracing::warn!(file = %path.display(), "file already has a \"# Name\" section");
        return Ok(lines);
    }

    let mut remaining = lines.into_iter().skip_while(|line| line.trim().is_empty());
    let first = remaining
        .next()
        .ok_or_else(|| AssembleError::EmptyDocument {
            path: path.to_path_buf(),
        })?;

    let mut result = vec![
        NAME_HEADING.to_owned(),
        String::new(),
        format!("{} - {}", command_name(path), summary(&first)),
        String::new(),
        DESCRIPTION_HEADING.to_owned(),
        String::new(),
    ];
    result.extend(remaining);
    Ok(result)
}

/// Whether any line is the Name heading, ignoring surrounding whitespace.
pub fn has_name_section<S: AsRef<str>>(lines: &[S]) -> bool {
    lines.iter().any(|line| line.as_ref().trim() == NAME_HEADING)
}

fn command_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn summary(line: &str) -> &str {
    line.trim().trim_matches('#').trim()
}
