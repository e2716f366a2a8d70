//! Heading identifiers derived from heading text.

/// Derive a heading identifier from its plain text.
///
/// Keeps alphanumerics, `_`, `-` and `.`, turns whitespace into `-`,
/// lowercases, and drops everything before the first letter. Falls back to
/// `section` when nothing is left.
///
/// # Examples
///
/// ```
/// use manweave_filter::markdown::slugify;
///
/// assert_eq!(slugify(".NET Core 2.x"), "net-core-2.x");
/// assert_eq!(slugify("See also"), "see-also");
/// assert_eq!(slugify("2024"), "section");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.') {
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            slug.push('-');
        }
    }

    match slug.find(char::is_alphabetic) {
        Some(start) => slug[start..].to_owned(),
        None => "section".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(slugify("Options (advanced)!"), "options-advanced");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_periods() {
        assert_eq!(slugify("DOTNET_ROOT vs. PATH"), "dotnet_root-vs.-path");
    }

    #[test]
    fn test_slugify_strips_leading_non_letters() {
        assert_eq!(slugify("1. Install"), "install");
        assert_eq!(slugify(".NET Core 1.x"), "net-core-1.x");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), "section");
        assert_eq!(slugify("--"), "section");
    }
}
