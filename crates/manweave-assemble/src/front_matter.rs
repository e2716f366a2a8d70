//! Front matter detection.

/// Line that opens and closes a front matter block.
pub const DELIMITER: &str = "---";

/// Index of the first body line, past any front matter.
///
/// Returns `Some(0)` when the document has no front matter and `None` when
/// the opening delimiter is never closed.
pub fn body_offset<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    match lines.first() {
        Some(first) if first.as_ref() == DELIMITER => lines[1..]
            .iter()
            .position(|line| line.as_ref() == DELIMITER)
            .map(|close| close + 2),
        _ => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_front_matter() {
        assert_eq!(body_offset(&["# dotnet", "---"]), Some(0));
        assert_eq!(body_offset::<&str>(&[]), Some(0));
    }

    #[test]
    fn test_front_matter_is_skipped() {
        let lines = ["---", "title: dotnet build", "ms.date: 2019", "---", "# dotnet build"];

        assert_eq!(body_offset(&lines), Some(4));
    }

    #[test]
    fn test_empty_front_matter() {
        assert_eq!(body_offset(&["---", "---"]), Some(2));
    }

    #[test]
    fn test_delimiter_must_be_exact() {
        assert_eq!(body_offset(&[" ---", "---"]), Some(0));
        assert_eq!(body_offset(&["---", "--- ", "text"]), None);
    }

    #[test]
    fn test_unterminated_front_matter() {
        assert_eq!(body_offset(&["---", "title: x", "# Heading"]), None);
    }
}
