//! Assembly of man-page Markdown sources.
//!
//! Prepares a reference page for parsing:
//!
//! - [`resolve`] flattens `[!INCLUDE [label](path)]` directives recursively
//!   and drops front matter
//! - [`ensure_name_section`] adds the `# Name` section man pages need
//! - [`write_atomic`] and [`write_lines_atomic`] replace files without ever
//!   leaving a partial write behind
//!
//! [`resolve_in_place`] and [`ensure_name_section_in_place`] combine a step
//! with atomic replacement of the source file. [`assemble`] runs both steps
//! in memory.

mod error;
pub mod front_matter;
mod include;
mod name_section;
mod persist;

use std::path::Path;

pub use error::AssembleError;
pub use include::{
    INCLUDE_MARKER, IncludeDirective, REPOSITORY_MARKER, ROOT_PREFIX, parse_directive,
    read_lines, repository_root, resolve,
};
pub use name_section::{DESCRIPTION_HEADING, NAME_HEADING, ensure_name_section, has_name_section};
pub use persist::{write_atomic, write_lines_atomic};

/// Resolve includes in a file and replace it with the flattened lines.
///
/// Nothing is written when resolution fails.
pub fn resolve_in_place(path: &Path) -> Result<(), AssembleError> {
    let lines = resolve(path)?;
    write_lines_atomic(path, &lines)
}

/// Ensure a file has a Name section, replacing it when one is added.
///
/// Returns whether the file was rewritten.
pub fn ensure_name_section_in_place(path: &Path) -> Result<bool, AssembleError> {
    let lines = read_lines(path)?;
    let updated = ensure_name_section(path, lines.clone())?;
    if updated == lines {
        return Ok(false);
    }
    write_lines_atomic(path, &updated)?;
    Ok(true)
}

/// Resolve includes and ensure a Name section, without touching the file.
pub fn assemble(path: &Path) -> Result<Vec<String>, AssembleError> {
    let lines = resolve(path)?;
    ensure_name_section(path, lines)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_in_place_rewrites_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), "included\n").unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "---\nms.date: 2020\n---\n# a\n[!INCLUDE [b](b.md)]\n").unwrap();

        resolve_in_place(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# a\nincluded\n");
    }

    #[test]
    fn test_failed_resolution_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.md");
        let original = "# a\n[!INCLUDE [b](b.md\n";
        fs::write(&path, original).unwrap();

        assert!(resolve_in_place(&path).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_name_section_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("foo-bar.md");
        fs::write(&path, "# A cool tool\n").unwrap();

        assert!(ensure_name_section_in_place(&path).unwrap());
        assert!(!ensure_name_section_in_place(&path).unwrap());

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Name\n\nfoo-bar - A cool tool\n\n# Description\n\n"
        );
    }

    #[test]
    fn test_assemble_runs_both_steps() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("synopsis.md"), "dotnet build [options]\n").unwrap();
        let path = dir.path().join("dotnet-build.md");
        fs::write(&path, "# dotnet build\n[!INCLUDE [s](synopsis.md)]\n").unwrap();

        let lines = assemble(&path).unwrap();

        assert_eq!(
            lines,
            vec![
                "# Name",
                "",
                "dotnet-build - dotnet build",
                "",
                "# Description",
                "",
                "dotnet build [options]",
            ]
        );
        // The source file is not modified.
        assert!(fs::read_to_string(&path).unwrap().contains("[!INCLUDE"));
    }
}
