//! Atomic replacement of files on disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::AssembleError;

/// Write lines to `path`, each followed by a newline.
///
/// See [`write_atomic`].
pub fn write_lines_atomic<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), AssembleError> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    write_atomic(path, &content)
}

/// Replace `path` with `content`.
///
/// The content goes to a temporary file in the same directory, which is then
/// renamed over `path`. Readers see either the old or the new file, never a
/// partial one.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), AssembleError> {
    let write_error = |source| AssembleError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(content.as_bytes()).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|err| write_error(err.error))?;

    tracing::debug!(file = %path.display(), bytes = content.len(), "replaced file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "old content that is longer\n").unwrap();

        write_lines_atomic(&path, &["new", ""]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("b.md");

        write_atomic(&path, "text").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "text");
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/c.md");

        let err = write_atomic(&path, "text").unwrap_err();

        assert!(matches!(err, AssembleError::Write { .. }));
    }
}
