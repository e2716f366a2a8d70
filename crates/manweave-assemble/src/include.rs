//! Recursive resolution of `[!INCLUDE [label](path)]` directives.
//!
//! A directive line is replaced by the fully resolved lines of the file it
//! names. Paths starting with `~/` are relative to the repository root of the
//! including file, all others to its directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::AssembleError;
use crate::front_matter;

/// Marker that makes a line an inclusion directive.
pub const INCLUDE_MARKER: &str = "[!INCLUDE";

/// Prefix of repository-rooted include paths.
pub const ROOT_PREFIX: &str = "~/";

/// Directory whose presence marks a repository root.
pub const REPOSITORY_MARKER: &str = ".git";

static INCLUDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[!INCLUDE *\[([^\]]+)\] *\(([^)]+)\)").unwrap());

/// A parsed inclusion directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Bracketed label.
    pub label: String,
    /// Referenced path, as written.
    pub path: String,
}

impl IncludeDirective {
    /// Whether the path is relative to the repository root.
    #[must_use]
    pub fn is_root_relative(&self) -> bool {
        self.path.starts_with(ROOT_PREFIX)
    }
}

/// Parse the directive on a line.
///
/// Returns `None` when the line does not contain a well-formed directive,
/// including lines without the marker at all.
pub fn parse_directive(line: &str) -> Option<IncludeDirective> {
    let caps = INCLUDE_PATTERN.captures(line)?;
    Some(IncludeDirective {
        label: caps[1].to_owned(),
        path: caps[2].to_owned(),
    })
}

/// Find the repository root of a file.
///
/// Walks up from the file's directory to the nearest ancestor holding a
/// `.git` directory. The path is canonicalized first, so `..` segments and
/// symlinks never yield a directory that is not a real ancestor. The
/// filesystem root itself is never a candidate.
pub fn repository_root(file: &Path) -> Result<PathBuf, AssembleError> {
    let canonical = fs::canonicalize(file).map_err(|source| AssembleError::Read {
        path: file.to_path_buf(),
        source,
    })?;

    canonical
        .ancestors()
        .skip(1)
        .take_while(|dir| dir.parent().is_some())
        .find(|dir| dir.join(REPOSITORY_MARKER).is_dir())
        .map(Path::to_path_buf)
        .ok_or_else(|| AssembleError::RepositoryRootNotFound {
            path: file.to_path_buf(),
        })
}

/// Read a file as lines without terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, AssembleError> {
    let content = fs::read_to_string(path).map_err(|source| AssembleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Resolve every inclusion in a file, recursively.
///
/// Front matter of the root file and of every included file is dropped. The
/// result holds no directive lines.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// let lines = manweave_assemble::resolve(Path::new("docs/dotnet-build.md"))?;
/// # Ok::<(), manweave_assemble::AssembleError>(())
/// ```
pub fn resolve(path: &Path) -> Result<Vec<String>, AssembleError> {
    IncludeResolver::default().resolve(path)
}

/// Include resolver tracking the active inclusion chain.
#[derive(Debug, Default)]
struct IncludeResolver {
    /// Canonical paths of the files currently being resolved.
    stack: Vec<PathBuf>,
}

impl IncludeResolver {
    fn resolve(&mut self, path: &Path) -> Result<Vec<String>, AssembleError> {
        let lines = read_lines(path)?;
        let canonical = fs::canonicalize(path).map_err(|source| AssembleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if self.stack.contains(&canonical) {
            let mut chain = self.stack.clone();
            chain.push(canonical);
            return Err(AssembleError::IncludeCycle { chain });
        }

        self.stack.push(canonical);
        let result = self.resolve_lines(path, lines);
        self.stack.pop();
        result
    }

    fn resolve_lines(
        &mut self,
        path: &Path,
        lines: Vec<String>,
    ) -> Result<Vec<String>, AssembleError> {
        let offset = front_matter::body_offset(&lines).ok_or_else(|| {
            AssembleError::UnterminatedFrontMatter {
                path: path.to_path_buf(),
            }
        })?;

        let mut result = Vec::with_capacity(lines.len() - offset);
        for (index, line) in lines.into_iter().enumerate().skip(offset) {
            if !line.contains(INCLUDE_MARKER) {
                result.push(line);
                continue;
            }

            let directive =
                parse_directive(&line).ok_or_else(|| AssembleError::MalformedDirective {
                    path: path.to_path_buf(),
                    line: index + 1,
                    text: line.clone(),
                })?;
            let target = include_target(path, &directive)?;
            tracing::debug!(
                file = %path.display(),
                include = %target.display(),
                label = %directive.label,
                "resolving include"
            );
            result.extend(self.resolve(&target)?);
        }
        Ok(result)
    }
}

/// Path of the file a directive in `file` refers to.
fn include_target(file: &Path, directive: &IncludeDirective) -> Result<PathBuf, AssembleError> {
    match directive.path.strip_prefix(ROOT_PREFIX) {
        Some(rest) => Ok(repository_root(file)?.join(rest)),
        None => Ok(file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&directive.path)),
    }
}
