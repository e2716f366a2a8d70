//! Error types for document assembly.

use std::io;
use std::path::PathBuf;

/// Error raised while assembling a document.
///
/// Every variant is fatal for the document being processed.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// A source file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The assembled document could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line holds the include marker but not a well-formed directive.
    #[error("Unable to parse include directive in {}:{line}: {text}", .path.display())]
    MalformedDirective {
        /// File containing the directive.
        path: PathBuf,
        /// 1-based line number, counted after front matter removal.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// No ancestor of the file contains a `.git` directory.
    #[error("No repository root found above {}", .path.display())]
    RepositoryRootNotFound {
        /// File whose root was searched for.
        path: PathBuf,
    },

    /// A file includes itself, directly or through other files.
    #[error("Include cycle: {}", format_chain(.chain))]
    IncludeCycle {
        /// Inclusion chain from the root file to the repeated file.
        chain: Vec<PathBuf>,
    },

    /// The document opens front matter that is never closed.
    #[error("Unterminated front matter in {}", .path.display())]
    UnterminatedFrontMatter {
        /// File with the open front matter block.
        path: PathBuf,
    },

    /// The document has no non-blank line to derive a summary from.
    #[error("Cannot synthesize a Name section for empty document {}", .path.display())]
    EmptyDocument {
        /// The empty file.
        path: PathBuf,
    },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
