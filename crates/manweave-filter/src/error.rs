//! Filter chain error types.

/// Error raised by a filter pass.
///
/// Every variant aborts processing of the current document.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// An inclusion directive survived into the document tree, meaning the
    /// include resolver never ran on this file.
    #[error("found an unexpected [!INCLUDE: {paragraph}")]
    UnresolvedInclude {
        /// Plain text of the offending paragraph.
        paragraph: String,
    },
}
