//! CLI error types.

use manweave_assemble::AssembleError;
use manweave_config::ConfigError;
use manweave_filter::FilterError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Assemble(#[from] AssembleError),

    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
