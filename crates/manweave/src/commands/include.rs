//! `manweave include` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the include command.
#[derive(Args)]
pub(crate) struct IncludeArgs {
    /// Markdown file to flatten in place.
    file: PathBuf,
}

impl IncludeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        manweave_assemble::resolve_in_place(&self.file)?;

        Output::new().success(&format!("Resolved includes in {}", self.file.display()));
        Ok(())
    }
}
