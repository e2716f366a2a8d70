//! `manweave filter` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use manweave_filter::normalize;

use super::{ProfileOptions, read_document};
use crate::error::CliError;

/// Arguments for the filter command.
#[derive(Args)]
pub(crate) struct FilterArgs {
    /// Markdown document, or a `.json` document tree.
    file: PathBuf,

    #[command(flatten)]
    options: ProfileOptions,
}

impl FilterArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let profile = self.options.load_profile(config_path)?;
        let document = read_document(&self.file)?;

        let document = normalize(document, &profile)?;
        self.options.emit(&document, &profile)
    }
}
