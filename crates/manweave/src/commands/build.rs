//! `manweave build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use manweave_filter::markdown::{DocumentParser, MarkdownParser};
use manweave_filter::normalize;

use super::ProfileOptions;
use crate::error::CliError;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Root Markdown file. It is read, never modified.
    file: PathBuf,

    #[command(flatten)]
    options: ProfileOptions,
}

impl BuildArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let profile = self.options.load_profile(config_path)?;

        let lines = manweave_assemble::assemble(&self.file)?;
        tracing::info!(file = %self.file.display(), lines = lines.len(), "assembled");

        let document = MarkdownParser::new().parse(&lines.join("\n"));
        let document = normalize(document, &profile)?;
        self.options.emit(&document, &profile)
    }
}
