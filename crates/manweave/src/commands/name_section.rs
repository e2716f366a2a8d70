//! `manweave name-section` command implementation.

use std::path::PathBuf;

use clap::Args;
use manweave_assemble::ensure_name_section_in_place;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the name-section command.
#[derive(Args)]
pub(crate) struct NameSectionArgs {
    /// Markdown file to update in place.
    file: PathBuf,
}

impl NameSectionArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if ensure_name_section_in_place(&self.file)? {
            output.success(&format!("Added Name section to {}", self.file.display()));
        } else {
            output.warning(&format!(
                "{} already has a \"# Name\" section, left unchanged",
                self.file.display()
            ));
        }
        Ok(())
    }
}
