//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod filter;
pub(crate) mod include;
pub(crate) mod name_section;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use manweave_config::{CliSettings, Config};
use manweave_filter::markdown::{
    DocumentParser, DocumentSerializer, MarkdownParser, MarkdownSerializer,
};
use manweave_filter::{Document, Profile};

pub(crate) use build::BuildArgs;
pub(crate) use filter::FilterArgs;
pub(crate) use include::IncludeArgs;
pub(crate) use name_section::NameSectionArgs;

use crate::error::CliError;
use crate::output::Output;

/// Output format of normalized documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Markdown text.
    #[default]
    Markdown,
    /// Document tree as JSON.
    Json,
}

/// Profile selection and output options shared by `filter` and `build`.
#[derive(Args)]
pub(crate) struct ProfileOptions {
    /// Profile to apply (overrides config).
    #[arg(short, long)]
    profile: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ProfileOptions {
    /// Load the config and resolve the selected profile.
    pub(crate) fn load_profile(&self, config_path: Option<&Path>) -> Result<Profile, CliError> {
        let cli_settings = CliSettings {
            profile: self.profile.clone(),
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(config = %path.display(), "loaded configuration");
        }
        Ok(config.profile()?)
    }

    /// Serialize the document to the output file or stdout.
    pub(crate) fn emit(&self, document: &Document, profile: &Profile) -> Result<(), CliError> {
        let rendered = render(document, self.format)?;

        match &self.output {
            Some(path) => {
                manweave_assemble::write_atomic(path, &rendered)?;
                Output::new().success(&format!(
                    "Wrote {} ({} profile)",
                    path.display(),
                    profile.name
                ));
            }
            None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
        }
        Ok(())
    }
}

/// Read a document, as a JSON tree for `.json` files and Markdown otherwise.
pub(crate) fn read_document(path: &Path) -> Result<Document, CliError> {
    let content = std::fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(MarkdownParser::new().parse(&content))
    }
}

/// Serialize a document in the given format.
fn render(document: &Document, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Markdown => Ok(MarkdownSerializer.serialize(document)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(document)?;
            json.push('\n');
            Ok(json)
        }
    }
}
