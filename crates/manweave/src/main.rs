//! manweave CLI - man-page source assembly and normalization.
//!
//! Provides commands for:
//! - `include`: Flatten include directives in place
//! - `name-section`: Add a missing `# Name` section in place
//! - `filter`: Normalize a document with a profile
//! - `build`: Run all of the above in memory

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, FilterArgs, IncludeArgs, NameSectionArgs};
use output::Output;

/// manweave - man-page source assembly and normalization.
#[derive(Parser)]
#[command(name = "manweave", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover manweave.toml).
    #[arg(short, long, global = true, env = "MANWEAVE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve include directives and replace the file.
    Include(IncludeArgs),
    /// Ensure the file has a "# Name" section.
    NameSection(NameSectionArgs),
    /// Normalize a Markdown or JSON document with a profile.
    Filter(FilterArgs),
    /// Assemble and normalize a document in one pass.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Include(args) => args.execute(),
        Commands::NameSection(args) => args.execute(),
        Commands::Filter(args) => args.execute(config_path),
        Commands::Build(args) => args.execute(config_path),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
