//! refsync CLI
//!
//! Regenerates the references listing inside a README. Meant to be run from
//! a pre-commit hook or CI.

mod cli;
mod error;
mod sync;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use refsync_fs::NormalizedPath;

use cli::Cli;
use error::{CliError, Result};
use sync::Action;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  {}: {}", "caused by".dimmed(), cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let root = NormalizedPath::canonicalize(&cli.root)?;
    if !root.is_dir() {
        return Err(CliError::user(format!("{} is not a directory", root)));
    }

    let config = sync::resolve_config(&root, &cli)?;
    sync::run_sync(&root, config, Action::from_cli(&cli))
}
