//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Regenerate the references listing inside a README
///
/// Lists the markdown files of the references directory between the
/// `references-structure` markers, keeping any description written after a
/// file name. The README is only rewritten when the listing changed.
///
/// Examples:
///   refsync                      # Update README.md in the current directory
///   refsync --check              # Fail if README.md is out of date (CI)
///   refsync --dry-run            # Show the pending change as a diff
#[derive(Parser, Debug)]
#[command(name = "refsync")]
#[command(author, version, about)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Repository root that relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (.toml, .json, .yaml); defaults to <root>/.refsync.toml if present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// README path, overriding the config
    #[arg(long)]
    pub readme: Option<String>,

    /// References directory, overriding the config
    #[arg(long)]
    pub references: Option<String>,

    /// Exit with an error if the README is out of date, without writing
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Print the pending change as a unified diff, without writing
    #[arg(long)]
    pub dry_run: bool,
}
