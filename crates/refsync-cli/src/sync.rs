//! Sync, check and dry-run implementations

use colored::Colorize;

use refsync_core::{SyncConfig, SyncMode, SyncReport, Synchronizer};
use refsync_fs::NormalizedPath;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Config file picked up from the root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".refsync.toml";

/// What the invocation should do with the rebuilt README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Sync,
    Check,
    DryRun,
}

impl Action {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.check {
            Self::Check
        } else if cli.dry_run {
            Self::DryRun
        } else {
            Self::Sync
        }
    }

    fn mode(self) -> SyncMode {
        match self {
            Self::Sync => SyncMode::Write,
            Self::Check | Self::DryRun => SyncMode::Preview,
        }
    }
}

/// Build the effective config: file (explicit or discovered) then flags.
pub fn resolve_config(root: &NormalizedPath, cli: &Cli) -> Result<SyncConfig> {
    let mut config = match &cli.config {
        Some(path) => SyncConfig::load(&NormalizedPath::new(path))?,
        None => {
            let discovered = root.join(DEFAULT_CONFIG_FILE);
            if discovered.exists() {
                tracing::debug!(path = %discovered, "using discovered config");
                SyncConfig::load(&discovered)?
            } else {
                SyncConfig::default()
            }
        }
    };

    if let Some(readme) = &cli.readme {
        config.readme = readme.clone();
    }
    if let Some(references) = &cli.references {
        config.references = references.clone();
    }
    Ok(config)
}

/// Run the synchronizer against the filesystem under `root`.
pub fn run_sync(root: &NormalizedPath, config: SyncConfig, action: Action) -> Result<()> {
    let synchronizer = Synchronizer::on_disk(config, root.clone());
    let report = synchronizer.run(action.mode())?;

    match action {
        Action::Sync => print_sync(&report),
        Action::DryRun => print_dry_run(&report),
        Action::Check => {
            if report.is_changed() {
                return Err(CliError::Stale {
                    path: report.readme.to_string(),
                });
            }
            print_up_to_date(&report);
        }
    }
    Ok(())
}

fn print_sync(report: &SyncReport) {
    if report.written {
        println!(
            "{} {} ({} references)",
            "UPDATED".green().bold(),
            report.readme.to_string().cyan(),
            report.references.len()
        );
        print_dropped(report);
    } else {
        print_up_to_date(report);
    }
}

fn print_dry_run(report: &SyncReport) {
    if !report.is_changed() {
        print_up_to_date(report);
        return;
    }

    println!(
        "{} {} would change:",
        "PENDING".yellow().bold(),
        report.readme.to_string().cyan()
    );
    for line in report.unified_diff().lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
    print_dropped(report);
}

fn print_up_to_date(report: &SyncReport) {
    println!(
        "{} {} is up to date.",
        "OK".green().bold(),
        report.readme.to_string().cyan()
    );
}

fn print_dropped(report: &SyncReport) {
    for name in &report.dropped {
        println!(
            "   {} description for {} dropped, file no longer exists",
            "-".yellow(),
            name.cyan()
        );
    }
}
