//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Fair billing report.
///
/// Reads a session log of `HH:MM:SS <user> <Start|End>` lines and prints the
/// number of sessions and total billable seconds per user.
#[derive(Debug, Parser)]
#[command(name = "fair-billing", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Session log to bill. Defaults to `log_path` from the configuration.
    pub file: Option<PathBuf>,
}
