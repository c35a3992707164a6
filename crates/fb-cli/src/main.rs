use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fb_cli::commands::report;
use fb_cli::{Cli, Config, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let path = cli.file.unwrap_or(config.log_path);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.format
    };

    let results = report::run(
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        &path,
        format,
    )?;
    tracing::debug!(users = results.len(), path = %path.display(), "report written");

    Ok(())
}
