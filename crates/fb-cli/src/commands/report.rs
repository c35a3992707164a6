//! Report command: bill a session log and print per-user totals.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use fb_core::{Diagnostic, LineError, UserResult};

use crate::OutputFormat;

/// Reads the log at `path`, bills it, and writes the report to `out`.
///
/// Lines skipped for an unrecognized action are reported on `err`; a missing
/// log file is an error.
pub fn run<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    path: &Path,
    format: OutputFormat,
) -> Result<Vec<UserResult>> {
    let lines = fb_core::read_lines(path).context("failed to load session log")?;
    let run = fb_core::bill_lines(&lines);

    for diagnostic in &run.diagnostics {
        writeln!(err, "{}", describe(diagnostic))?;
    }

    match format {
        OutputFormat::Table => write!(out, "{}", fb_core::report::format_table(&run.results))?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            fb_core::report::format_json(&run.results).context("failed to serialize report")?
        )?,
    }

    Ok(run.results)
}

fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.error {
        LineError::UnrecognizedAction { .. } => format!(
            "Invalid action: action not set to either Start or End in line {} - skipped",
            diagnostic.line
        ),
        LineError::Malformed => format!("Malformed line {} - skipped", diagnostic.line),
    }
}
