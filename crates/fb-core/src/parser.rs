//! Line parsing for session logs.
//!
//! A valid line looks like `14:02:03 ALICE99 Start`: a zero-padded
//! `HH:MM:SS` time of day, a user ID, and an action, separated by single
//! spaces. Lines that don't have this shape are dropped silently. Lines that
//! have the shape but an action other than `Start` or `End` are dropped too,
//! and reported as [`Diagnostic`]s so the caller can surface them.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use thiserror::Error;

use crate::action::Action;
use crate::event::Event;
use crate::types::UserId;

/// Pre-compiled regex for the `HH:MM:SS <user> <action>` line shape.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}) (\S+) (\S+)$").unwrap()
});

/// Why a line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line does not have the `HH:MM:SS <user> <action>` shape, or its
    /// clock fields are out of range.
    #[error("line does not match `HH:MM:SS <user> <action>`")]
    Malformed,

    /// The line has the right shape but the action is not `Start` or `End`.
    #[error("invalid action {action:?}: expected Start or End")]
    UnrecognizedAction { action: String },
}

/// A non-fatal note about a skipped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based position of the line in the input.
    pub line_number: usize,
    /// The raw line text.
    pub line: String,
    pub error: LineError,
}

/// Result of parsing a whole log: the valid events in input order, plus the
/// side channel of diagnostics for lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    pub events: Vec<Event>,
    /// Lines with an unrecognized action.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of lines dropped for not matching the line shape.
    pub malformed: usize,
}

/// Parses a single log line into an [`Event`].
pub fn parse_line(line: &str) -> Result<Event, LineError> {
    let caps = LINE_RE.captures(line).ok_or(LineError::Malformed)?;

    let time = parse_time(&caps[1], &caps[2], &caps[3]).ok_or(LineError::Malformed)?;
    // The regex only admits non-empty, whitespace-free user IDs.
    let user = UserId::new(&caps[4]).map_err(|_| LineError::Malformed)?;
    let action = caps[5]
        .parse::<Action>()
        .map_err(|e| LineError::UnrecognizedAction {
            action: e.token().to_string(),
        })?;

    Ok(Event::new(time, user, action))
}

fn parse_time(hours: &str, minutes: &str, seconds: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(
        hours.parse().ok()?,
        minutes.parse().ok()?,
        seconds.parse().ok()?,
    )
}

/// Parses every line, keeping valid events in input order.
///
/// Never fails: malformed lines are counted and dropped, and lines with an
/// unknown action are dropped with a [`Diagnostic`].
pub fn parse_lines<I, S>(lines: I) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedLog::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(line) {
            Ok(event) => parsed.events.push(event),
            Err(LineError::Malformed) => {
                tracing::trace!(line_number = idx + 1, line, "skipping malformed line");
                parsed.malformed += 1;
            }
            Err(error @ LineError::UnrecognizedAction { .. }) => {
                tracing::warn!(line_number = idx + 1, line, %error, "skipping line");
                parsed.diagnostics.push(Diagnostic {
                    line_number: idx + 1,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        events = parsed.events.len(),
        unrecognized = parsed.diagnostics.len(),
        malformed = parsed.malformed,
        "parsed log lines"
    );

    parsed
}
