//! Billing aggregation.
//!
//! Sessions still open when the log ends are closed at the last timestamp in
//! the file, and sessions whose start happened before the log began are opened
//! at the first timestamp in the file. Both bounds come from the whole log,
//! not from the user's own events.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::parser::{self, Diagnostic};
use crate::session::{self, SessionBook};
use crate::types::UserId;

/// First and last timestamps of the parsed log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationWindow {
    pub first: NaiveTime,
    pub last: NaiveTime,
}

impl ObservationWindow {
    /// Window spanned by the first and last events, or `None` for an empty log.
    pub fn from_events(events: &[Event]) -> Option<Self> {
        Some(Self {
            first: events.first()?.time,
            last: events.last()?.time,
        })
    }
}

/// Billing totals for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResult {
    pub user: UserId,
    pub session_count: usize,
    pub billable_seconds: u64,
}

/// Everything produced by a billing run over raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingRun {
    /// One entry per user, in first-seen order.
    pub results: Vec<UserResult>,
    /// Lines skipped because of an unrecognized action.
    pub diagnostics: Vec<Diagnostic>,
}

impl SessionBook {
    /// Fills every missing session boundary from the observation window.
    pub fn close_open_sessions(&mut self, window: ObservationWindow) {
        for (_, sessions) in self.iter_mut() {
            sessions.close_all(window.first, window.last);
        }
    }
}

/// Closes open sessions and sums each user's billable time.
pub fn aggregate(mut book: SessionBook, window: ObservationWindow) -> Vec<UserResult> {
    book.close_open_sessions(window);

    book.iter()
        .map(|(user, sessions)| {
            let billable_seconds = sessions
                .sessions()
                .iter()
                .filter_map(|s| Some(elapsed_seconds(user, s.start?, s.end?)))
                .sum();
            UserResult {
                user: user.clone(),
                session_count: sessions.len(),
                billable_seconds,
            }
        })
        .collect()
}

/// Whole seconds from `start` to `end` on the same day.
///
/// Times carry no date, so an `end` before `start` cannot be told apart from
/// a session crossing midnight. Such sessions bill nothing.
fn elapsed_seconds(user: &UserId, start: NaiveTime, end: NaiveTime) -> u64 {
    let seconds = (end - start).num_seconds();
    u64::try_from(seconds).unwrap_or_else(|_| {
        tracing::warn!(%user, %start, %end, "session ends before it starts; billing 0s");
        0
    })
}

/// Reconstructs sessions from ordered events and bills every user.
pub fn bill(events: &[Event]) -> Vec<UserResult> {
    let Some(window) = ObservationWindow::from_events(events) else {
        return Vec::new();
    };
    aggregate(session::reconstruct(events), window)
}

/// Runs the whole pipeline over raw log lines.
pub fn bill_lines<I, S>(lines: I) -> BillingRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = parser::parse_lines(lines);
    BillingRun {
        results: bill(&parsed.events),
        diagnostics: parsed.diagnostics,
    }
}
