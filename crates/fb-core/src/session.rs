//! Session reconstruction from ordered boundary events.
//!
//! Each user's events are paired first-in, first-out: a `Start` always opens
//! a new session, and an `End` closes the *oldest* session of that user that
//! is still open. When a user has no open session, the `End` becomes a session
//! of its own whose start lies before the log began.
//!
//! # Open-suffix invariant
//!
//! Within one user's list, sessions missing their end always form a
//! contiguous suffix. A `Start` appends to that suffix, an `End` either closes
//! its first element or (when the suffix is empty) appends a closed session.
//! [`UserSessions`] therefore keeps an index to the earliest open session
//! instead of rescanning the list on every `End`.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::event::Event;
use crate::types::UserId;

/// One user's connection interval.
///
/// During reconstruction at most one side is missing. A missing `start` means
/// the session began before the log window; a missing `end` means it is still
/// open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserId,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl Session {
    /// A session opened by a `Start` at `start`.
    pub const fn started(user: UserId, start: NaiveTime) -> Self {
        Self {
            user,
            start: Some(start),
            end: None,
        }
    }

    /// A session known only from an `End` at `end`.
    pub const fn ended(user: UserId, end: NaiveTime) -> Self {
        Self {
            user,
            start: None,
            end: Some(end),
        }
    }

    /// Whether the session still waits for its `End`.
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Sessions of a single user in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSessions {
    sessions: Vec<Session>,
    /// Index of the earliest open session, or `sessions.len()` if none.
    first_open: usize,
}

impl UserSessions {
    fn start(&mut self, user: &UserId, time: NaiveTime) {
        self.sessions.push(Session::started(user.clone(), time));
    }

    fn end(&mut self, user: &UserId, time: NaiveTime) {
        if let Some(session) = self.sessions.get_mut(self.first_open) {
            debug_assert!(session.is_open());
            session.end = Some(time);
            self.first_open += 1;
        } else {
            self.sessions.push(Session::ended(user.clone(), time));
            self.first_open = self.sessions.len();
        }
    }

    /// Number of sessions still waiting for an `End`.
    pub fn open_count(&self) -> usize {
        self.sessions.len() - self.first_open
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Fills missing starts with `first` and missing ends with `last`.
    pub(crate) fn close_all(&mut self, first: NaiveTime, last: NaiveTime) {
        for session in &mut self.sessions {
            session.start.get_or_insert(first);
            session.end.get_or_insert(last);
        }
        self.first_open = self.sessions.len();
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Per-user sessions, keyed by user in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionBook {
    users: Vec<(UserId, UserSessions)>,
    index: HashMap<UserId, usize>,
}

impl SessionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event to the owning user's sessions.
    pub fn record(&mut self, event: &Event) {
        let sessions = self.sessions_for(&event.user);
        match event.action {
            Action::Start => sessions.start(&event.user, event.time),
            Action::End => sessions.end(&event.user, event.time),
        }
    }

    fn sessions_for(&mut self, user: &UserId) -> &mut UserSessions {
        let idx = match self.index.get(user) {
            Some(&idx) => idx,
            None => {
                let idx = self.users.len();
                self.users.push((user.clone(), UserSessions::default()));
                self.index.insert(user.clone(), idx);
                idx
            }
        };
        &mut self.users[idx].1
    }

    /// Sessions recorded for `user`, if the user has appeared.
    pub fn get(&self, user: &UserId) -> Option<&UserSessions> {
        self.index.get(user).map(|&idx| &self.users[idx].1)
    }

    /// Users and their sessions in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &UserSessions)> {
        self.users.iter().map(|(user, sessions)| (user, sessions))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&UserId, &mut UserSessions)> {
        self.users.iter_mut().map(|(user, sessions)| (&*user, sessions))
    }

    /// Number of distinct users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Pairs the given events into sessions, in order.
pub fn reconstruct(events: &[Event]) -> SessionBook {
    let mut book = SessionBook::new();
    for event in events {
        book.record(event);
    }

    tracing::debug!(
        users = book.len(),
        sessions = book.iter().map(|(_, s)| s.len()).sum::<usize>(),
        open = book.iter().map(|(_, s)| s.open_count()).sum::<usize>(),
        "reconstructed sessions"
    );

    book
}
