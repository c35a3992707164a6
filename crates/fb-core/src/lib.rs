//! Core domain logic for fair billing.
//!
//! This crate turns a time-of-day session log into per-user billing totals:
//! - Parsing: `HH:MM:SS <user> <Start|End>` lines into events
//! - Session reconstruction: pairing each `End` with the user's oldest open session
//! - Billing: closing dangling sessions at the log's bounds and summing seconds

pub mod action;
pub mod billing;
pub mod event;
pub mod parser;
pub mod report;
pub mod session;
pub mod source;
pub mod types;

pub use action::{Action, UnknownAction};
pub use billing::{BillingRun, ObservationWindow, UserResult, aggregate, bill, bill_lines};
pub use event::Event;
pub use parser::{Diagnostic, LineError, ParsedLog, parse_line, parse_lines};
pub use session::{Session, SessionBook, UserSessions, reconstruct};
pub use source::{SourceError, read_lines};
pub use types::{UserId, ValidationError};
