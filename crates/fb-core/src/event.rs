//! Parsed session-boundary events.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::types::UserId;

/// One valid log line: a time of day, the user it concerns, and the boundary
/// it marks.
///
/// Log lines carry no date, so `time` is a bare [`NaiveTime`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// When the boundary was recorded.
    pub time: NaiveTime,
    /// The user whose session this is.
    pub user: UserId,
    /// Whether the session starts or ends here.
    pub action: Action,
}

impl Event {
    pub const fn new(time: NaiveTime, user: UserId, action: Action) -> Self {
        Self { time, user, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization_roundtrip() {
        let event = Event::new(
            NaiveTime::from_hms_opt(14, 2, 3).unwrap(),
            UserId::new("ALICE99").unwrap(),
            Action::Start,
        );

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"time":"14:02:03","user":"ALICE99","action":"Start"}"#);
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn event_rejects_empty_user() {
        let json = r#"{"time": "14:02:03", "user": "", "action": "End"}"#;
        let result: Result<Event, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
