//! Serialized form of an event
//!
//! One record per line in JSON event logs. A record keeps the rendered text
//! next to the structured payload so log readers don't need this crate.

use crate::error::{ClieventError, EventError};
use crate::event::{Connected, Event, EventKind, Payload, PayloadShape};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamped snapshot of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event kind, serialized by display name
    pub kind: EventKind,
    /// Error band classification at the time of writing
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<Connected>,
    /// Output of `Event::render`
    #[serde(default)]
    pub rendered: String,
    /// When the record was taken
    pub timestamp: DateTime<Utc>,
}

impl EventRecord {
    /// Snapshot an event, stamped with the current time
    pub fn new(event: &Event) -> Self {
        Self::at(event, Utc::now())
    }

    /// Snapshot an event with an explicit timestamp
    pub fn at(event: &Event, timestamp: DateTime<Utc>) -> Self {
        let (reason, connected) = match event.payload() {
            Payload::Empty => (None, None),
            Payload::Reason(reason) => (Some(reason.clone()), None),
            Payload::Connected(info) => (None, Some(info.as_ref().clone())),
        };

        Self {
            kind: event.kind(),
            error: event.is_error(),
            reason,
            connected,
            rendered: event.render(),
            timestamp,
        }
    }

    /// Rebuild the event, checking the payload against the kind
    ///
    /// The `error` and `rendered` fields are informational and ignored here;
    /// both are derived again from the rebuilt event.
    pub fn into_event(self) -> Result<Event, EventError> {
        let kind = self.kind;
        match (kind.shape(), self.reason, self.connected) {
            (PayloadShape::Empty, None, None) => Event::status(kind),
            (PayloadShape::Reason, Some(reason), None) => Event::with_reason(kind, reason),
            (PayloadShape::Connected, None, Some(info)) => Ok(Event::connected(info)),
            (PayloadShape::Empty, _, _) => Err(EventError::PayloadMismatch {
                kind,
                expected: PayloadShape::Empty,
            }),
            (_, None, None) => Err(EventError::MissingPayload { kind }),
            (expected, _, _) => Err(EventError::PayloadMismatch { kind, expected }),
        }
    }

    /// Encode as a single JSON line (no trailing newline)
    pub fn to_json_line(&self) -> Result<String, ClieventError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode one JSON line
    pub fn from_json_line(line: &str) -> Result<Self, ClieventError> {
        Ok(serde_json::from_str(line.trim())?)
    }
}
