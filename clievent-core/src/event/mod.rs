//! Client event model
//!
//! Every event is an immutable fact: one [`EventKind`] fixed at construction
//! plus the payload that kind carries. Events are shared between producers
//! and consumers as [`SharedEvent`] handles.

use crate::error::EventError;
use std::fmt;
use std::sync::Arc;

pub mod connected;
pub mod kind;
pub mod record;

pub use connected::Connected;
pub use kind::{event_name, EventKind, PayloadShape, ERROR_START, N_TYPES, UNKNOWN_EVENT_TYPE};
pub use record::EventRecord;

/// Shared, read-only handle to an event
pub type SharedEvent = Arc<Event>;

/// Data attached to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Status notification without extra data
    Empty,
    /// Human-readable reason for an error or halt
    Reason(String),
    /// Established session details
    Connected(Box<Connected>),
}

/// A single client event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    payload: Payload,
}

// Constructors for kinds without payload
macro_rules! status_events {
    ($($(#[$doc:meta])* $fn_name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $fn_name() -> Self {
                Self {
                    kind: EventKind::$kind,
                    payload: Payload::Empty,
                }
            }
        )*
    };
}

// Constructors for kinds carrying a reason
macro_rules! reason_events {
    ($($(#[$doc:meta])* $fn_name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $fn_name(reason: impl Into<String>) -> Self {
                Self {
                    kind: EventKind::$kind,
                    payload: Payload::Reason(reason.into()),
                }
            }
        )*
    };
}

impl Event {
    status_events! {
        disconnected => Disconnected,
        reconnecting => Reconnecting,
        /// Resolving the server hostname
        resolve => Resolve,
        wait => Wait,
        /// Waiting on the HTTP proxy
        wait_proxy => WaitProxy,
        connecting => Connecting,
        /// Pulling configuration from the server
        get_config => GetConfig,
        assign_ip => AssignIp,
        add_routes => AddRoutes,
        pause => Pause,
        resume => Resume,
        connection_timeout => ConnectionTimeout,
        inactive_timeout => InactiveTimeout,
    }

    reason_events! {
        /// Server rejected the credentials
        auth_failed => AuthFailed,
        cert_verify_fail => CertVerifyFail,
        /// Server told the client to stop
        client_halt => ClientHalt,
        /// Server told the client to reconnect
        client_restart => ClientRestart,
        dynamic_challenge => DynamicChallenge,
        proxy_need_creds => ProxyNeedCreds,
        proxy_error => ProxyError,
        tun_setup_failed => TunSetupFailed,
        tun_iface_create => TunIfaceCreate,
        epki_error => EpkiError,
        epki_invalid_alias => EpkiInvalidAlias,
    }

    /// Session established
    pub fn connected(info: Connected) -> Self {
        Self {
            kind: EventKind::Connected,
            payload: Payload::Connected(Box::new(info)),
        }
    }

    /// Build a payload-free event for a kind known only at runtime
    pub fn status(kind: EventKind) -> Result<Self, EventError> {
        match kind.shape() {
            PayloadShape::Empty => Ok(Self {
                kind,
                payload: Payload::Empty,
            }),
            expected => Err(EventError::PayloadMismatch { kind, expected }),
        }
    }

    /// Build a reason-carrying event for a kind known only at runtime
    pub fn with_reason(kind: EventKind, reason: impl Into<String>) -> Result<Self, EventError> {
        match kind.shape() {
            PayloadShape::Reason => Ok(Self {
                kind,
                payload: Payload::Reason(reason.into()),
            }),
            expected => Err(EventError::PayloadMismatch { kind, expected }),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Display name of the event kind
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Reason text, for reason-carrying events
    pub fn reason(&self) -> Option<&str> {
        match &self.payload {
            Payload::Reason(reason) => Some(reason),
            _ => None,
        }
    }

    /// Typed view of the session details, present only for `CONNECTED`
    pub fn as_connected(&self) -> Option<&Connected> {
        match &self.payload {
            Payload::Connected(info) => Some(info.as_ref()),
            _ => None,
        }
    }

    /// Human-readable summary
    ///
    /// Empty for status events, the reason verbatim for reason events and
    /// the session line for `CONNECTED`.
    pub fn render(&self) -> String {
        match &self.payload {
            Payload::Empty => String::new(),
            Payload::Reason(reason) => reason.clone(),
            Payload::Connected(info) => info.render(),
        }
    }

    /// Wrap into a shared handle for delivery to sinks
    pub fn into_shared(self) -> SharedEvent {
        Arc::new(self)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.render();
        if detail.is_empty() {
            f.write_str(self.name())
        } else {
            write!(f, "{}: {}", self.name(), detail)
        }
    }
}
