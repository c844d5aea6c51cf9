//! Event type registry
//!
//! The closed set of client event kinds, their stable display names and the
//! ordinal threshold that separates status events from error events.

use crate::error::EventError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of declared event kinds
pub const N_TYPES: usize = 25;

/// First kind of the error band; every kind at or above it is an error
pub const ERROR_START: EventKind = EventKind::AuthFailed;

/// Returned by [`event_name`] for ordinals outside the declared range
pub const UNKNOWN_EVENT_TYPE: &str = "UNKNOWN_EVENT_TYPE";

/// Display names indexed by ordinal. Must stay in declaration order.
const NAMES: [&str; N_TYPES] = [
    "DISCONNECTED",
    "CONNECTED",
    "RECONNECTING",
    "RESOLVE",
    "WAIT",
    "WAIT_PROXY",
    "CONNECTING",
    "GET_CONFIG",
    "ASSIGN_IP",
    "ADD_ROUTES",
    "PAUSE",
    "RESUME",
    "AUTH_FAILED",
    "CERT_VERIFY_FAIL",
    "CLIENT_HALT",
    "CLIENT_RESTART",
    "CONNECTION_TIMEOUT",
    "INACTIVE_TIMEOUT",
    "DYNAMIC_CHALLENGE",
    "PROXY_NEED_CREDS",
    "PROXY_ERROR",
    "TUN_SETUP_FAILED",
    "TUN_IFACE_CREATE",
    "EPKI_ERROR",
    "EPKI_INVALID_ALIAS",
];

/// Kinds of events a client session reports
///
/// Status kinds come first, then the error band starting at [`ERROR_START`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum EventKind {
    // status band
    Disconnected = 0,
    Connected,
    Reconnecting,
    Resolve,
    Wait,
    WaitProxy,
    Connecting,
    GetConfig,
    AssignIp,
    AddRoutes,
    Pause,
    Resume,

    // error band
    AuthFailed,
    CertVerifyFail,
    ClientHalt,
    ClientRestart,
    ConnectionTimeout,
    InactiveTimeout,
    DynamicChallenge,
    ProxyNeedCreds,
    ProxyError,
    TunSetupFailed,
    TunIfaceCreate,
    /// External PKI failure while accessing certificates or keys
    EpkiError,
    EpkiInvalidAlias,
}

/// Payload shape carried by events of a given kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// No data beyond the kind
    Empty,
    /// A single human-readable reason
    Reason,
    /// Session details of an established connection
    Connected,
}

impl fmt::Display for PayloadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadShape::Empty => write!(f, "empty"),
            PayloadShape::Reason => write!(f, "reason"),
            PayloadShape::Connected => write!(f, "connected"),
        }
    }
}

impl EventKind {
    /// Every declared kind in ordinal order
    pub const ALL: [EventKind; N_TYPES] = [
        EventKind::Disconnected,
        EventKind::Connected,
        EventKind::Reconnecting,
        EventKind::Resolve,
        EventKind::Wait,
        EventKind::WaitProxy,
        EventKind::Connecting,
        EventKind::GetConfig,
        EventKind::AssignIp,
        EventKind::AddRoutes,
        EventKind::Pause,
        EventKind::Resume,
        EventKind::AuthFailed,
        EventKind::CertVerifyFail,
        EventKind::ClientHalt,
        EventKind::ClientRestart,
        EventKind::ConnectionTimeout,
        EventKind::InactiveTimeout,
        EventKind::DynamicChallenge,
        EventKind::ProxyNeedCreds,
        EventKind::ProxyError,
        EventKind::TunSetupFailed,
        EventKind::TunIfaceCreate,
        EventKind::EpkiError,
        EventKind::EpkiInvalidAlias,
    ];

    /// Ordinal position of this kind
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Look up a kind by ordinal
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Stable display name, e.g. `AUTH_FAILED`
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Whether this kind belongs to the error band
    pub fn is_error(self) -> bool {
        self.ordinal() >= ERROR_START.ordinal()
    }

    /// Payload shape events of this kind carry
    pub fn shape(self) -> PayloadShape {
        match self {
            EventKind::Connected => PayloadShape::Connected,
            EventKind::AuthFailed
            | EventKind::CertVerifyFail
            | EventKind::ClientHalt
            | EventKind::ClientRestart
            | EventKind::DynamicChallenge
            | EventKind::ProxyNeedCreds
            | EventKind::ProxyError
            | EventKind::TunSetupFailed
            | EventKind::TunIfaceCreate
            | EventKind::EpkiError
            | EventKind::EpkiInvalidAlias => PayloadShape::Reason,
            _ => PayloadShape::Empty,
        }
    }
}

/// Display name for a raw ordinal
///
/// Ordinals past the declared range map to `UNKNOWN_EVENT_TYPE`, so
/// values produced by newer emitters still render.
pub fn event_name(ordinal: u32) -> &'static str {
    NAMES
        .get(ordinal as usize)
        .copied()
        .unwrap_or(UNKNOWN_EVENT_TYPE)
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    /// Parse a display name. Case is ignored and `-` is accepted for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_uppercase();
        NAMES
            .iter()
            .position(|name| *name == wanted)
            .and_then(|idx| Self::from_ordinal(idx as u32))
            .ok_or_else(|| EventError::UnknownKind {
                name: s.to_string(),
            })
    }
}
