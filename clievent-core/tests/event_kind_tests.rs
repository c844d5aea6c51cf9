//! Unit tests for the event type registry
//!
//! Tests display names, the unknown-ordinal sentinel and error classification.

use clievent_core::event::{event_name, EventKind, ERROR_START, N_TYPES, UNKNOWN_EVENT_TYPE};

const EXPECTED_NAMES: [&str; 25] = [
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

#[test]
fn test_declared_kind_count() {
    assert_eq!(N_TYPES, 25);
    assert_eq!(EventKind::ALL.len(), N_TYPES);
}

#[test]
fn test_every_kind_has_its_fixed_name() {
    for (kind, expected) in EventKind::ALL.iter().zip(EXPECTED_NAMES) {
        assert_eq!(kind.name(), expected);
        assert_eq!(event_name(kind.ordinal()), expected);
        assert_eq!(kind.to_string(), expected);
    }
}

#[test]
fn test_out_of_range_ordinal_is_unknown() {
    assert_eq!(UNKNOWN_EVENT_TYPE, "UNKNOWN_EVENT_TYPE");
    assert_eq!(event_name(N_TYPES as u32), "UNKNOWN_EVENT_TYPE");
    assert_eq!(event_name(N_TYPES as u32 + 7), "UNKNOWN_EVENT_TYPE");
    assert_eq!(event_name(u32::MAX), "UNKNOWN_EVENT_TYPE");
}

#[test]
fn test_from_ordinal() {
    assert_eq!(EventKind::from_ordinal(0), Some(EventKind::Disconnected));
    assert_eq!(EventKind::from_ordinal(12), Some(EventKind::AuthFailed));
    assert_eq!(EventKind::from_ordinal(24), Some(EventKind::EpkiInvalidAlias));
    assert_eq!(EventKind::from_ordinal(25), None);
}

#[test]
fn test_status_band_is_not_error() {
    let status = [
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
    ];

    for kind in status {
        assert!(!kind.is_error(), "{} should not be an error", kind);
    }
}

#[test]
fn test_error_band_from_auth_failed_on() {
    assert_eq!(ERROR_START, EventKind::AuthFailed);

    let errors: Vec<EventKind> = EventKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.ordinal() >= EventKind::AuthFailed.ordinal())
        .collect();

    assert_eq!(errors.len(), 13);
    assert_eq!(errors.first(), Some(&EventKind::AuthFailed));
    assert_eq!(errors.last(), Some(&EventKind::EpkiInvalidAlias));
    for kind in errors {
        assert!(kind.is_error(), "{} should be an error", kind);
    }
}

#[test]
fn test_is_error_is_threshold_on_ordinal() {
    for kind in EventKind::ALL {
        assert_eq!(kind.is_error(), kind.ordinal() >= ERROR_START.ordinal());
    }
}

#[test]
fn test_parse_display_name() {
    assert_eq!("AUTH_FAILED".parse::<EventKind>(), Ok(EventKind::AuthFailed));
    assert_eq!("wait-proxy".parse::<EventKind>(), Ok(EventKind::WaitProxy));
    assert_eq!(" assign_ip ".parse::<EventKind>(), Ok(EventKind::AssignIp));
}

#[test]
fn test_parse_unknown_name() {
    let err = "NOT_A_KIND".parse::<EventKind>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown event type: NOT_A_KIND");

    assert!("UNKNOWN_EVENT_TYPE".parse::<EventKind>().is_err());
}

#[test]
fn test_kinds_are_ordered_by_ordinal() {
    assert!(EventKind::Resume < EventKind::AuthFailed);
    assert!(EventKind::Disconnected < EventKind::Connected);
}
