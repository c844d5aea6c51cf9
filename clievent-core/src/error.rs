//! Error types for the clievent crates
//!
//! The event sink contract itself is infallible. These errors only surface
//! when events, records or configuration are built from untrusted input.

use crate::event::{EventKind, PayloadShape};
use thiserror::Error;

/// Main error type for clievent
#[derive(Error, Debug)]
pub enum ClieventError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to event construction or decoding
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON event record errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Errors raised while building an event from dynamic input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Unknown event type: {name}")]
    UnknownKind { name: String },

    #[error("Payload mismatch for {kind}: expected {expected} payload")]
    PayloadMismatch {
        kind: EventKind,
        expected: PayloadShape,
    },

    #[error("{kind} is missing its payload")]
    MissingPayload { kind: EventKind },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ClieventError>;
