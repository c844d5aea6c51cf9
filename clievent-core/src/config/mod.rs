//! Configuration module
//!
//! Describes where client events go and how verbose logging is. Loaded from
//! TOML files by [`toml_config`].

use crate::event::EventKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub mod toml_config;

/// Event output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Write events to the log
    #[serde(default = "default_log")]
    pub log: bool,

    /// Only deliver error-band events
    #[serde(default)]
    pub errors_only: bool,

    /// Event kinds to drop, by display name
    #[serde(default)]
    pub ignore: Vec<EventKind>,

    /// Append JSON event records to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_log: Option<PathBuf>,
}

fn default_log() -> bool {
    true
}

impl SinkConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.json_log {
            if path.as_os_str().is_empty() {
                return Err("json_log path cannot be empty".to_string());
            }
        }

        let mut seen = HashSet::new();
        for kind in &self.ignore {
            if !seen.insert(kind) {
                return Err(format!("Event type listed twice in ignore: {}", kind));
            }
        }

        Ok(())
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            log: default_log(),
            errors_only: false,
            ignore: Vec::new(),
            json_log: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level: off, error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| format!("Invalid log level: {}", self.level))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.level_filter().map(|_| ())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}
