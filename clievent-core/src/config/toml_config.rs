//! TOML configuration file I/O
//!
//! Handles loading and saving configuration to/from TOML files
//! in the user's configuration directory.

use crate::config::{LoggingConfig, SinkConfig};
use crate::error::{ClieventError, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Complete TOML configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Event output settings
    #[serde(rename = "sink", default)]
    pub sink: SinkConfig,

    /// Logging settings
    #[serde(rename = "logging", default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Create a new TOML configuration
    pub fn new(sink: SinkConfig, logging: LoggingConfig) -> Self {
        Self { sink, logging }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ClieventError> {
        self.sink
            .validate()
            .and_then(|_| self.logging.validate())
            .map_err(|message| ClieventError::Config(ConfigError::ValidationError { message }))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ClieventError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ClieventError::Config(ConfigError::LoadFailed {
                path: path.to_string_lossy().to_string(),
            }),
            _ => ClieventError::Config(ConfigError::IoError {
                message: format!("Failed to read config file: {}", e),
            }),
        })?;

        let config: TomlConfig = toml::from_str(&contents).map_err(|e| {
            ClieventError::Config(ConfigError::ValidationError {
                message: format!("Failed to parse config file: {}", e),
            })
        })?;

        config.validate()?;

        debug!(
            "Loaded config from {}: log={}, errors_only={}, ignored={}, json_log={:?}, level={}",
            path.display(),
            config.sink.log,
            config.sink.errors_only,
            config.sink.ignore.len(),
            config.sink.json_log,
            config.logging.level
        );

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), ClieventError> {
        let contents = toml::to_string_pretty(self)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClieventError::Config(ConfigError::IoError {
                    message: format!("Failed to create config directory: {}", e),
                })
            })?;
        }

        std::fs::write(path, contents).map_err(|e| {
            ClieventError::Config(ConfigError::IoError {
                message: format!("Failed to write config file: {}", e),
            })
        })?;

        Ok(())
    }
}

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the default configuration directory
///
/// Returns ~/.config/clievent, or CLIEVENT_CONFIG_DIR if set
pub fn get_config_dir() -> Result<PathBuf, ClieventError> {
    if let Ok(config_dir) = std::env::var("CLIEVENT_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        ClieventError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("clievent"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, ClieventError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration, falling back to defaults when no config file exists
///
/// The fallback only applies to the default location. An explicit `path`
/// must exist, and a file that fails to parse or validate is always an error.
pub fn load_config_or_default(path: Option<&Path>) -> Result<TomlConfig, ClieventError> {
    if let Some(path) = path {
        return TomlConfig::from_file(path);
    }

    let path = get_config_path()?;
    match TomlConfig::from_file(&path) {
        Err(ClieventError::Config(ConfigError::LoadFailed { .. })) => {
            info!("No config at {}, using defaults", path.display());
            Ok(TomlConfig::default())
        }
        other => other,
    }
}
