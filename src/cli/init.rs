//! Default configuration file creation

use clievent_core::config::toml_config::{get_config_path, TomlConfig};
use clievent_core::config::{LoggingConfig, SinkConfig};
use clievent_core::error::{ClieventError, ConfigError};
use std::path::Path;
use tracing::info;

/// Run the init command
///
/// Writes the default configuration to `path`, or to the default location
/// when no path is given. An existing file is only replaced with `force`.
pub fn run_init(path: Option<&Path>, force: bool) -> Result<(), ClieventError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => get_config_path()?,
    };

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_string_lossy().to_string(),
        }
        .into());
    }

    let config = TomlConfig::new(SinkConfig::default(), LoggingConfig::default());
    config.to_file(&path)?;
    info!("Wrote default config to {}", path.display());

    println!("Configuration saved to {}", path.display());
    Ok(())
}
