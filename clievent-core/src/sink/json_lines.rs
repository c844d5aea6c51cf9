//! JSON lines event log
//!
//! Each delivered event becomes one [`EventRecord`] line on the target writer.

use crate::error::{ClieventError, ConfigError};
use crate::event::{EventRecord, SharedEvent};
use crate::sink::EventSink;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Sink writing newline-delimited JSON records
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl JsonLinesSink<File> {
    /// Open (or create) a log file in append mode
    ///
    /// Missing parent directories are created.
    pub fn append(path: &Path) -> Result<Self, ClieventError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClieventError::Config(ConfigError::IoError {
                    message: format!("Failed to create event log directory: {}", e),
                })
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                ClieventError::Config(ConfigError::IoError {
                    message: format!("Failed to open event log {}: {}", path.display(), e),
                })
            })?;

        debug!("Appending event records to {}", path.display());
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn add_event(&self, event: SharedEvent) {
        let line = match EventRecord::new(&event).to_json_line() {
            Ok(line) => line,
            Err(e) => {
                warn!(event = event.name(), error = %e, "Failed to encode event record");
                return;
            }
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!(event = event.name(), error = %e, "Failed to write event record");
        }
    }
}
