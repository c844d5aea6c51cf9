//! Tracing-backed sink

use crate::event::SharedEvent;
use crate::sink::EventSink;
use tracing::{error, info};

/// Writes every event to the tracing subscriber
///
/// Error-band events are logged at `ERROR`, everything else at `INFO`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn add_event(&self, event: SharedEvent) {
        let detail = event.render();
        if event.is_error() {
            error!(event = event.name(), detail = %detail, "Client error event");
        } else {
            info!(event = event.name(), detail = %detail, "Client event");
        }
    }
}
