//! Event delivery
//!
//! [`EventSink`] is the single contract between the code that emits client
//! events and whatever observes them. Delivery is push, at-most-once, on the
//! caller's thread. A sink never reports failure back to the producer: it
//! logs and drops, or buffers, as its own policy dictates.

use crate::config::SinkConfig;
use crate::error::Result;
use crate::event::SharedEvent;
use std::sync::Arc;
use tracing::debug;

pub mod channel;
pub mod collect;
pub mod fanout;
pub mod filter;
pub mod json_lines;
pub mod log;
pub mod relay;

pub use channel::{ChannelSink, EventReceiver};
pub use collect::CollectingSink;
pub use fanout::FanoutSink;
pub use filter::{EventFilter, FilterSink};
pub use json_lines::JsonLinesSink;
pub use log::LogSink;
pub use relay::EventRelay;

/// Receives events emitted by a client session
///
/// Implementations must tolerate concurrent calls from several producer
/// threads. Any ordering across threads is up to the implementation.
pub trait EventSink: Send + Sync {
    /// Hand one event to the consumer
    fn add_event(&self, event: SharedEvent);
}

/// Shared handle to a type-erased sink
pub type SharedSink = Arc<dyn EventSink>;

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn add_event(&self, event: SharedEvent) {
        (**self).add_event(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn add_event(&self, event: SharedEvent) {
        (**self).add_event(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn add_event(&self, event: SharedEvent) {
        (**self).add_event(event)
    }
}

/// Assemble the sink described by configuration
///
/// Log and JSON outputs are fanned out behind a single filter.
pub fn build_sink(config: &SinkConfig) -> Result<SharedSink> {
    let mut fanout = FanoutSink::new();

    if config.log {
        fanout.push(LogSink);
    }

    if let Some(path) = &config.json_log {
        fanout.push(JsonLinesSink::append(path)?);
    }

    debug!(
        outputs = fanout.len(),
        errors_only = config.errors_only,
        ignored = config.ignore.len(),
        "Assembled event sink"
    );

    Ok(Arc::new(FilterSink::new(EventFilter::from_config(config), fanout)))
}
