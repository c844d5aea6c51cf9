//! Queue-backed sink
//!
//! Producers on any thread push into an unbounded channel; a single consumer
//! drains it, which gives in-order delivery across producers.

use crate::event::SharedEvent;
use crate::sink::EventSink;
use tokio::sync::mpsc;
use tracing::debug;

/// Consumer end of a [`ChannelSink`]
pub type EventReceiver = mpsc::UnboundedReceiver<SharedEvent>;

/// Sink that forwards events into a single-consumer queue
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<SharedEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it
    pub fn new() -> (Self, EventReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Whether the receiver has been dropped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl EventSink for ChannelSink {
    fn add_event(&self, event: SharedEvent) {
        if let Err(mpsc::error::SendError(event)) = self.sender.send(event) {
            debug!(event = event.name(), "Event receiver closed, dropping event");
        }
    }
}
