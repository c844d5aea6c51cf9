//! Broadcast to several sinks

use crate::event::SharedEvent;
use crate::sink::EventSink;
use std::fmt;
use std::sync::Arc;

/// Delivers each event to every registered sink, in registration order
///
/// All sinks receive the same shared handle; nothing is copied.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push)
    pub fn with<S: EventSink + 'static>(mut self, sink: S) -> Self {
        self.push(sink);
        self
    }

    pub fn push<S: EventSink + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanoutSink")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl EventSink for FanoutSink {
    fn add_event(&self, event: SharedEvent) {
        for sink in &self.sinks {
            sink.add_event(Arc::clone(&event));
        }
    }
}
