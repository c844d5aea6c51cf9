//! Buffering sink

use crate::event::SharedEvent;
use crate::sink::EventSink;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps every delivered event in arrival order
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<SharedEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the buffered events
    pub fn events(&self) -> Vec<SharedEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drain the buffer
    pub fn take(&self) -> Vec<SharedEvent> {
        std::mem::take(&mut *self.lock())
    }

    // A panicking consumer elsewhere must not stop delivery here.
    fn lock(&self) -> MutexGuard<'_, Vec<SharedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for CollectingSink {
    fn add_event(&self, event: SharedEvent) {
        self.lock().push(event);
    }
}
