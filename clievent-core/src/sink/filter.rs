//! Event filtering

use crate::config::SinkConfig;
use crate::event::{Event, EventKind, SharedEvent};
use crate::sink::EventSink;
use tracing::trace;

/// Which events an observer wants to see
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Drop every status-band event
    pub errors_only: bool,
    /// Kinds to drop regardless of band
    pub ignore: Vec<EventKind>,
}

impl EventFilter {
    /// Filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SinkConfig) -> Self {
        Self {
            errors_only: config.errors_only,
            ignore: config.ignore.clone(),
        }
    }

    pub fn accepts(&self, event: &Event) -> bool {
        if self.errors_only && !event.is_error() {
            return false;
        }
        !self.ignore.contains(&event.kind())
    }
}

/// Forwards events accepted by an [`EventFilter`] to an inner sink
#[derive(Debug)]
pub struct FilterSink<S> {
    filter: EventFilter,
    inner: S,
}

impl<S: EventSink> FilterSink<S> {
    pub fn new(filter: EventFilter, inner: S) -> Self {
        Self { filter, inner }
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }
}

impl<S: EventSink> EventSink for FilterSink<S> {
    fn add_event(&self, event: SharedEvent) {
        if self.filter.accepts(&event) {
            self.inner.add_event(event);
        } else {
            trace!(event = event.name(), "Event filtered out");
        }
    }
}
