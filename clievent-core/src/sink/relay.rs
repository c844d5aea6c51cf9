//! Attachable event relay
//!
//! A client session always reports into the same relay; the observer behind
//! it is attached for the duration of a connection and detached afterwards.
//! Events emitted while nothing is attached are dropped.

use crate::event::SharedEvent;
use crate::sink::{EventSink, SharedSink};
use std::fmt;
use std::panic;
use std::sync::{PoisonError, RwLock};
use std::thread;
use tracing::{debug, warn};

/// Forwards events to the currently attached observer, if any
#[derive(Default)]
pub struct EventRelay {
    observer: RwLock<Option<SharedSink>>,
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route subsequent events to `observer`, replacing any previous one
    pub fn attach(&self, observer: SharedSink) {
        let previous = self
            .observer
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(observer);
        if previous.is_some() {
            debug!("Replaced attached event observer");
        } else {
            debug!("Attached event observer");
        }
    }

    /// Stop forwarding and hand back the observer that was attached
    pub fn detach(&self) -> Option<SharedSink> {
        let previous = self
            .observer
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        debug!(was_attached = previous.is_some(), "Detached event observer");
        previous
    }

    pub fn is_attached(&self) -> bool {
        self.observer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Run a client session on a worker thread with `observer` attached
    ///
    /// Blocks until the session returns, then detaches the observer and
    /// returns the session's result. If the session panics, the observer is
    /// still detached before the panic is resumed on the calling thread.
    pub fn run_attached<T, F>(&self, observer: SharedSink, session: F) -> T
    where
        F: FnOnce(&EventRelay) -> T + Send,
        T: Send,
    {
        self.attach(observer);

        let outcome = thread::scope(|scope| scope.spawn(|| session(self)).join());

        self.detach();

        match outcome {
            Ok(result) => result,
            Err(payload) => {
                warn!("Client session panicked");
                panic::resume_unwind(payload)
            }
        }
    }
}

impl fmt::Debug for EventRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRelay")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl EventSink for EventRelay {
    fn add_event(&self, event: SharedEvent) {
        // Clone the handle so delivery happens without holding the lock.
        let observer = self
            .observer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match observer {
            Some(observer) => observer.add_event(event),
            None => debug!(event = event.name(), "No observer attached, dropping event"),
        }
    }
}
