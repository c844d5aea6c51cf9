//! Core library for the clievent VPN client event model
//!
//! This crate defines the closed set of events a VPN client session emits
//! while it resolves, connects, authenticates and tears down, and the sink
//! contract those events are delivered through.

pub mod error;

pub mod config;
pub mod event;
pub mod sink;

pub use event::{Connected, Event, EventKind, Payload, SharedEvent};
pub use sink::{EventSink, SharedSink};

use tracing_subscriber::filter::LevelFilter;

/// Initialize logging infrastructure
///
/// Logs to the systemd journal when running as a service, otherwise to
/// stderr so stdout stays free for command output.
pub fn init_logging(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(level)
                .try_init()?;
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(level)
        .try_init()?;

    Ok(())
}
