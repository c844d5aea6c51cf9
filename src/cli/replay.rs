//! Event log replay
//!
//! Feeds a recorded JSON lines log back through the configured sinks, the
//! same way a live client session would report them.

use chrono::{DateTime, Utc};
use clievent_core::config::toml_config::TomlConfig;
use clievent_core::error::ClieventError;
use clievent_core::event::{Event, EventRecord};
use clievent_core::sink::{build_sink, ChannelSink, EventRelay, EventSink, FanoutSink, SharedSink};
use colored::Colorize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Read and validate every record in an event log
///
/// Blank lines are skipped. The first malformed line aborts the read, so
/// nothing is delivered from a log that cannot be replayed in full.
pub fn read_event_log(path: &Path) -> Result<Vec<(DateTime<Utc>, Event)>, ClieventError> {
    let file = File::open(path)?;
    let mut events = Vec::new();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = EventRecord::from_json_line(&line).map_err(|e| {
            error!("Malformed record on line {} of {}", idx + 1, path.display());
            e
        })?;
        let timestamp = record.timestamp;
        let event = record.into_event().map_err(|e| {
            error!("Invalid event on line {} of {}", idx + 1, path.display());
            e
        })?;

        events.push((timestamp, event));
    }

    Ok(events)
}

/// Run the replay command
pub fn run_replay(config: &TomlConfig, path: &Path) -> Result<(), ClieventError> {
    let events = read_event_log(path)?;
    info!("Replaying {} events from {}", events.len(), path.display());

    let (channel, mut receiver) = ChannelSink::new();
    let observer: SharedSink = Arc::new(
        FanoutSink::new()
            .with(build_sink(&config.sink)?)
            .with(channel),
    );

    let timestamps: Vec<DateTime<Utc>> = events.iter().map(|(ts, _)| *ts).collect();

    let relay = EventRelay::new();
    relay.run_attached(observer, move |session| {
        for (_, event) in events {
            session.add_event(event.into_shared());
        }
    });

    // The relay released the observer, so the channel closes once drained
    let mut total: usize = 0;
    let mut errors: usize = 0;
    let mut timestamps = timestamps.into_iter();
    while let Some(event) = receiver.blocking_recv() {
        let time = timestamps
            .next()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();

        total += 1;
        if event.is_error() {
            errors += 1;
            println!("{} {}", time, event.to_string().red());
        } else {
            println!("{} {}", time, event);
        }
    }

    println!("{}, {}", plural(total, "event"), plural(errors, "error"));
    Ok(())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
