//! Event vocabulary listing

use clievent_core::error::ClieventError;
use clievent_core::event::{EventKind, PayloadShape};
use colored::Colorize;

/// Run the kinds command
pub fn run_kinds() -> Result<(), ClieventError> {
    println!("{:>3}  {:<20} {:<7} PAYLOAD", "#", "NAME", "BAND");

    for kind in EventKind::ALL {
        // Pad before colouring so escape codes don't skew the columns
        let band = if kind.is_error() {
            format!("{:<7}", "error").red()
        } else {
            format!("{:<7}", "status").green()
        };
        let payload = match kind.shape() {
            PayloadShape::Empty => "-".to_string(),
            shape => shape.to_string(),
        };

        println!("{:>3}  {:<20} {} {}", kind.ordinal(), kind.name(), band, payload);
    }

    Ok(())
}
