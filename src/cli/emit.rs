//! Single event emission

use clap::Args;
use clievent_core::config::toml_config::TomlConfig;
use clievent_core::error::{ClieventError, EventError};
use clievent_core::event::{Connected, Event, EventKind, PayloadShape};
use clievent_core::sink::{build_sink, EventSink};

/// Arguments for the emit command
///
/// Payload flags must match the kind: `--reason` only for reason kinds,
/// the connection flags only for CONNECTED.
#[derive(Args, Debug, Default)]
pub struct EmitArgs {
    /// Event type, e.g. AUTH_FAILED
    pub kind: String,

    /// Reason text for error events
    #[arg(long)]
    pub reason: Option<String>,

    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub server_host: Option<String>,
    #[arg(long)]
    pub server_port: Option<String>,
    #[arg(long)]
    pub server_proto: Option<String>,
    #[arg(long)]
    pub server_ip: Option<String>,
    #[arg(long)]
    pub vpn_ip4: Option<String>,
    /// Optional, the tunnel may be IPv4 only
    #[arg(long)]
    pub vpn_ip6: Option<String>,
    #[arg(long)]
    pub client_ip: Option<String>,
    #[arg(long)]
    pub tun_name: Option<String>,
}

impl EmitArgs {
    /// Build the event these arguments describe
    pub fn to_event(&self) -> Result<Event, EventError> {
        let kind: EventKind = self.kind.parse()?;
        let mismatch = EventError::PayloadMismatch {
            kind,
            expected: kind.shape(),
        };

        match kind.shape() {
            PayloadShape::Empty => {
                if self.reason.is_some() || self.has_connected_flags() {
                    return Err(mismatch);
                }
                Event::status(kind)
            }
            PayloadShape::Reason => {
                if self.has_connected_flags() {
                    return Err(mismatch);
                }
                match &self.reason {
                    Some(reason) => Event::with_reason(kind, reason.as_str()),
                    None => Err(EventError::MissingPayload { kind }),
                }
            }
            PayloadShape::Connected => {
                if self.reason.is_some() {
                    return Err(mismatch);
                }
                self.connected()
                    .map(Event::connected)
                    .ok_or(EventError::MissingPayload { kind })
            }
        }
    }

    fn has_connected_flags(&self) -> bool {
        [
            &self.user,
            &self.server_host,
            &self.server_port,
            &self.server_proto,
            &self.server_ip,
            &self.vpn_ip4,
            &self.vpn_ip6,
            &self.client_ip,
            &self.tun_name,
        ]
        .iter()
        .any(|flag| flag.is_some())
    }

    fn connected(&self) -> Option<Connected> {
        Some(Connected {
            user: self.user.clone()?,
            server_host: self.server_host.clone()?,
            server_port: self.server_port.clone()?,
            server_proto: self.server_proto.clone()?,
            server_ip: self.server_ip.clone()?,
            vpn_ip4: self.vpn_ip4.clone()?,
            vpn_ip6: self.vpn_ip6.clone().unwrap_or_default(),
            client_ip: self.client_ip.clone()?,
            tun_name: self.tun_name.clone()?,
        })
    }
}

/// Run the emit command
pub fn run_emit(config: &TomlConfig, args: EmitArgs) -> Result<(), ClieventError> {
    let event = args.to_event()?;

    let sink = build_sink(&config.sink)?;
    let line = event.to_string();
    sink.add_event(event.into_shared());

    println!("{}", line);
    Ok(())
}
