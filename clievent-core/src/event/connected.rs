//! Connected event payload
//!
//! Session details reported once the tunnel is up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Details of an established VPN session
///
/// All fields are plain text exactly as reported by the session; empty
/// strings are valid (e.g. no IPv6 address assigned).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connected {
    /// Authenticated user name
    pub user: String,
    /// Server hostname as configured
    pub server_host: String,
    /// Server port
    pub server_port: String,
    /// Transport protocol, e.g. `TCPv4`
    pub server_proto: String,
    /// Resolved server address
    pub server_ip: String,
    /// IPv4 address assigned inside the tunnel
    pub vpn_ip4: String,
    /// IPv6 address assigned inside the tunnel
    pub vpn_ip6: String,
    /// Local address the session runs from
    pub client_ip: String,
    /// Tunnel interface name, e.g. `tun0`
    pub tun_name: String,
}

impl Connected {
    /// One-line summary of the session
    ///
    /// Layout: `user@host:port (server_ip) via client_ip/proto on tun/ip4/ip6`,
    /// e.g. `alice@vpn.example.com:443 (203.0.113.5) via 198.51.100.9/TCPv4 on tun0/10.8.0.2/`.
    /// Consumers parse this string, so the layout is fixed.
    pub fn render(&self) -> String {
        format!(
            "{}@{}:{} ({}) via {}/{} on {}/{}/{}",
            self.user,
            self.server_host,
            self.server_port,
            self.server_ip,
            self.client_ip,
            self.server_proto,
            self.tun_name,
            self.vpn_ip4,
            self.vpn_ip6
        )
    }
}

impl fmt::Display for Connected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
