use log::{debug, warn};

use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::{InterfaceAddress, IpResolution, NetworkSnapshot};
use crate::error::Result;
use crate::ui::formatters::format_bytes;

pub const UNRESOLVED_MARKER: &str = "Unable to retrieve";

pub fn collect(host: &mut dyn HostProbe) -> Result<NetworkSnapshot> {
    let hostname = host.hostname()?;

    let primary_ip = match host.resolve_host(&hostname) {
        Ok(ip) => IpResolution::Resolved(ip),
        Err(e) => {
            warn!("Could not resolve host name '{}': {}", hostname, e);
            IpResolution::Unresolved
        }
    };

    let counters = host.io_counters()?;
    let interfaces = host.interface_addresses()?;
    debug!("Found {} network interfaces", interfaces.len());

    Ok(NetworkSnapshot {
        hostname,
        primary_ip,
        bytes_sent: counters.bytes_sent,
        bytes_recv: counters.bytes_recv,
        interfaces,
    })
}

pub fn render(network: &NetworkSnapshot) -> String {
    let mut out = format!("Hostname: {}\n", network.hostname);

    match network.primary_ip {
        IpResolution::Resolved(ip) => out.push_str(&format!("IP Address: {}\n", ip)),
        IpResolution::Unresolved => out.push_str(&format!("IP Address: {}\n", UNRESOLVED_MARKER)),
    }

    out.push_str(&format!(
        "Total Bytes Sent: {}\nTotal Bytes Received: {}\n",
        format_bytes(network.bytes_sent),
        format_bytes(network.bytes_recv),
    ));

    for interface in &network.interfaces {
        for address in &interface.addresses {
            if let Some(lines) = render_address(address) {
                out.push_str(&format!("Interface: {}\n", interface.name));
                out.push_str(&lines);
            }
        }
    }

    out
}

/// Only IPv4 and link-layer addresses are shown; other families yield `None`
fn render_address(address: &InterfaceAddress) -> Option<String> {
    match address {
        InterfaceAddress::Inet {
            address,
            netmask,
            broadcast,
        } => Some(format!(
            "  IP Address: {}\n  Netmask: {}\n  Broadcast IP: {}\n",
            address,
            or_na(netmask.map(|n| n.to_string())),
            or_na(broadcast.map(|b| b.to_string())),
        )),
        InterfaceAddress::Link {
            address,
            netmask,
            broadcast,
        } => Some(format!(
            "  MAC Address: {}\n  Netmask: {}\n  Broadcast MAC: {}\n",
            address,
            or_na(netmask.clone()),
            or_na(broadcast.clone()),
        )),
        InterfaceAddress::Inet6 { .. } => None,
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}
