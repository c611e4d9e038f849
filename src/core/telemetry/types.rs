use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::ui::formatters::percent_of;

/// One block of the report, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Os,
    Cpu,
    Memory,
    Disk,
    Network,
    Process,
    Battery,
    Uptime,
    Thermal,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Os,
        Section::Cpu,
        Section::Memory,
        Section::Disk,
        Section::Network,
        Section::Process,
        Section::Battery,
        Section::Uptime,
        Section::Thermal,
    ];

    /// Heading used by the console report
    pub fn title(&self) -> &'static str {
        match self {
            Section::Os => "Operating System Information",
            Section::Cpu => "CPU Information",
            Section::Memory => "Memory Information",
            Section::Disk => "Disk Information",
            Section::Network => "Network Information",
            Section::Process => "Top Processes by CPU and Memory Usage",
            Section::Battery => "Battery Information",
            Section::Uptime => "Uptime Information",
            Section::Thermal => "Temperature Sensors",
        }
    }

    /// Short label used by the dashboard tabs
    pub fn tab_label(&self) -> &'static str {
        match self {
            Section::Os => "OS Info",
            Section::Cpu => "CPU Info",
            Section::Memory => "Memory Info",
            Section::Disk => "Disk Info",
            Section::Network => "Network Info",
            Section::Process => "Processes",
            Section::Battery => "Battery Info",
            Section::Uptime => "Uptime Info",
            Section::Thermal => "Temperature",
        }
    }

    /// Position in the full report order
    pub fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_label())
    }
}

/// Static OS / kernel / machine identity
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HostIdentity {
    pub system: String,
    pub node_name: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    pub processor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CpuSnapshot {
    /// `None` when the platform cannot tell physical cores apart
    pub physical_cores: Option<usize>,
    pub logical_cores: Option<usize>,
    pub usage_percent: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub percent: f32,
}

/// Space accounting for one mounted filesystem
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DiskUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub percent: f32,
}

impl DiskUsage {
    /// Percent is used over what an unprivileged user can reach (used + free),
    /// so space reserved for root does not count as free.
    pub fn new(total_bytes: u64, used_bytes: u64, free_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            free_bytes,
            percent: percent_of(used_bytes, used_bytes.saturating_add(free_bytes)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum PartitionUsage {
    Measured(DiskUsage),
    AccessDenied,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskPartitionInfo {
    pub device: String,
    pub mountpoint: String,
    pub fs_type: String,
    pub usage: PartitionUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "address")]
pub enum IpResolution {
    Resolved(IpAddr),
    Unresolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFamily {
    Inet,
    Inet6,
    Link,
}

/// An address bound to an interface, tagged by family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "family")]
pub enum InterfaceAddress {
    Inet {
        address: Ipv4Addr,
        netmask: Option<Ipv4Addr>,
        broadcast: Option<Ipv4Addr>,
    },
    Inet6 {
        address: Ipv6Addr,
        prefix: u8,
    },
    /// Hardware address, rendered in MAC notation
    Link {
        address: String,
        netmask: Option<String>,
        broadcast: Option<String>,
    },
}

impl InterfaceAddress {
    pub fn family(&self) -> AddressFamily {
        match self {
            InterfaceAddress::Inet { .. } => AddressFamily::Inet,
            InterfaceAddress::Inet6 { .. } => AddressFamily::Inet6,
            InterfaceAddress::Link { .. } => AddressFamily::Link,
        }
    }

    /// Builds an IPv4 entry from an address and CIDR prefix length.
    ///
    /// Loopback and point-to-point prefixes (/31, /32) carry no broadcast.
    pub fn inet_from_prefix(address: Ipv4Addr, prefix: u8) -> Self {
        let prefix = prefix.min(32);
        let mask_bits = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
        let netmask = Ipv4Addr::from(mask_bits);
        let broadcast = if address.is_loopback() || prefix >= 31 {
            None
        } else {
            Some(Ipv4Addr::from(u32::from(address) | !mask_bits))
        };

        InterfaceAddress::Inet {
            address,
            netmask: Some(netmask),
            broadcast,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceEntry {
    pub name: String,
    pub addresses: Vec<InterfaceAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSnapshot {
    pub hostname: String,
    pub primary_ip: IpResolution,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub interfaces: Vec<InterfaceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessRankEntry {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub rss_bytes: u64,
}

/// Processes left out of a ranking, by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub denied: usize,
    pub vanished: usize,
    pub zombie: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.denied + self.vanished + self.zombie
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessRanking {
    pub entries: Vec<ProcessRankEntry>,
    pub skipped: SkipCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRemaining {
    Seconds(u64),
    /// The driver could not estimate it; not the same as zero
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum BatteryStatus {
    Absent,
    Present {
        percent: f32,
        plugged_in: bool,
        time_remaining: TimeRemaining,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UptimeInfo {
    /// Boot timestamp, seconds since the Unix epoch
    pub boot_time: u64,
    pub uptime_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub label: Option<String>,
    pub current: f32,
    pub high: Option<f32>,
    pub critical: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorGroup {
    pub name: String,
    pub readings: Vec<SensorReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "groups")]
pub enum ThermalSnapshot {
    Unsupported,
    Groups(Vec<SensorGroup>),
}
