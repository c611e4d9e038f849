//! Live host state on top of sysinfo.

use std::net::{IpAddr, ToSocketAddrs};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::debug;
use sysinfo::{
    Components, CpuRefreshKind, Disks, MacAddr, MemoryRefreshKind, Networks, ProcessRefreshKind,
    ProcessStatus, ProcessesToUpdate, RefreshKind, System,
};

use crate::core::telemetry::{
    AddressFamily, BatteryReading, CoreCounts, DiskUsage, HostIdentity, HostProbe, InterfaceAddress,
    InterfaceEntry, IoCounters, MemoryTotals, Partition, ProcessRankEntry, ProcessRead,
    SensorGroup,
};
use crate::error::{Result, SnapError};

use super::sensors::{group_components, read_hwmon, RawComponent, HWMON_ROOT};
use super::uname::{self, Uname};
use super::{fs, power};

const THERMAL_SUPPORTED: bool = cfg!(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "freebsd",
    windows
));

/// [`HostProbe`] backed by sysinfo, libc (mount usage) and the battery crate.
///
/// Partitions, networks and sensors are enumerated fresh on every call; only
/// the `System` handle is kept so CPU and per-process usage have a previous
/// sample to diff against.
pub struct SysinfoHost {
    system: System,
    disks: Disks,
    last_process_refresh: Instant,
}

impl SysinfoHost {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::everything());
        let mut system = System::new_with_specifics(refresh);

        // Baseline for per-process CPU usage
        system.refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());

        Self {
            system,
            disks: Disks::new(),
            last_process_refresh: Instant::now(),
        }
    }

    fn sysinfo_usage(&self, partition: &Partition) -> Option<DiskUsage> {
        self.disks
            .list()
            .iter()
            .find(|d| d.mount_point() == partition.mountpoint.as_path())
            .map(|d| {
                let total = d.total_space();
                let available = d.available_space();
                DiskUsage::new(total, total.saturating_sub(available), available)
            })
    }
}

impl Default for SysinfoHost {
    fn default() -> Self {
        Self::new()
    }
}

fn process_refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing().with_cpu().with_memory()
}

/// OS family in the conventional spelling ("Linux", "Darwin", "Windows")
fn os_family() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => other.to_string(),
    }
}

/// uname fields win over sysinfo's wherever uname has a value
fn identity_from(uts: Option<Uname>, fallback: HostIdentity) -> HostIdentity {
    let Some(uts) = uts else {
        return fallback;
    };
    let pick = |value: String, fallback: String| if value.is_empty() { fallback } else { value };

    HostIdentity {
        system: pick(uts.sysname, fallback.system),
        node_name: pick(uts.nodename, fallback.node_name),
        release: pick(uts.release, fallback.release),
        version: pick(uts.version, fallback.version),
        machine: pick(uts.machine, fallback.machine),
        processor: fallback.processor,
    }
}

fn link_address(mac: MacAddr) -> InterfaceAddress {
    let unspecified = mac.0.iter().all(|b| *b == 0);
    InterfaceAddress::Link {
        address: mac.to_string(),
        netmask: None,
        broadcast: if unspecified {
            None
        } else {
            Some("ff:ff:ff:ff:ff:ff".to_string())
        },
    }
}

impl HostProbe for SysinfoHost {
    fn identity(&mut self) -> Result<HostIdentity> {
        let unknown = || "Unknown".to_string();
        let processor = self
            .system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(System::cpu_arch);

        let fallback = HostIdentity {
            system: os_family(),
            node_name: System::host_name().unwrap_or_else(unknown),
            release: System::kernel_version().unwrap_or_else(unknown),
            version: System::os_version().unwrap_or_else(unknown),
            machine: System::cpu_arch(),
            processor,
        };

        Ok(identity_from(uname::uname(), fallback))
    }

    fn core_counts(&mut self) -> CoreCounts {
        let logical = self.system.cpus().len();
        CoreCounts {
            physical: System::physical_core_count(),
            logical: (logical > 0).then_some(logical),
        }
    }

    fn sample_cpu_usage(&mut self, interval: Duration) -> Result<f32> {
        self.system.refresh_cpu_usage();
        thread::sleep(interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        self.system.refresh_cpu_usage();
        Ok(self.system.global_cpu_usage())
    }

    fn virtual_memory(&mut self) -> Result<MemoryTotals> {
        self.system.refresh_memory();
        Ok(MemoryTotals {
            total: self.system.total_memory(),
            available: self.system.available_memory(),
            used: self.system.used_memory(),
        })
    }

    fn partitions(&mut self) -> Result<Vec<Partition>> {
        self.disks = Disks::new_with_refreshed_list();
        Ok(self
            .disks
            .list()
            .iter()
            .map(|d| Partition {
                device: d.name().to_string_lossy().to_string(),
                mountpoint: d.mount_point().to_path_buf(),
                fs_type: d.file_system().to_string_lossy().to_string(),
            })
            .collect())
    }

    fn partition_usage(&mut self, partition: &Partition) -> Result<DiskUsage> {
        match fs::mount_usage(&partition.mountpoint) {
            Ok(usage) => Ok(usage),
            Err(e) if e.is_permission_denied() => Err(e),
            Err(e) => {
                debug!(
                    "Direct usage query for {} failed ({}), using sysinfo figures",
                    partition.mountpoint.display(),
                    e
                );
                self.sysinfo_usage(partition).ok_or(e)
            }
        }
    }

    fn hostname(&mut self) -> Result<String> {
        System::host_name().ok_or_else(|| SnapError::host("host name is not available"))
    }

    fn resolve_host(&mut self, name: &str) -> Result<IpAddr> {
        let addrs: Vec<IpAddr> = (name, 0u16)
            .to_socket_addrs()
            .map_err(|e| SnapError::resolution(format!("{}: {}", name, e)))?
            .map(|addr| addr.ip())
            .collect();

        addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| SnapError::resolution(format!("{}: no addresses", name)))
    }

    fn io_counters(&mut self) -> Result<IoCounters> {
        let networks = Networks::new_with_refreshed_list();
        Ok(networks
            .list()
            .values()
            .fold(IoCounters::default(), |acc, data| IoCounters {
                bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
                bytes_recv: acc.bytes_recv.saturating_add(data.total_received()),
            }))
    }

    fn interface_addresses(&mut self) -> Result<Vec<InterfaceEntry>> {
        let networks = Networks::new_with_refreshed_list();
        let mut entries: Vec<InterfaceEntry> = networks
            .list()
            .iter()
            .map(|(name, data)| {
                let mut addresses: Vec<InterfaceAddress> = data
                    .ip_networks()
                    .iter()
                    .map(|net| match net.addr {
                        IpAddr::V4(v4) => InterfaceAddress::inet_from_prefix(v4, net.prefix),
                        IpAddr::V6(v6) => InterfaceAddress::Inet6 {
                            address: v6,
                            prefix: net.prefix,
                        },
                    })
                    .collect();
                addresses.sort_by_key(|a| a.family() != AddressFamily::Inet);
                addresses.push(link_address(data.mac_address()));

                InterfaceEntry {
                    name: name.clone(),
                    addresses,
                }
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn processes(&mut self) -> Result<Vec<ProcessRead>> {
        let since_last = self.last_process_refresh.elapsed();
        if since_last < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
            thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL - since_last);
        }

        let previous: Vec<sysinfo::Pid> = self.system.processes().keys().copied().collect();
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());
        self.last_process_refresh = Instant::now();

        // Seen at the previous refresh, gone before this one could read them
        let mut reads: Vec<ProcessRead> = previous
            .into_iter()
            .filter(|pid| self.system.process(*pid).is_none())
            .map(|pid| ProcessRead::Vanished { pid: pid.as_u32() })
            .collect();

        reads.extend(self.system.processes().iter().map(|(pid, process)| {
            let pid = pid.as_u32();
            match process.status() {
                ProcessStatus::Zombie => ProcessRead::Zombie { pid },
                ProcessStatus::Dead => ProcessRead::Vanished { pid },
                _ => ProcessRead::Sampled(ProcessRankEntry {
                    pid,
                    name: process.name().to_string_lossy().to_string(),
                    cpu_percent: process.cpu_usage(),
                    rss_bytes: process.memory(),
                }),
            }
        }));

        Ok(reads)
    }

    fn battery(&mut self) -> Result<Option<BatteryReading>> {
        power::read_battery()
    }

    fn boot_time(&mut self) -> Result<SystemTime> {
        Ok(UNIX_EPOCH + Duration::from_secs(System::boot_time()))
    }

    fn thermal(&mut self) -> Result<Option<Vec<SensorGroup>>> {
        if !THERMAL_SUPPORTED || !sysinfo::IS_SUPPORTED_SYSTEM {
            return Ok(None);
        }

        if cfg!(target_os = "linux") {
            let raw = read_hwmon(Path::new(HWMON_ROOT));
            if !raw.is_empty() {
                return Ok(Some(group_components(raw)));
            }
            debug!("No hwmon temperature inputs, asking sysinfo");
        }

        // Component::max() is the highest reading seen, not a threshold
        let components = Components::new_with_refreshed_list();
        let raw = components
            .list()
            .iter()
            .map(|c| RawComponent {
                label: c.label().to_string(),
                temperature: c.temperature(),
                high: None,
                critical: c.critical(),
            })
            .collect();

        Ok(Some(group_components(raw)))
    }
}
