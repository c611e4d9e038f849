// Shared test host: a HostProbe with fixed, editable answers

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hostsnap::core::telemetry::{
    BatteryReading, CoreCounts, DiskUsage, HostIdentity, HostProbe, InterfaceAddress,
    InterfaceEntry, IoCounters, MemoryTotals, Partition, ProcessRankEntry, ProcessRead,
    SensorGroup, SensorReading,
};
use hostsnap::{Result, SnapError};

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Which probe should fail, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Identity,
    Memory,
    Partitions,
    /// Non-permission failure while measuring any mount
    Usage,
    Hostname,
    Processes,
    Battery,
    Thermal,
}

pub struct StubHost {
    pub identity: HostIdentity,
    pub cores: CoreCounts,
    pub cpu_usage: f32,
    pub memory: MemoryTotals,
    /// `None` usage means the mount refuses access
    pub partitions: Vec<(Partition, Option<DiskUsage>)>,
    pub hostname: String,
    pub resolved: Option<IpAddr>,
    pub counters: IoCounters,
    pub interfaces: Vec<InterfaceEntry>,
    pub processes: Vec<ProcessRead>,
    pub battery: Option<BatteryReading>,
    pub boot_time: SystemTime,
    pub now: SystemTime,
    pub thermal: Option<Vec<SensorGroup>>,
    pub faults: Vec<Fault>,
    pub cpu_samples: Vec<Duration>,
}

pub fn partition(device: &str, mountpoint: &str) -> Partition {
    Partition {
        device: device.to_string(),
        mountpoint: PathBuf::from(mountpoint),
        fs_type: "ext4".to_string(),
    }
}

pub fn sampled(pid: u32, cpu: f32, rss: u64) -> ProcessRead {
    ProcessRead::Sampled(ProcessRankEntry {
        pid,
        name: format!("proc{}", pid),
        cpu_percent: cpu,
        rss_bytes: rss,
    })
}

impl Default for StubHost {
    fn default() -> Self {
        Self {
            identity: HostIdentity {
                system: "Linux".to_string(),
                node_name: "testbox".to_string(),
                release: "6.8.0".to_string(),
                version: "#1 SMP PREEMPT_DYNAMIC".to_string(),
                machine: "x86_64".to_string(),
                processor: "x86_64".to_string(),
            },
            cores: CoreCounts {
                physical: Some(4),
                logical: Some(8),
            },
            cpu_usage: 12.5,
            memory: MemoryTotals {
                total: 16 * GIB,
                available: 12 * GIB,
                used: 4 * GIB,
            },
            partitions: vec![
                (
                    partition("/dev/sda1", "/"),
                    Some(DiskUsage::new(100 * GIB, 40 * GIB, 60 * GIB)),
                ),
                (
                    partition("/dev/sda2", "/home"),
                    Some(DiskUsage::new(200 * GIB, 50 * GIB, 150 * GIB)),
                ),
            ],
            hostname: "testbox".to_string(),
            resolved: Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20))),
            counters: IoCounters {
                bytes_sent: 1024,
                bytes_recv: 2048,
            },
            interfaces: vec![
                InterfaceEntry {
                    name: "eth0".to_string(),
                    addresses: vec![
                        InterfaceAddress::inet_from_prefix(Ipv4Addr::new(192, 168, 1, 20), 24),
                        InterfaceAddress::Inet6 {
                            address: Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1),
                            prefix: 64,
                        },
                        InterfaceAddress::Link {
                            address: "aa:bb:cc:dd:ee:ff".to_string(),
                            netmask: None,
                            broadcast: Some("ff:ff:ff:ff:ff:ff".to_string()),
                        },
                    ],
                },
                InterfaceEntry {
                    name: "lo".to_string(),
                    addresses: vec![InterfaceAddress::inet_from_prefix(Ipv4Addr::LOCALHOST, 8)],
                },
            ],
            processes: vec![sampled(1, 3.0, 4096), sampled(2, 40.0, 8192)],
            battery: None,
            boot_time: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
            now: UNIX_EPOCH + Duration::from_secs(1_700_000_000 + 90_061),
            thermal: Some(vec![SensorGroup {
                name: "coretemp".to_string(),
                readings: vec![SensorReading {
                    label: Some("Package id 0".to_string()),
                    current: 45.0,
                    high: Some(80.0),
                    critical: Some(100.0),
                }],
            }]),
            faults: Vec::new(),
            cpu_samples: Vec::new(),
        }
    }
}

impl StubHost {
    pub fn failing(fault: Fault) -> Self {
        Self {
            faults: vec![fault],
            ..Self::default()
        }
    }

    fn check(&self, fault: Fault) -> Result<()> {
        if self.faults.contains(&fault) {
            Err(SnapError::host(format!("injected {:?} fault", fault)))
        } else {
            Ok(())
        }
    }
}

impl HostProbe for StubHost {
    fn identity(&mut self) -> Result<HostIdentity> {
        self.check(Fault::Identity)?;
        Ok(self.identity.clone())
    }

    fn core_counts(&mut self) -> CoreCounts {
        self.cores
    }

    fn sample_cpu_usage(&mut self, interval: Duration) -> Result<f32> {
        self.cpu_samples.push(interval);
        Ok(self.cpu_usage)
    }

    fn virtual_memory(&mut self) -> Result<MemoryTotals> {
        self.check(Fault::Memory)?;
        Ok(self.memory)
    }

    fn partitions(&mut self) -> Result<Vec<Partition>> {
        self.check(Fault::Partitions)?;
        Ok(self.partitions.iter().map(|(p, _)| p.clone()).collect())
    }

    fn partition_usage(&mut self, partition: &Partition) -> Result<DiskUsage> {
        self.check(Fault::Usage)?;
        let usage = self
            .partitions
            .iter()
            .find(|(p, _)| p == partition)
            .map(|(_, usage)| *usage);

        match usage {
            Some(Some(usage)) => Ok(usage),
            Some(None) => Err(SnapError::permission_denied(format!(
                "{}",
                partition.mountpoint.display()
            ))),
            None => Err(SnapError::host("unknown partition")),
        }
    }

    fn hostname(&mut self) -> Result<String> {
        self.check(Fault::Hostname)?;
        Ok(self.hostname.clone())
    }

    fn resolve_host(&mut self, name: &str) -> Result<IpAddr> {
        self.resolved
            .ok_or_else(|| SnapError::resolution(format!("{}: not found", name)))
    }

    fn io_counters(&mut self) -> Result<IoCounters> {
        Ok(self.counters)
    }

    fn interface_addresses(&mut self) -> Result<Vec<InterfaceEntry>> {
        Ok(self.interfaces.clone())
    }

    fn processes(&mut self) -> Result<Vec<ProcessRead>> {
        self.check(Fault::Processes)?;
        Ok(self.processes.clone())
    }

    fn battery(&mut self) -> Result<Option<BatteryReading>> {
        self.check(Fault::Battery)?;
        Ok(self.battery)
    }

    fn boot_time(&mut self) -> Result<SystemTime> {
        Ok(self.boot_time)
    }

    fn now(&mut self) -> SystemTime {
        self.now
    }

    fn thermal(&mut self) -> Result<Option<Vec<SensorGroup>>> {
        self.check(Fault::Thermal)?;
        Ok(self.thermal.clone())
    }
}
