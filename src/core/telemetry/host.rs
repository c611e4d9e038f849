//! Host-state capability.
//!
//! Collectors never talk to the operating system directly; they go through
//! [`HostProbe`], which the platform layer implements on top of sysinfo and
//! friends and which tests replace with fixed fixtures.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use crate::error::Result;

use super::types::{DiskUsage, HostIdentity, InterfaceEntry, ProcessRankEntry, SensorGroup};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreCounts {
    pub physical: Option<usize>,
    pub logical: Option<usize>,
}

/// Raw virtual-memory accounting, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryTotals {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

/// A mounted filesystem as enumerated by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub device: String,
    pub mountpoint: PathBuf,
    pub fs_type: String,
}

/// Cumulative interface counters since boot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

/// Outcome of reading one entry of the live process table
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessRead {
    Sampled(ProcessRankEntry),
    /// Attributes could not be read for lack of privilege
    Denied { pid: u32 },
    /// Exited between enumeration and the detail read
    Vanished { pid: u32 },
    Zombie { pid: u32 },
}

/// Raw power-supply state as reported by the driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub percent: f32,
    pub plugged_in: bool,
    /// `None` when the driver has no estimate
    pub seconds_remaining: Option<u64>,
}

/// Read access to live host state.
///
/// Methods take `&mut self` because real implementations keep refreshable
/// handles (sysinfo's `System`, `Disks`, ...) between calls.
pub trait HostProbe {
    fn identity(&mut self) -> Result<HostIdentity>;

    fn core_counts(&mut self) -> CoreCounts;

    /// Blocks for `interval` and returns the overall CPU utilization over it
    fn sample_cpu_usage(&mut self, interval: Duration) -> Result<f32>;

    fn virtual_memory(&mut self) -> Result<MemoryTotals>;

    fn partitions(&mut self) -> Result<Vec<Partition>>;

    /// Usage of a single mount. Lack of privilege must surface as
    /// [`SnapError::PermissionDenied`](crate::SnapError::PermissionDenied).
    fn partition_usage(&mut self, partition: &Partition) -> Result<DiskUsage>;

    fn hostname(&mut self) -> Result<String>;

    fn resolve_host(&mut self, name: &str) -> Result<IpAddr>;

    fn io_counters(&mut self) -> Result<IoCounters>;

    /// Interfaces in display order, each with its bound addresses
    fn interface_addresses(&mut self) -> Result<Vec<InterfaceEntry>>;

    fn processes(&mut self) -> Result<Vec<ProcessRead>>;

    /// `Ok(None)` when the host has no battery
    fn battery(&mut self) -> Result<Option<BatteryReading>>;

    fn boot_time(&mut self) -> Result<SystemTime>;

    fn now(&mut self) -> SystemTime {
        SystemTime::now()
    }

    /// `Ok(None)` when the platform has no thermal-sensor capability at all
    fn thermal(&mut self) -> Result<Option<Vec<SensorGroup>>>;
}
