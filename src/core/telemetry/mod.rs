//! Telemetry collection and formatting pipeline.
//!
//! Collectors query host state through [`HostProbe`] and render their record
//! as a text block; the [`assembler`] strings them together into a [`Report`]
//! for a [`PresentationSink`].

pub mod assembler;
pub mod battery;
pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;
pub mod os;
pub mod process;
pub mod sink;
pub mod thermal;
pub mod types;
pub mod uptime;

pub use assembler::{assemble, run_into, Report, SectionBlock, SectionData, SectionOutcome};
pub use host::{
    BatteryReading, CoreCounts, HostProbe, IoCounters, MemoryTotals, Partition, ProcessRead,
};
pub use sink::PresentationSink;
pub use types::*;
