//! Report assembly.
//!
//! Runs the collectors of a [`ReportVariant`] in their fixed order and turns
//! each result into a text block. One collector failing never stops the
//! others: its section carries a failure block instead.

use chrono::{DateTime, Local};
use log::{info, warn};
use serde::Serialize;
use std::time::Instant;

use crate::core::config::{ReportConfig, ReportVariant};
use crate::error::Result;

use super::host::HostProbe;
use super::sink::PresentationSink;
use super::types::*;
use super::{battery, cpu, disk, memory, network, os, process, thermal, uptime};

/// Structured record behind a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    Os(HostIdentity),
    Cpu(CpuSnapshot),
    Memory(MemorySnapshot),
    Disk(Vec<DiskPartitionInfo>),
    Network(NetworkSnapshot),
    Process(ProcessRanking),
    Battery(BatteryStatus),
    Uptime(UptimeInfo),
    Thermal(ThermalSnapshot),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionOutcome {
    Collected(SectionData),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub section: Section,
    pub title: &'static str,
    /// Rendered text, newline-terminated
    pub text: String,
    pub outcome: SectionOutcome,
}

impl SectionBlock {
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, SectionOutcome::Failed(_))
    }
}

/// One complete snapshot, sections in report order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub variant: ReportVariant,
    pub collected_at: DateTime<Local>,
    pub sections: Vec<SectionBlock>,
}

impl Report {
    pub fn block(&self, section: Section) -> Option<&SectionBlock> {
        self.sections.iter().find(|b| b.section == section)
    }

    /// Every block followed by a blank separator line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for block in &self.sections {
            out.push_str(&block.text);
            out.push('\n');
        }
        out
    }
}

/// Run every collector of the configured variant, in order
pub fn assemble(host: &mut dyn HostProbe, config: &ReportConfig) -> Report {
    let started = Instant::now();
    let sections = config
        .variant
        .sections()
        .iter()
        .map(|&section| build_block(host, section, config))
        .collect::<Vec<_>>();

    let failed = sections.iter().filter(|b| b.is_failed()).count();
    info!(
        "Assembled {} sections ({} failed) in {:.2?}",
        sections.len(),
        failed,
        started.elapsed()
    );

    Report {
        variant: config.variant,
        collected_at: Local::now(),
        sections,
    }
}

/// Assemble a fresh report and hand it to `sink`
pub fn run_into<S: PresentationSink + ?Sized>(
    host: &mut dyn HostProbe,
    config: &ReportConfig,
    sink: &mut S,
) -> Result<()> {
    let report = assemble(host, config);
    sink.present(&report)
}

fn build_block(host: &mut dyn HostProbe, section: Section, config: &ReportConfig) -> SectionBlock {
    match collect_section(host, section, config) {
        Ok(data) => SectionBlock {
            section,
            title: section.title(),
            text: render_section(&data),
            outcome: SectionOutcome::Collected(data),
        },
        Err(e) => {
            warn!("{} collector failed: {}", section, e);
            SectionBlock {
                section,
                title: section.title(),
                text: format!("Collector failed: {}\n", e),
                outcome: SectionOutcome::Failed(e.to_string()),
            }
        }
    }
}

pub fn collect_section(
    host: &mut dyn HostProbe,
    section: Section,
    config: &ReportConfig,
) -> Result<SectionData> {
    let data = match section {
        Section::Os => SectionData::Os(os::collect(host)?),
        Section::Cpu => SectionData::Cpu(cpu::collect(host, config.cpu_sample_interval)?),
        Section::Memory => SectionData::Memory(memory::collect(host)?),
        Section::Disk => SectionData::Disk(disk::collect(host)?),
        Section::Network => SectionData::Network(network::collect(host)?),
        Section::Process => SectionData::Process(process::collect(host, config.top_processes)?),
        Section::Battery => SectionData::Battery(battery::collect(host)?),
        Section::Uptime => SectionData::Uptime(uptime::collect(host)?),
        Section::Thermal => SectionData::Thermal(thermal::collect(host)?),
    };
    Ok(data)
}

pub fn render_section(data: &SectionData) -> String {
    match data {
        SectionData::Os(identity) => os::render(identity),
        SectionData::Cpu(snapshot) => cpu::render(snapshot),
        SectionData::Memory(snapshot) => memory::render(snapshot),
        SectionData::Disk(partitions) => disk::render(partitions),
        SectionData::Network(snapshot) => network::render(snapshot),
        SectionData::Process(ranking) => process::render(ranking),
        SectionData::Battery(status) => battery::render(status),
        SectionData::Uptime(uptime) => uptime::render(uptime),
        SectionData::Thermal(snapshot) => thermal::render(snapshot),
    }
}
