use serde::Serialize;
use std::time::Duration;

use crate::core::telemetry::Section;

/// Which collectors a report runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportVariant {
    /// Every section, OS through Thermal
    #[default]
    Full,
    /// The lighter prefix: OS, CPU, Memory, Disk, Network
    Basic,
}

impl ReportVariant {
    pub fn sections(&self) -> &'static [Section] {
        match self {
            ReportVariant::Full => &Section::ALL,
            ReportVariant::Basic => &Section::ALL[..5],
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            ReportVariant::Full => "Advanced System Information",
            ReportVariant::Basic => "System Information",
        }
    }
}

/// Settings for one report run, built by the command layer from CLI arguments
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub variant: ReportVariant,
    /// How many processes the ranking keeps
    pub top_processes: usize,
    /// Window over which CPU utilization is sampled
    pub cpu_sample_interval: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            variant: ReportVariant::Full,
            top_processes: 5,
            cpu_sample_interval: Duration::from_secs(1),
        }
    }
}

impl ReportConfig {
    pub fn basic() -> Self {
        Self {
            variant: ReportVariant::Basic,
            ..Default::default()
        }
    }
}
