use std::time::Duration;

use log::debug;

use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::CpuSnapshot;
use crate::error::Result;
use crate::ui::formatters::format_percent;

/// Read core counts, then block for `interval` to sample utilization
pub fn collect(host: &mut dyn HostProbe, interval: Duration) -> Result<CpuSnapshot> {
    let counts = host.core_counts();
    debug!(
        "CPU cores: physical={:?} logical={:?}",
        counts.physical, counts.logical
    );

    let usage_percent = host.sample_cpu_usage(interval)?;

    Ok(CpuSnapshot {
        physical_cores: counts.physical,
        logical_cores: counts.logical,
        usage_percent,
    })
}

pub fn render(cpu: &CpuSnapshot) -> String {
    format!(
        "Physical cores: {}\nTotal cores: {}\nCPU usage: {}\n",
        count_or_unavailable(cpu.physical_cores),
        count_or_unavailable(cpu.logical_cores),
        format_percent(cpu.usage_percent),
    )
}

fn count_or_unavailable(count: Option<usize>) -> String {
    count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unavailable".to_string())
}
