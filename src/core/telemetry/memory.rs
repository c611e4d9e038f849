use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::MemorySnapshot;
use crate::error::Result;
use crate::ui::formatters::{format_bytes, format_percent, percent_of};

pub fn collect(host: &mut dyn HostProbe) -> Result<MemorySnapshot> {
    let totals = host.virtual_memory()?;

    Ok(MemorySnapshot {
        total_bytes: totals.total,
        available_bytes: totals.available,
        used_bytes: totals.used,
        // Anything not available counts as in use, caches included
        percent: percent_of(totals.total.saturating_sub(totals.available), totals.total),
    })
}

pub fn render(memory: &MemorySnapshot) -> String {
    format!(
        "Total: {}\nAvailable: {}\nUsed: {}\nPercentage: {}\n",
        format_bytes(memory.total_bytes),
        format_bytes(memory.available_bytes),
        format_bytes(memory.used_bytes),
        format_percent(memory.percent),
    )
}
