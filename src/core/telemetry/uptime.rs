use std::time::UNIX_EPOCH;

use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::UptimeInfo;
use crate::error::{Result, SnapError};
use crate::ui::formatters::format_duration;

pub fn collect(host: &mut dyn HostProbe) -> Result<UptimeInfo> {
    let boot = host.boot_time()?;
    let now = host.now();

    let boot_time = boot
        .duration_since(UNIX_EPOCH)
        .map_err(|e| SnapError::host(format!("boot time precedes the epoch: {}", e)))?
        .as_secs();
    // A boot time ahead of the clock (skew) reads as zero uptime
    let uptime_secs = now.duration_since(boot).map(|d| d.as_secs()).unwrap_or(0);

    Ok(UptimeInfo {
        boot_time,
        uptime_secs,
    })
}

pub fn render(uptime: &UptimeInfo) -> String {
    format!("System Uptime: {}\n", format_duration(uptime.uptime_secs))
}
