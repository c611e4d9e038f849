use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::{BatteryStatus, TimeRemaining};
use crate::error::Result;
use crate::ui::formatters::{format_duration, format_percent};

pub const NO_BATTERY_MESSAGE: &str = "No battery information available.";

pub fn collect(host: &mut dyn HostProbe) -> Result<BatteryStatus> {
    let status = match host.battery()? {
        None => BatteryStatus::Absent,
        Some(reading) => BatteryStatus::Present {
            percent: reading.percent,
            plugged_in: reading.plugged_in,
            time_remaining: match reading.seconds_remaining {
                Some(secs) => TimeRemaining::Seconds(secs),
                None => TimeRemaining::Unknown,
            },
        },
    };
    Ok(status)
}

pub fn render(status: &BatteryStatus) -> String {
    match status {
        BatteryStatus::Absent => format!("{}\n", NO_BATTERY_MESSAGE),
        BatteryStatus::Present {
            percent,
            plugged_in,
            time_remaining,
        } => format!(
            "Battery Percentage: {}\nPower Plugged In: {}\nTime Left: {}\n",
            format_percent(*percent),
            plugged_in,
            time_left(*plugged_in, *time_remaining),
        ),
    }
}

/// Time left only means something on battery power; while plugged in the
/// driver's figure is ignored whatever it says.
pub fn time_left(plugged_in: bool, remaining: TimeRemaining) -> String {
    if plugged_in {
        return "N/A".to_string();
    }
    match remaining {
        TimeRemaining::Seconds(secs) => format_duration(secs),
        TimeRemaining::Unknown => "Unknown".to_string(),
    }
}
