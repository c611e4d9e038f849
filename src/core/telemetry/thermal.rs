use log::debug;

use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::ThermalSnapshot;
use crate::error::Result;
use crate::ui::formatters::format_celsius;

pub const UNSUPPORTED_MESSAGE: &str = "Temperature sensors not supported on this platform.";
pub const NO_SENSORS_MESSAGE: &str = "No temperature sensors available.";

pub fn collect(host: &mut dyn HostProbe) -> Result<ThermalSnapshot> {
    match host.thermal()? {
        None => Ok(ThermalSnapshot::Unsupported),
        Some(groups) => {
            debug!("Read {} sensor groups", groups.len());
            Ok(ThermalSnapshot::Groups(groups))
        }
    }
}

pub fn render(snapshot: &ThermalSnapshot) -> String {
    let groups = match snapshot {
        ThermalSnapshot::Unsupported => return format!("{}\n", UNSUPPORTED_MESSAGE),
        ThermalSnapshot::Groups(groups) if groups.is_empty() => {
            return format!("{}\n", NO_SENSORS_MESSAGE)
        }
        ThermalSnapshot::Groups(groups) => groups,
    };

    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("{}:\n", group.name));
        for reading in &group.readings {
            let label = reading
                .label
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or(group.name.as_str());
            out.push_str(&format!(
                "  {} - Current: {}, High: {}, Critical: {}\n",
                label,
                format_celsius(Some(reading.current)),
                format_celsius(reading.high),
                format_celsius(reading.critical),
            ));
        }
    }
    out
}
