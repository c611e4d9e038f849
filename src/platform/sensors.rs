//! Thermal sensor grouping.
//!
//! Components are reported with a single label such as
//! `"coretemp Package id 0"` or `"acpitz temp1"`. The first word names the
//! chip or driver; readings are grouped by it.
//!
//! On Linux the readings come straight from `/sys/class/hwmon`, where each
//! `tempN_input` sits next to its `tempN_max` and `tempN_crit` thresholds.
//! sysinfo's `Component::max()` is the highest temperature seen so far, not a
//! threshold, so it is never used as "high".

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::telemetry::{SensorGroup, SensorReading};

pub const HWMON_ROOT: &str = "/sys/class/hwmon";

/// A component as the host reports it, thresholds in °C
#[derive(Debug, Clone, PartialEq)]
pub struct RawComponent {
    pub label: String,
    pub temperature: Option<f32>,
    pub high: Option<f32>,
    pub critical: Option<f32>,
}

/// Group readings by chip, keeping first-seen order. Components without a
/// current temperature are dropped.
pub fn group_components(components: Vec<RawComponent>) -> Vec<SensorGroup> {
    let mut groups: Vec<SensorGroup> = Vec::new();

    for component in components {
        let Some(current) = component.temperature else {
            continue;
        };

        let (group_name, label) = split_label(&component.label);
        let reading = SensorReading {
            label,
            current,
            high: component.high,
            critical: component.critical,
        };

        match groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.readings.push(reading),
            None => groups.push(SensorGroup {
                name: group_name,
                readings: vec![reading],
            }),
        }
    }

    groups
}

fn split_label(raw: &str) -> (String, Option<String>) {
    let trimmed = raw.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((chip, rest)) if !rest.trim().is_empty() => {
            (chip.to_string(), Some(rest.trim().to_string()))
        }
        _ => (trimmed.to_string(), None),
    }
}

/// Read every `tempN_input` under a hwmon class directory.
///
/// Chips are visited in directory-name order and inputs in index order. A
/// missing root, chip or threshold file just yields fewer values.
pub fn read_hwmon(root: &Path) -> Vec<RawComponent> {
    let mut chips: Vec<_> = match fs::read_dir(root) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(e) => {
            debug!("Cannot list {}: {}", root.display(), e);
            return Vec::new();
        }
    };
    chips.sort();

    let mut components = Vec::new();
    for chip in chips {
        let Some(name) = read_trimmed(&chip.join("name")) else {
            continue;
        };

        let mut indices: Vec<u32> = fs::read_dir(&chip)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter_map(|e| temp_input_index(&e.file_name().to_string_lossy()))
                    .collect()
            })
            .unwrap_or_default();
        indices.sort_unstable();

        for index in indices {
            let file = |suffix: &str| chip.join(format!("temp{}_{}", index, suffix));
            let label = match read_trimmed(&file("label")) {
                Some(label) => format!("{} {}", name, label),
                None => name.clone(),
            };

            components.push(RawComponent {
                label,
                temperature: read_millidegrees(&file("input")),
                high: read_millidegrees(&file("max")),
                critical: read_millidegrees(&file("crit")),
            });
        }
    }

    components
}

/// `"temp3_input"` => `Some(3)`
fn temp_input_index(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix("temp")?
        .strip_suffix("_input")?
        .parse()
        .ok()
}

fn read_trimmed(path: &Path) -> Option<String> {
    let value = fs::read_to_string(path).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn read_millidegrees(path: &Path) -> Option<f32> {
    let raw: i64 = read_trimmed(path)?.parse().ok()?;
    Some(raw as f32 / 1000.0)
}
