const SCALES: [&str; 6] = ["", "K", "M", "G", "T", "P"];
const FACTOR: f64 = 1024.0;

/// Scale a byte count to its human-readable form, e.g. 1253656 => "1.20MB"
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with_suffix(bytes as f64, "B")
}

/// Scale a non-negative quantity through K/M/G/T/P with an arbitrary suffix.
///
/// Anything at or beyond 1024 PB stays on the "P" scale.
pub fn format_bytes_with_suffix(value: f64, suffix: &str) -> String {
    let mut value = value.max(0.0);
    for (i, unit) in SCALES.iter().enumerate() {
        if value < FACTOR || i == SCALES.len() - 1 {
            return format!("{:.2}{}{}", value, unit, suffix);
        }
        value /= FACTOR;
    }
    unreachable!("the last scale always returns")
}

/// Format a duration in whole seconds as "H:MM:SS", prefixed with days when
/// it spans at least one ("1 day, 2:03:04", "3 days, 0:00:10")
pub fn format_duration(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Percentages are shown with a single fractional digit
pub fn format_percent(value: f32) -> String {
    format!("{:.1}%", value)
}

/// Share of `part` in `whole`, 0 when `whole` is empty
pub fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        0.0
    } else {
        ((part as f64 / whole as f64) * 100.0) as f32
    }
}

/// Celsius reading, or "N/A" when the sensor does not report one
pub fn format_celsius(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{:.1}°C", v),
        None => "N/A".to_string(),
    }
}
