// UI and formatting module

pub mod dashboard;
pub mod formatters;
pub mod sink;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_bytes, format_bytes_with_suffix, format_duration, format_percent};
pub use sink::{ConsoleSink, JsonSink};
