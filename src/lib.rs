// hostsnap Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SnapError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::{ReportConfig, ReportVariant};
pub use core::telemetry::{assembler, HostProbe, Report, Section};

// Initialize logging
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
