// Platform-specific code module

pub mod fs;
pub mod power;
pub mod sensors;
pub mod sysinfo_host;
pub mod uname;

// Re-exports for cleaner imports
pub use fs::mount_usage;
pub use power::read_battery;
pub use sysinfo_host::SysinfoHost;
