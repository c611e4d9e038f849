//! Dashboard command handler.
//!
//! Shows every section in a tabbed TUI; `r` re-runs the full pipeline.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::ReportConfig;
use crate::platform::SysinfoHost;
use crate::ui::dashboard::run_dashboard;

/// Execute the dashboard command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = if matches.get_flag("basic") {
        ReportConfig::basic()
    } else {
        ReportConfig::default()
    };

    run_dashboard(Box::new(SysinfoHost::new()), config).context("Failed to run dashboard")
}
