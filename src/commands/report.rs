//! One-shot report command handler.

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;

use crate::core::config::ReportConfig;
use crate::core::telemetry::assembler;
use crate::platform::SysinfoHost;
use crate::ui::sink::{ConsoleSink, JsonSink};

/// Execute the report command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = config_from_args(matches);
    let json = matches.get_flag("json");
    let color = !matches.get_flag("no-color") && !json;
    debug!("Report config: {:?}", config);

    let mut host = SysinfoHost::new();

    if json {
        let mut sink = JsonSink::stdout();
        assembler::run_into(&mut host, &config, &mut sink).context("Failed to write JSON report")
    } else {
        let mut sink = ConsoleSink::stdout(color);
        assembler::run_into(&mut host, &config, &mut sink).context("Failed to write report")
    }
}

pub fn config_from_args(matches: &ArgMatches) -> ReportConfig {
    if matches.get_flag("basic") {
        ReportConfig::basic()
    } else {
        ReportConfig::default()
    }
}
