use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

use hostsnap::commands;

fn build_cli() -> Command {
    let basic = Arg::new("basic")
        .long("basic")
        .help("Only OS, CPU, memory, disk and network sections")
        .action(ArgAction::SetTrue);

    Command::new("hostsnap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Point-in-time snapshot of host telemetry")
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .args(report_args(basic.clone()))
        .subcommand(
            Command::new("report")
                .about("Print a snapshot of every section to the terminal")
                .args(report_args(basic.clone())),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Interactive tabbed view with manual refresh")
                .arg(basic),
        )
}

fn report_args(basic: Arg) -> Vec<Arg> {
    vec![
        basic,
        Arg::new("json")
            .long("json")
            .help("Emit the report as JSON")
            .action(ArgAction::SetTrue),
        Arg::new("no-color")
            .long("no-color")
            .help("Disable colored headings")
            .action(ArgAction::SetTrue),
    ]
}

fn log_level(matches: &ArgMatches) -> LevelFilter {
    match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    hostsnap::init_logging(log_level(&matches));

    match matches.subcommand() {
        Some(("report", sub_matches)) => commands::report::execute(sub_matches),
        Some(("dashboard", sub_matches)) => commands::dashboard::execute(sub_matches),
        _ => commands::report::execute(&matches),
    }
}
