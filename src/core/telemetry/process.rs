use std::cmp::Ordering;

use log::debug;

use crate::core::telemetry::host::{HostProbe, ProcessRead};
use crate::core::telemetry::types::{ProcessRankEntry, ProcessRanking, SkipCounts};
use crate::error::Result;
use crate::ui::formatters::{format_bytes, format_percent};

pub fn collect(host: &mut dyn HostProbe, top: usize) -> Result<ProcessRanking> {
    let reads = host.processes()?;
    Ok(rank(reads, top))
}

/// Keep the `top` heaviest sampled processes, CPU first and resident memory
/// as the tie-break, both descending. Unreadable entries are only counted.
pub fn rank(reads: Vec<ProcessRead>, top: usize) -> ProcessRanking {
    let mut skipped = SkipCounts::default();
    let mut entries: Vec<ProcessRankEntry> = Vec::with_capacity(reads.len());

    for read in reads {
        match read {
            ProcessRead::Sampled(entry) => entries.push(entry),
            ProcessRead::Denied { .. } => skipped.denied += 1,
            ProcessRead::Vanished { .. } => skipped.vanished += 1,
            ProcessRead::Zombie { .. } => skipped.zombie += 1,
        }
    }

    if skipped.total() > 0 {
        debug!(
            "Skipped processes: denied={} vanished={} zombie={}",
            skipped.denied, skipped.vanished, skipped.zombie
        );
    }

    entries.sort_by(compare_heaviest_first);
    entries.truncate(top);

    ProcessRanking { entries, skipped }
}

fn compare_heaviest_first(a: &ProcessRankEntry, b: &ProcessRankEntry) -> Ordering {
    b.cpu_percent
        .total_cmp(&a.cpu_percent)
        .then_with(|| b.rss_bytes.cmp(&a.rss_bytes))
}

pub fn render(ranking: &ProcessRanking) -> String {
    if ranking.entries.is_empty() {
        return "No process information available.\n".to_string();
    }

    let mut out = String::new();
    for (i, entry) in ranking.entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "PID: {}, Name: {}\n  CPU Usage: {}\n  Memory Usage: {}\n",
            entry.pid,
            entry.name,
            format_percent(entry.cpu_percent),
            format_bytes(entry.rss_bytes),
        ));
    }
    out
}
