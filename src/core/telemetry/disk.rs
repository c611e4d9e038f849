use log::{debug, warn};

use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::{DiskPartitionInfo, PartitionUsage};
use crate::error::Result;
use crate::ui::formatters::{format_bytes, format_percent};

/// Enumerate every mounted partition and measure each one.
///
/// A permission failure is confined to its own partition; any other usage
/// error aborts the collector.
pub fn collect(host: &mut dyn HostProbe) -> Result<Vec<DiskPartitionInfo>> {
    let partitions = host.partitions()?;
    debug!("Enumerated {} partitions", partitions.len());

    let mut infos = Vec::with_capacity(partitions.len());
    for partition in partitions {
        let usage = match host.partition_usage(&partition) {
            Ok(usage) => PartitionUsage::Measured(usage),
            Err(e) if e.is_permission_denied() => {
                warn!(
                    "Access denied reading usage of {}: {}",
                    partition.mountpoint.display(),
                    e
                );
                PartitionUsage::AccessDenied
            }
            Err(e) => return Err(e),
        };

        infos.push(DiskPartitionInfo {
            device: partition.device,
            mountpoint: partition.mountpoint.to_string_lossy().to_string(),
            fs_type: partition.fs_type,
            usage,
        });
    }

    Ok(infos)
}

pub fn render(partitions: &[DiskPartitionInfo]) -> String {
    if partitions.is_empty() {
        return "No mounted partitions found.\n".to_string();
    }

    let mut out = String::new();
    for (i, partition) in partitions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_partition(partition));
    }
    out
}

fn render_partition(partition: &DiskPartitionInfo) -> String {
    let mut out = format!(
        "Device: {}\n  Mountpoint: {}\n  File system type: {}\n",
        partition.device, partition.mountpoint, partition.fs_type
    );

    match &partition.usage {
        PartitionUsage::Measured(usage) => {
            out.push_str(&format!(
                "  Total Size: {}\n  Used: {}\n  Free: {}\n  Percentage: {}\n",
                format_bytes(usage.total_bytes),
                format_bytes(usage.used_bytes),
                format_bytes(usage.free_bytes),
                format_percent(usage.percent),
            ));
        }
        PartitionUsage::AccessDenied => out.push_str("  Access Denied\n"),
    }

    out
}
