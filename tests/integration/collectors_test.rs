// Collector behaviour against the stub host

use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, UNIX_EPOCH};

use hostsnap::core::telemetry::{
    battery, disk, network, process, thermal, uptime, BatteryReading, BatteryStatus,
    IpResolution, PartitionUsage, ProcessRead, ThermalSnapshot, TimeRemaining,
};

use super::fixtures::{partition, sampled, Fault, StubHost, GIB};

#[test]
fn test_denied_partition_is_listed_as_access_denied() {
    let mut host = StubHost::default();
    host.partitions.push((partition("/dev/sdb1", "/secret"), None));

    let infos = disk::collect(&mut host).unwrap();
    assert_eq!(infos.len(), 3);
    assert_eq!(infos[2].usage, PartitionUsage::AccessDenied);
    assert!(matches!(infos[0].usage, PartitionUsage::Measured(_)));

    let text = disk::render(&infos);
    assert_eq!(text.matches("Device: ").count(), 3);
    assert_eq!(text.matches("Access Denied").count(), 1);
    assert!(text.contains("Device: /dev/sdb1\n  Mountpoint: /secret\n"));
}

#[test]
fn test_disk_render_measured_partition() {
    let mut host = StubHost::default();
    host.partitions.truncate(1);

    let text = disk::render(&disk::collect(&mut host).unwrap());
    assert_eq!(
        text,
        "Device: /dev/sda1\n  Mountpoint: /\n  File system type: ext4\n  \
         Total Size: 100.00GB\n  Used: 40.00GB\n  Free: 60.00GB\n  Percentage: 40.0%\n"
    );
}

#[test]
fn test_disk_enumeration_failure_propagates() {
    let mut host = StubHost::failing(Fault::Partitions);
    assert!(disk::collect(&mut host).is_err());
}

#[test]
fn test_non_permission_usage_error_aborts_disk_collector() {
    let mut host = StubHost::failing(Fault::Usage);
    let err = disk::collect(&mut host).unwrap_err();
    assert!(!err.is_permission_denied());
}

#[test]
fn test_unresolvable_hostname_uses_marker() {
    let mut host = StubHost {
        resolved: None,
        ..StubHost::default()
    };

    let snapshot = network::collect(&mut host).unwrap();
    assert_eq!(snapshot.primary_ip, IpResolution::Unresolved);

    let text = network::render(&snapshot);
    assert!(text.contains(&format!("IP Address: {}\n", network::UNRESOLVED_MARKER)));
    assert!(text.contains("Interface: eth0"));
}

#[test]
fn test_network_render_shows_ipv4_and_link_only() {
    let mut host = StubHost::default();
    let snapshot = network::collect(&mut host).unwrap();
    assert_eq!(
        snapshot.primary_ip,
        IpResolution::Resolved(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20)))
    );

    let text = network::render(&snapshot);
    assert!(text.starts_with("Hostname: testbox\nIP Address: 192.168.1.20\n"));
    assert!(text.contains("Total Bytes Sent: 1.00KB\nTotal Bytes Received: 2.00KB\n"));
    // eth0: IPv4 + link, lo: IPv4; the IPv6 address is not shown
    assert_eq!(text.matches("Interface: ").count(), 3);
    assert!(!text.contains("fe80"));
    assert!(text.contains("  Netmask: 255.255.255.0\n  Broadcast IP: 192.168.1.255\n"));
    assert!(text.contains("  MAC Address: aa:bb:cc:dd:ee:ff\n  Netmask: N/A\n"));
    assert!(text.contains("  IP Address: 127.0.0.1\n  Netmask: 255.0.0.0\n  Broadcast IP: N/A\n"));
}

#[test]
fn test_hostname_failure_fails_network_collector() {
    let mut host = StubHost::failing(Fault::Hostname);
    assert!(network::collect(&mut host).is_err());
}

#[test]
fn test_process_ranking_orders_cpu_then_memory() {
    let reads = vec![
        sampled(1, 10.0, 100),
        sampled(2, 10.0, 200),
        sampled(3, 5.0, 50),
        sampled(4, 80.0, 10),
        sampled(5, 0.0, 1000),
    ];

    let ranking = process::rank(reads, 2);
    let pids: Vec<u32> = ranking.entries.iter().map(|e| e.pid).collect();
    assert_eq!(pids, vec![4, 2]);
}

#[test]
fn test_process_ranking_length_is_bounded() {
    let three = vec![sampled(1, 1.0, 1), sampled(2, 2.0, 2), sampled(3, 3.0, 3)];
    assert_eq!(process::rank(three, 5).entries.len(), 3);

    let seven: Vec<ProcessRead> = (0..7).map(|i| sampled(i, i as f32, 0)).collect();
    let ranking = process::rank(seven, 5);
    assert_eq!(ranking.entries.len(), 5);
    assert_eq!(ranking.entries[0].pid, 6);
}

#[test]
fn test_process_ranking_counts_skipped_entries() {
    let reads = vec![
        sampled(1, 1.0, 1),
        ProcessRead::Denied { pid: 2 },
        ProcessRead::Vanished { pid: 3 },
        ProcessRead::Vanished { pid: 4 },
        ProcessRead::Zombie { pid: 5 },
    ];

    let ranking = process::rank(reads, 5);
    assert_eq!(ranking.entries.len(), 1);
    assert_eq!(ranking.skipped.denied, 1);
    assert_eq!(ranking.skipped.vanished, 2);
    assert_eq!(ranking.skipped.zombie, 1);
}

#[test]
fn test_process_collect_uses_configured_top() {
    let mut host = StubHost::default();
    let ranking = process::collect(&mut host, 1).unwrap();
    assert_eq!(ranking.entries.len(), 1);
    assert_eq!(ranking.entries[0].pid, 2);

    let text = process::render(&ranking);
    assert_eq!(
        text,
        "PID: 2, Name: proc2\n  CPU Usage: 40.0%\n  Memory Usage: 8.00KB\n"
    );
}

#[test]
fn test_absent_battery() {
    let mut host = StubHost::default();
    let status = battery::collect(&mut host).unwrap();
    assert_eq!(status, BatteryStatus::Absent);
    assert_eq!(battery::render(&status), "No battery information available.\n");
}

#[test]
fn test_plugged_in_battery_has_no_time_left() {
    let mut host = StubHost {
        battery: Some(BatteryReading {
            percent: 87.0,
            plugged_in: true,
            seconds_remaining: Some(3_600),
        }),
        ..StubHost::default()
    };

    let status = battery::collect(&mut host).unwrap();
    assert_eq!(
        battery::render(&status),
        "Battery Percentage: 87.0%\nPower Plugged In: true\nTime Left: N/A\n"
    );
}

#[test]
fn test_discharging_battery_without_estimate() {
    let mut host = StubHost {
        battery: Some(BatteryReading {
            percent: 40.0,
            plugged_in: false,
            seconds_remaining: None,
        }),
        ..StubHost::default()
    };

    let status = battery::collect(&mut host).unwrap();
    match status {
        BatteryStatus::Present { time_remaining, .. } => {
            assert_eq!(time_remaining, TimeRemaining::Unknown)
        }
        BatteryStatus::Absent => panic!("battery should be present"),
    }
    assert!(battery::render(&status).ends_with("Time Left: Unknown\n"));
}

#[test]
fn test_uptime_from_boot_time() {
    let mut host = StubHost::default();
    let info = uptime::collect(&mut host).unwrap();
    assert_eq!(info.boot_time, 1_700_000_000);
    assert_eq!(info.uptime_secs, 90_061);
    assert_eq!(uptime::render(&info), "System Uptime: 1 day, 1:01:01\n");
}

#[test]
fn test_uptime_clock_skew_reads_zero() {
    let mut host = StubHost::default();
    host.now = UNIX_EPOCH + Duration::from_secs(1_600_000_000);
    assert_eq!(uptime::collect(&mut host).unwrap().uptime_secs, 0);
}

#[test]
fn test_thermal_unsupported_platform() {
    let mut host = StubHost {
        thermal: None,
        ..StubHost::default()
    };
    let snapshot = thermal::collect(&mut host).unwrap();
    assert_eq!(snapshot, ThermalSnapshot::Unsupported);
    assert_eq!(
        thermal::render(&snapshot),
        format!("{}\n", thermal::UNSUPPORTED_MESSAGE)
    );
}

#[test]
fn test_thermal_groups_render() {
    let mut host = StubHost::default();
    let text = thermal::render(&thermal::collect(&mut host).unwrap());
    assert_eq!(
        text,
        "coretemp:\n  Package id 0 - Current: 45.0°C, High: 80.0°C, Critical: 100.0°C\n"
    );
}

#[test]
fn test_memory_usage_scale() {
    let mut host = StubHost::default();
    host.memory.total = 8 * GIB;
    host.memory.available = 2 * GIB;
    let snapshot = hostsnap::core::telemetry::memory::collect(&mut host).unwrap();
    assert!((snapshot.percent - 75.0).abs() < f32::EPSILON);
}
