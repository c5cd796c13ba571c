// Host-facts reader: one guarded pass per category

use std::collections::BTreeMap;
use std::io;

use anyhow::Context;
use tracing::{error, info, warn};

use crate::config::NetworkConfig;
use crate::models::*;
use crate::size::format_size;
use crate::sysinfo_repo::HostSource;

/// Query every category from `source`. A failing category is logged and left `None`;
/// it never stops the others.
pub fn collect<S: HostSource>(source: &S, network: &NetworkConfig) -> HostFacts {
    let facts = HostFacts {
        system: guarded("system", || collect_system(source)),
        cpu: guarded("CPU", || collect_cpu(source)),
        memory: guarded("memory", || collect_memory(source)),
        disks: guarded("disk", || collect_disks(source)),
        network: guarded("network", || {
            collect_network(source, &network.excluded_interfaces)
        }),
    };
    info!(
        disks = facts.disks.as_ref().map_or(0, BTreeMap::len),
        interfaces = facts.network.as_ref().map_or(0, BTreeMap::len),
        "host facts collected"
    );
    facts
}

fn guarded<T>(category: &str, query: impl FnOnce() -> anyhow::Result<T>) -> Option<T> {
    match query() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to collect {} data: {:#}", category, e);
            None
        }
    }
}

fn collect_system<S: HostSource>(source: &S) -> anyhow::Result<SystemFacts> {
    let id = source.system_identity()?;
    Ok(SystemFacts {
        computer_name: id.node,
        os: format!("{} {}", id.family, id.release).trim_end().to_string(),
        version: id.version,
        architecture: id.machine,
    })
}

fn collect_cpu<S: HostSource>(source: &S) -> anyhow::Result<CpuFacts> {
    let cpu = source.cpu_identity()?;
    Ok(CpuFacts {
        model: cpu.model,
        physical_cores: cpu.physical_cores,
        total_cores: cpu.logical_cores,
        max_frequency: cpu
            .max_frequency_mhz
            .map(|mhz| format!("{:.2} MHz", mhz))
            .unwrap_or_else(|| NOT_AVAILABLE.into()),
    })
}

fn collect_memory<S: HostSource>(source: &S) -> anyhow::Result<MemoryFacts> {
    let mem = source.memory_usage()?;
    Ok(MemoryFacts {
        total: format_size(mem.total),
        available: format_size(mem.available),
        used: format_size(mem.used),
    })
}

fn collect_disks<S: HostSource>(source: &S) -> anyhow::Result<BTreeMap<String, DiskFacts>> {
    let mut disks = BTreeMap::new();
    for partition in source.partitions().context("enumerate partitions")? {
        let usage = match source.disk_usage(&partition) {
            Ok(usage) => usage,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                warn!("No access to {}", partition.mount_point);
                continue;
            }
            Err(e) => {
                error!("Failed to read usage of {}: {}", partition.mount_point, e);
                continue;
            }
        };
        disks.insert(
            partition.device,
            DiskFacts {
                filesystem: partition.filesystem,
                total: format_size(usage.total),
                used: format_size(usage.used),
                free: format_size(usage.free),
                usage_percent: format!("{:.1}%", usage.percent_used()),
            },
        );
    }
    Ok(disks)
}

fn collect_network<S: HostSource>(
    source: &S,
    excluded: &[String],
) -> anyhow::Result<BTreeMap<String, InterfaceFacts>> {
    let interfaces = source.interfaces().context("enumerate interfaces")?;
    Ok(interfaces
        .into_iter()
        .filter(|iface| !excluded.contains(&iface.name))
        .map(|iface| {
            let facts = classify_addresses(&iface.addresses);
            (iface.name, facts)
        })
        .collect())
}

/// Fold an interface's addresses into one MAC, one IPv4 and one IPv6 entry.
/// Later addresses of the same family replace earlier ones; missing families stay "N/A".
pub fn classify_addresses(addresses: &[InterfaceAddress]) -> InterfaceFacts {
    let mut facts = InterfaceFacts::default();
    for address in addresses {
        match address {
            InterfaceAddress::Link(mac) => facts.mac = normalize_mac(mac),
            InterfaceAddress::Ipv4(ip) => facts.ipv4 = ip.clone(),
            InterfaceAddress::Ipv6(ip) => facts.ipv6 = strip_zone(ip).to_string(),
        }
    }
    facts
}

/// "AA-BB-CC-DD-EE-FF" -> "AA:BB:CC:DD:EE:FF"
pub fn normalize_mac(mac: &str) -> String {
    mac.replace('-', ":")
}

/// Drop an IPv6 zone index: "fe80::1%eth0" -> "fe80::1".
pub fn strip_zone(addr: &str) -> &str {
    addr.split_once('%').map_or(addr, |(ip, _)| ip)
}
