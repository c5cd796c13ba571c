// Host queries via sysinfo

mod linux;
#[cfg(unix)]
mod unix;

use crate::models::*;
use anyhow::Context;
use std::cell::OnceCell;
use std::io;
use std::net::IpAddr;
use std::path::Path;
use sysinfo::{Disks, MacAddr, Networks, System};
use tracing::instrument;

/// Read-only view of the host. Every query stands alone so one failing does not block the rest.
pub trait HostSource {
    /// OS family in uname spelling ("Linux", "Windows", "Darwin", ...).
    fn os_family(&self) -> String;

    fn system_identity(&self) -> anyhow::Result<SystemIdentity>;

    fn cpu_identity(&self) -> anyhow::Result<CpuIdentity>;

    fn memory_usage(&self) -> anyhow::Result<MemoryUsage>;

    fn partitions(&self) -> anyhow::Result<Vec<Partition>>;

    /// Usage of one mounted partition. `PermissionDenied` means the mount point is not accessible.
    fn disk_usage(&self, partition: &Partition) -> io::Result<DiskUsage>;

    fn interfaces(&self) -> anyhow::Result<Vec<RawInterface>>;
}

/// Map the compile target to the names uname(1) reports.
pub fn os_family() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".into(),
        "windows" => "Windows".into(),
        "macos" => "Darwin".into(),
        "freebsd" => "FreeBSD".into(),
        other => other.into(),
    }
}

/// Production [`HostSource`]. Nothing is queried until the first call.
pub struct SysinfoRepo {
    disks: OnceCell<Disks>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        Self {
            disks: OnceCell::new(),
        }
    }

    fn disks(&self) -> &Disks {
        self.disks.get_or_init(Disks::new_with_refreshed_list)
    }

    /// Usage from the sysinfo disk list. sysinfo has no reserved-block count, so reserved
    /// space is counted as used here.
    #[cfg_attr(unix, allow(dead_code))]
    fn listed_usage(&self, partition: &Partition) -> io::Result<DiskUsage> {
        // Surfaces PermissionDenied for mount points this user cannot reach.
        std::fs::metadata(&partition.mount_point)?;

        let disk = self
            .disks()
            .list()
            .iter()
            .find(|d| d.mount_point() == Path::new(&partition.mount_point))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} is no longer mounted", partition.mount_point),
                )
            })?;
        let total = disk.total_space();
        let free = disk.available_space();
        Ok(DiskUsage {
            total,
            used: total.saturating_sub(free),
            free,
        })
    }
}

impl HostSource for SysinfoRepo {
    fn os_family(&self) -> String {
        os_family()
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "system_identity"))]
    fn system_identity(&self) -> anyhow::Result<SystemIdentity> {
        let node = System::host_name().context("host name unavailable")?;
        let release = System::kernel_version().unwrap_or_default();
        let version = linux::read_kernel_build_linux()
            .or_else(System::os_version)
            .unwrap_or_default();
        Ok(SystemIdentity {
            node,
            family: os_family(),
            release,
            version,
            machine: System::cpu_arch(),
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_identity"))]
    fn cpu_identity(&self) -> anyhow::Result<CpuIdentity> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let logical_cores = sys.cpus().len();
        anyhow::ensure!(logical_cores > 0, "no CPUs reported");

        let model = linux::read_cpu_model_linux().or_else(|| {
            sys.cpus()
                .first()
                .map(|c| c.brand().trim().to_string())
                .filter(|s| !s.is_empty())
        });
        let max_frequency_mhz = linux::read_cpu_max_freq_mhz_linux().or_else(|| {
            sys.cpus()
                .iter()
                .map(|c| c.frequency())
                .max()
                .filter(|&mhz| mhz > 0)
                .map(|mhz| mhz as f64)
        });

        Ok(CpuIdentity {
            model,
            physical_cores: System::physical_core_count(),
            logical_cores,
            max_frequency_mhz,
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "memory_usage"))]
    fn memory_usage(&self) -> anyhow::Result<MemoryUsage> {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        anyhow::ensure!(total > 0, "memory totals unavailable");
        Ok(MemoryUsage {
            total,
            available: sys.available_memory(),
            used: sys.used_memory(),
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "partitions"))]
    fn partitions(&self) -> anyhow::Result<Vec<Partition>> {
        Ok(self
            .disks()
            .list()
            .iter()
            .map(|d| Partition {
                device: d.name().to_string_lossy().into_owned(),
                mount_point: d.mount_point().to_string_lossy().into_owned(),
                filesystem: d.file_system().to_string_lossy().into_owned(),
            })
            .collect())
    }

    fn disk_usage(&self, partition: &Partition) -> io::Result<DiskUsage> {
        #[cfg(unix)]
        {
            unix::statvfs_usage(Path::new(&partition.mount_point))
        }
        #[cfg(not(unix))]
        {
            self.listed_usage(partition)
        }
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "interfaces"))]
    fn interfaces(&self) -> anyhow::Result<Vec<RawInterface>> {
        let networks = Networks::new_with_refreshed_list();
        let mut interfaces: Vec<RawInterface> = networks
            .list()
            .iter()
            .map(|(name, data)| {
                raw_interface(
                    name,
                    data.mac_address(),
                    data.ip_networks().iter().map(|n| n.addr),
                )
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interfaces)
    }
}

/// Tag an interface's addresses by family. An all-zero MAC means the host has no
/// link-layer address for it, so no `Link` entry is produced.
fn raw_interface(
    name: &str,
    mac: MacAddr,
    ips: impl IntoIterator<Item = IpAddr>,
) -> RawInterface {
    let mut addresses = Vec::new();
    if !mac.is_unspecified() {
        addresses.push(InterfaceAddress::Link(mac.to_string()));
    }
    addresses.extend(ips.into_iter().map(|ip| match ip {
        IpAddr::V4(v4) => InterfaceAddress::Ipv4(v4.to_string()),
        IpAddr::V6(v6) => InterfaceAddress::Ipv6(v6.to_string()),
    }));
    RawInterface {
        name: name.to_string(),
        addresses,
    }
}
