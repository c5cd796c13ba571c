// Shared test helpers: a scripted host

#![allow(dead_code)]

use hostfacts::models::*;
use hostfacts::sysinfo_repo::HostSource;
use std::cell::Cell;
use std::io;

/// Category names accepted by [`FakeHost::failing`].
pub const SYSTEM: &str = "system";
pub const CPU: &str = "cpu";
pub const MEMORY: &str = "memory";
pub const PARTITIONS: &str = "partitions";
pub const INTERFACES: &str = "interfaces";

pub struct FakeHost {
    pub os_family: String,
    pub node: String,
    pub failing: Vec<&'static str>,
    /// Each partition with the usage it reports, or the error kind its usage query fails with.
    pub partitions: Vec<(Partition, Result<DiskUsage, io::ErrorKind>)>,
    pub interfaces: Vec<RawInterface>,
    /// Number of host queries made so far.
    pub queries: Cell<usize>,
}

impl FakeHost {
    pub fn linux() -> Self {
        Self {
            os_family: "Linux".into(),
            node: "build host".into(),
            failing: vec![],
            partitions: vec![
                (
                    partition("/dev/sda1", "/", "ext4"),
                    Ok(DiskUsage {
                        total: 100 * GIB,
                        used: 25 * GIB,
                        free: 75 * GIB,
                    }),
                ),
                (
                    partition("/dev/sdb1", "/data", "xfs"),
                    Ok(DiskUsage {
                        total: 2 * 1024 * GIB,
                        used: 1024 * GIB,
                        free: 1024 * GIB,
                    }),
                ),
            ],
            interfaces: vec![
                RawInterface {
                    name: "eth0".into(),
                    addresses: vec![
                        InterfaceAddress::Link("52-54-00-12-34-56".into()),
                        InterfaceAddress::Ipv4("192.168.1.20".into()),
                        InterfaceAddress::Ipv6("fe80::5054:ff:fe12:3456%eth0".into()),
                    ],
                },
                RawInterface {
                    name: "Loopback Pseudo-Interface 1".into(),
                    addresses: vec![
                        InterfaceAddress::Ipv4("127.0.0.1".into()),
                        InterfaceAddress::Ipv6("::1".into()),
                    ],
                },
            ],
            queries: Cell::new(0),
        }
    }

    pub fn with_os(mut self, family: &str) -> Self {
        self.os_family = family.into();
        self
    }

    pub fn failing(mut self, category: &'static str) -> Self {
        self.failing.push(category);
        self
    }

    fn query(&self, category: &str) -> anyhow::Result<()> {
        self.queries.set(self.queries.get() + 1);
        if self.failing.contains(&category) {
            anyhow::bail!("{} query failed", category);
        }
        Ok(())
    }
}

pub const GIB: u64 = 1024 * 1024 * 1024;

pub fn partition(device: &str, mount_point: &str, filesystem: &str) -> Partition {
    Partition {
        device: device.into(),
        mount_point: mount_point.into(),
        filesystem: filesystem.into(),
    }
}

impl HostSource for FakeHost {
    fn os_family(&self) -> String {
        self.os_family.clone()
    }

    fn system_identity(&self) -> anyhow::Result<SystemIdentity> {
        self.query(SYSTEM)?;
        Ok(SystemIdentity {
            node: self.node.clone(),
            family: self.os_family.clone(),
            release: "6.8.0-45-generic".into(),
            version: "#45-Ubuntu SMP PREEMPT_DYNAMIC".into(),
            machine: "x86_64".into(),
        })
    }

    fn cpu_identity(&self) -> anyhow::Result<CpuIdentity> {
        self.query(CPU)?;
        Ok(CpuIdentity {
            model: Some("AMD Ryzen 7 5800X 8-Core Processor".into()),
            physical_cores: Some(8),
            logical_cores: 16,
            max_frequency_mhz: Some(4850.0),
        })
    }

    fn memory_usage(&self) -> anyhow::Result<MemoryUsage> {
        self.query(MEMORY)?;
        Ok(MemoryUsage {
            total: 32 * GIB,
            available: 24 * GIB,
            used: 8 * GIB,
        })
    }

    fn partitions(&self) -> anyhow::Result<Vec<Partition>> {
        self.query(PARTITIONS)?;
        Ok(self.partitions.iter().map(|(p, _)| p.clone()).collect())
    }

    fn disk_usage(&self, partition: &Partition) -> io::Result<DiskUsage> {
        self.queries.set(self.queries.get() + 1);
        let (_, usage) = self
            .partitions
            .iter()
            .find(|(p, _)| p == partition)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        (*usage).map_err(io::Error::from)
    }

    fn interfaces(&self) -> anyhow::Result<Vec<RawInterface>> {
        self.query(INTERFACES)?;
        Ok(self.interfaces.clone())
    }
}
