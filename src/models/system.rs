// System identity, CPU, memory and the aggregate host record

use serde::{Deserialize, Serialize};

use super::{DiskFacts, InterfaceFacts};
use std::collections::BTreeMap;

/// Placeholder for values the host did not report.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFacts {
    pub computer_name: String,
    /// OS family and kernel release, e.g. "Linux 6.8.0-45-generic".
    pub os: String,
    pub version: String,
    pub architecture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuFacts {
    pub model: Option<String>,
    pub physical_cores: Option<usize>,
    pub total_cores: usize,
    /// "<MHz> MHz" or "N/A".
    pub max_frequency: String,
}

/// Memory totals, already passed through the size formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryFacts {
    pub total: String,
    pub available: String,
    pub used: String,
}

/// Identity fields as the host reports them, before assembly into [`SystemFacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemIdentity {
    pub node: String,
    /// "Linux", "Windows", ...
    pub family: String,
    /// Kernel release, e.g. "6.8.0-45-generic".
    pub release: String,
    /// Kernel build string or OS version.
    pub version: String,
    pub machine: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuIdentity {
    pub model: Option<String>,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub max_frequency_mhz: Option<f64>,
}

/// Raw memory byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

/// One run's worth of host facts. A section is `None` when collecting it failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryFacts>,
    /// Keyed by device identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disks: Option<BTreeMap<String, DiskFacts>>,
    /// Keyed by interface name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<BTreeMap<String, InterfaceFacts>>,
}

/// On-disk snapshot layout: `{"info": { ... }}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub info: HostFacts,
}
