// Mounted volume models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskFacts {
    pub filesystem: String,
    pub total: String,
    pub used: String,
    pub free: String,
    /// e.g. "42.7%"
    pub usage_percent: String,
}

/// A mounted partition as enumerated by the host, before its usage is queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
    pub filesystem: String,
}

/// Raw byte counts for one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskUsage {
    /// Share of the user-visible space (used + free) that is in use, 0.0 for an empty volume.
    pub fn percent_used(&self) -> f64 {
        let visible = self.used.saturating_add(self.free);
        if visible == 0 {
            return 0.0;
        }
        (self.used as f64 / visible as f64) * 100.0
    }
}
