// Host fact models

mod network;
mod storage;
mod system;

pub use network::{InterfaceAddress, InterfaceFacts, RawInterface};
pub use storage::{DiskFacts, DiskUsage, Partition};
pub use system::{
    CpuFacts, CpuIdentity, HostFacts, MemoryFacts, MemoryUsage, NOT_AVAILABLE, Snapshot,
    SystemFacts, SystemIdentity,
};
