// Network interface models

use serde::{Deserialize, Serialize};

use super::NOT_AVAILABLE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceFacts {
    pub mac: String,
    pub ipv4: String,
    pub ipv6: String,
}

impl Default for InterfaceFacts {
    fn default() -> Self {
        Self {
            mac: NOT_AVAILABLE.into(),
            ipv4: NOT_AVAILABLE.into(),
            ipv6: NOT_AVAILABLE.into(),
        }
    }
}

/// One address bound to an interface, tagged by family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceAddress {
    /// Link-layer (MAC) address, in whatever separator form the host reports.
    Link(String),
    Ipv4(String),
    /// May carry a zone suffix such as "%eth0".
    Ipv6(String),
}

/// An interface as enumerated by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInterface {
    pub name: String,
    pub addresses: Vec<InterfaceAddress>,
}
