// Connection profile and host name table models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// The connection profile associated with default routing. `adapter_id` is
/// absent when the profile exists but its adapter cannot be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProfile {
    pub adapter_id: Option<String>,
}

/// One entry of the system host name table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNameEntry {
    pub family: AddressFamily,
    pub adapter_id: Option<String>,
    pub canonical_name: String,
}
