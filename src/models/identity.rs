// Package and device identity models

use serde::{Deserialize, Serialize};

/// Four-part package version (major.minor.build.revision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl PackageVersion {
    pub fn dotted(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Application package identity; read as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub version: PackageVersion,
    pub bundle_id: String,
    pub display_name: String,
    pub installed_at_ms: i64,
}

/// Device identity facts; read as one atomic unit (no partial values).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdentity {
    pub friendly_name: String,
    pub manufacturer: String,
    pub unique_id: String,
    pub model: String,
    pub hardware_version: String,
    pub os_name: String,
    /// Packed device-family version: major in the high 16 bits, minor in
    /// the next 16. The low 32 bits carry no meaning here.
    pub device_family_version: u64,
}

/// Active locale facts; always available on the host platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub name: String,
    pub english_name: String,
    pub short_time_pattern: String,
}
