// Device identity via sysinfo, DMI, and the machine id

use crate::models::{DeviceIdentity, NOT_AVAILABLE};
use crate::providers::IdentityProvider;
use anyhow::Context;
use std::sync::Mutex;
use sysinfo::System;

pub struct SysinfoIdentity {
    sys: Mutex<System>,
}

impl SysinfoIdentity {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl Default for SysinfoIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SysinfoIdentity {
    fn device_identity(&self) -> anyhow::Result<DeviceIdentity> {
        let friendly_name = System::host_name().context("host name unavailable")?;
        let os_name = System::name().context("os name unavailable")?;
        let os_version = System::os_version().context("os version unavailable")?;
        let device_family_version = pack_family_version(&os_version)?;
        Ok(DeviceIdentity {
            friendly_name,
            manufacturer: read_dmi("sys_vendor").unwrap_or_else(|| NOT_AVAILABLE.into()),
            unique_id: machine_id().context("machine id unavailable")?,
            model: read_dmi("product_name").unwrap_or_else(|| NOT_AVAILABLE.into()),
            hardware_version: read_dmi("product_version").unwrap_or_else(|| NOT_AVAILABLE.into()),
            os_name,
            device_family_version,
        })
    }

    fn max_app_memory(&self) -> u64 {
        self.sys
            .lock()
            .map(|mut sys| {
                sys.refresh_memory();
                sys.total_memory()
            })
            .unwrap_or(0)
    }
}

/// Packs "major.minor[...]" into the 64-bit device-family layout (major in
/// the high 16 bits, minor in the next 16).
fn pack_family_version(os_version: &str) -> anyhow::Result<u64> {
    let mut parts = os_version.split('.');
    let major: u64 = parts
        .next()
        .unwrap_or("")
        .trim()
        .parse()
        .context("os version major")?;
    let minor: u64 = match parts.next() {
        Some(m) => m.trim().parse().context("os version minor")?,
        None => 0,
    };
    Ok(((major & 0xFFFF) << 48) | ((minor & 0xFFFF) << 32))
}

/// Read one attribute from DMI (Linux).
fn read_dmi(attribute: &str) -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        if let Ok(v) = std::fs::read_to_string(format!("/sys/class/dmi/id/{attribute}")) {
            let v = v.trim();
            if !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }
    None
}

/// Stable machine identifier: /etc/machine-id, falling back to the DMI
/// product UUID.
fn machine_id() -> Option<String> {
    read_trimmed("/etc/machine-id").or_else(|| read_dmi("product_uuid"))
}

fn read_trimmed(path: &str) -> Option<String> {
    let v = std::fs::read_to_string(path).ok()?;
    let v = v.trim();
    if v.is_empty() {
        return None;
    }
    Some(v.to_string())
}
