// Snapshot builder: defaults-first aggregation over fallible providers

use crate::detect;
use crate::models::{DeviceSnapshot, NOT_AVAILABLE};
use crate::providers::ProviderSet;

/// High 16 bits of the packed device-family version.
pub const VERSION_MAJOR_MASK: u64 = 0xFFFF_0000_0000_0000;
pub const VERSION_MAJOR_SHIFT: u32 = 48;
/// Next 16 bits of the packed device-family version.
pub const VERSION_MINOR_MASK: u64 = 0x0000_FFFF_0000_0000;
pub const VERSION_MINOR_SHIFT: u32 = 32;

/// Splits the packed 64-bit device-family version into (major, minor).
pub fn parse_device_family_version(packed: u64) -> (u16, u16) {
    let major = ((packed & VERSION_MAJOR_MASK) >> VERSION_MAJOR_SHIFT) as u16;
    let minor = ((packed & VERSION_MINOR_MASK) >> VERSION_MINOR_SHIFT) as u16;
    (major, minor)
}

/// Builds one fully-populated snapshot. Every field is seeded with its
/// fallback first; each provider read is an isolated failure unit whose
/// error leaves that unit's fields untouched. Never fails.
pub fn build_snapshot(providers: &ProviderSet) -> DeviceSnapshot {
    let mut snap = DeviceSnapshot::default();

    // Package identity: version parts, bundle id, display name, install time.
    if let Ok(pkg) = providers.package.package_info() {
        snap.app_version = pkg.version.dotted();
        snap.build_number = pkg.version.build.to_string();
        snap.build_version = pkg.version.build.to_string();
        snap.bundle_id = pkg.bundle_id;
        snap.app_name = pkg.display_name;
        snap.first_install_time = pkg.installed_at_ms;
    }

    // Device identity: one atomic unit, no partial writes.
    let mut os = NOT_AVAILABLE.to_string();
    if let Ok(identity) = providers.identity.device_identity() {
        let (major, minor) = parse_device_family_version(identity.device_family_version);
        snap.system_version = format!("{major}.{minor}");
        snap.device_name = identity.friendly_name;
        snap.system_manufacturer = identity.manufacturer;
        snap.unique_id = identity.unique_id;
        snap.brand = identity.model.clone();
        snap.model = identity.model;
        snap.device_id = identity.hardware_version;
        os = identity.os_name;
    }

    let locale = providers.locale.locale_info();
    snap.device_locale = locale.name;
    snap.device_country = locale.english_name;

    // Derived predicates use whatever the identity unit produced, sentinel
    // strings included.
    snap.is_emulator = detect::is_emulator(&snap.model);
    snap.is_tablet = detect::is_tablet(&os);
    snap.is_24_hour = detect::is_24_hour(&locale.short_time_pattern);

    snap.max_memory = providers.identity.max_app_memory();

    snap
}
