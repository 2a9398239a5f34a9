// Provider traits: one injected interface per platform data domain, so the
// snapshot builder and probes can be exercised with substitutable fakes.

use crate::models::{
    BatteryReport, ConnectionProfile, DeviceIdentity, HostNameEntry, LocaleInfo, PackageInfo,
    VerifierAvailability,
};

/// Application package identity. The whole read is one failure unit: an
/// error leaves every package-derived snapshot field at its default.
pub trait PackageProvider: Send + Sync {
    fn package_info(&self) -> anyhow::Result<PackageInfo>;
}

/// Device identity facts plus the application memory ceiling.
pub trait IdentityProvider: Send + Sync {
    /// Atomic identity read: on error, no identity field is populated.
    fn device_identity(&self) -> anyhow::Result<DeviceIdentity>;

    /// Maximum application memory, in bytes.
    fn max_app_memory(&self) -> u64;
}

/// Active locale facts and the local timezone. No failure path.
pub trait LocaleProvider: Send + Sync {
    fn locale_info(&self) -> LocaleInfo;

    /// Canonical identifier of the local timezone.
    fn timezone_id(&self) -> String;
}

/// Aggregate battery report.
pub trait BatteryProvider: Send + Sync {
    fn battery_report(&self) -> anyhow::Result<BatteryReport>;
}

/// Connection profile and host name table.
pub trait NetworkProvider: Send + Sync {
    /// The connection profile associated with default routing, if any.
    fn internet_connection_profile(&self) -> Option<ConnectionProfile>;

    /// All host names known to the system. Enumeration order is
    /// platform-defined and unspecified.
    fn host_names(&self) -> Vec<HostNameEntry>;
}

/// User-verification (biometric/PIN) availability.
pub trait SecurityProvider: Send + Sync {
    fn verifier_availability(&self) -> anyhow::Result<VerifierAvailability>;
}

/// The full provider set a `DeviceInfoRepo` reads from.
pub struct ProviderSet {
    pub package: Box<dyn PackageProvider>,
    pub identity: Box<dyn IdentityProvider>,
    pub locale: Box<dyn LocaleProvider>,
    pub battery: Box<dyn BatteryProvider>,
    pub network: Box<dyn NetworkProvider>,
    pub security: Box<dyn SecurityProvider>,
}
