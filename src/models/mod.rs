// Domain models

mod identity;
mod network;
mod power;
mod security;
mod snapshot;

pub use identity::{DeviceIdentity, LocaleInfo, PackageInfo, PackageVersion};
pub use network::{AddressFamily, ConnectionProfile, HostNameEntry};
pub use power::BatteryReport;
pub use security::VerifierAvailability;
pub use snapshot::{DeviceSnapshot, NOT_AVAILABLE, SYSTEM_NAME};
