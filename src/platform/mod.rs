// Host platform providers (Linux)

mod identity;
mod locale;
mod net;
mod package;
mod power;
mod security;

pub use identity::SysinfoIdentity;
pub use locale::EnvLocale;
pub use net::SysinfoNetwork;
pub use package::CargoPackage;
pub use power::PowerSupplyBattery;
pub use security::FprintdSecurity;

use crate::providers::ProviderSet;

/// The full provider set backed by the host platform.
pub fn provider_set() -> ProviderSet {
    ProviderSet {
        package: Box::new(CargoPackage),
        identity: Box::new(SysinfoIdentity::new()),
        locale: Box::new(EnvLocale),
        battery: Box::new(PowerSupplyBattery),
        network: Box::new(SysinfoNetwork),
        security: Box::new(FprintdSecurity),
    }
}
