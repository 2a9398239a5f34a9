// Shared test fakes: substitutable providers with failure injection

use deviceinfo::models::*;
use deviceinfo::providers::*;

pub struct FakePackage;

impl PackageProvider for FakePackage {
    fn package_info(&self) -> anyhow::Result<PackageInfo> {
        Ok(PackageInfo {
            version: PackageVersion {
                major: 1,
                minor: 4,
                build: 7,
                revision: 2,
            },
            bundle_id: "com.example.devicefacts".into(),
            display_name: "Device Facts".into(),
            installed_at_ms: 1_700_000_000_000,
        })
    }
}

pub struct FailingPackage;

impl PackageProvider for FailingPackage {
    fn package_info(&self) -> anyhow::Result<PackageInfo> {
        anyhow::bail!("package metadata unreadable")
    }
}

pub fn fake_identity() -> DeviceIdentity {
    DeviceIdentity {
        friendly_name: "DESKTOP-TEST".into(),
        manufacturer: "Contoso".into(),
        unique_id: "8b9f4326-93e4-4cfb-bd5d-dca4e7a8f2f1".into(),
        model: "Surface Pro".into(),
        hardware_version: "1.2".into(),
        os_name: "Windows 10".into(),
        device_family_version: (10u64 << 48) | (3u64 << 32),
    }
}

pub struct FakeIdentity(pub DeviceIdentity);

impl IdentityProvider for FakeIdentity {
    fn device_identity(&self) -> anyhow::Result<DeviceIdentity> {
        Ok(self.0.clone())
    }

    fn max_app_memory(&self) -> u64 {
        8_589_934_592
    }
}

pub struct FailingIdentity;

impl IdentityProvider for FailingIdentity {
    fn device_identity(&self) -> anyhow::Result<DeviceIdentity> {
        anyhow::bail!("identity lookup exploded")
    }

    fn max_app_memory(&self) -> u64 {
        0
    }
}

pub struct FakeLocale {
    pub info: LocaleInfo,
    pub timezone: String,
}

impl Default for FakeLocale {
    fn default() -> Self {
        Self {
            info: LocaleInfo {
                name: "en-US".into(),
                english_name: "English (United States)".into(),
                short_time_pattern: "HH:mm".into(),
            },
            timezone: "Europe/Berlin".into(),
        }
    }
}

impl LocaleProvider for FakeLocale {
    fn locale_info(&self) -> LocaleInfo {
        self.info.clone()
    }

    fn timezone_id(&self) -> String {
        self.timezone.clone()
    }
}

pub struct FakeBattery(pub BatteryReport);

impl BatteryProvider for FakeBattery {
    fn battery_report(&self) -> anyhow::Result<BatteryReport> {
        Ok(self.0)
    }
}

pub struct FailingBattery;

impl BatteryProvider for FailingBattery {
    fn battery_report(&self) -> anyhow::Result<BatteryReport> {
        anyhow::bail!("battery report unreadable")
    }
}

pub struct FakeNetwork {
    pub profile: Option<ConnectionProfile>,
    pub host_names: Vec<HostNameEntry>,
}

impl Default for FakeNetwork {
    fn default() -> Self {
        Self {
            profile: Some(ConnectionProfile {
                adapter_id: Some("eth0".into()),
            }),
            host_names: vec![
                HostNameEntry {
                    family: AddressFamily::Ipv6,
                    adapter_id: Some("eth0".into()),
                    canonical_name: "fe80::1".into(),
                },
                HostNameEntry {
                    family: AddressFamily::Ipv4,
                    adapter_id: Some("wlan0".into()),
                    canonical_name: "10.0.0.5".into(),
                },
                HostNameEntry {
                    family: AddressFamily::Ipv4,
                    adapter_id: Some("eth0".into()),
                    canonical_name: "192.168.1.23".into(),
                },
            ],
        }
    }
}

impl NetworkProvider for FakeNetwork {
    fn internet_connection_profile(&self) -> Option<ConnectionProfile> {
        self.profile.clone()
    }

    fn host_names(&self) -> Vec<HostNameEntry> {
        self.host_names.clone()
    }
}

pub struct FakeSecurity(pub VerifierAvailability);

impl SecurityProvider for FakeSecurity {
    fn verifier_availability(&self) -> anyhow::Result<VerifierAvailability> {
        Ok(self.0)
    }
}

pub struct FailingSecurity;

impl SecurityProvider for FailingSecurity {
    fn verifier_availability(&self) -> anyhow::Result<VerifierAvailability> {
        anyhow::bail!("verifier check exploded")
    }
}

/// A provider set where every source succeeds.
pub fn fake_provider_set() -> ProviderSet {
    ProviderSet {
        package: Box::new(FakePackage),
        identity: Box::new(FakeIdentity(fake_identity())),
        locale: Box::new(FakeLocale::default()),
        battery: Box::new(FakeBattery(BatteryReport {
            full_charge_mwh: Some(2000.0),
            remaining_mwh: Some(1000.0),
        })),
        network: Box::new(FakeNetwork::default()),
        security: Box::new(FakeSecurity(VerifierAvailability::Available)),
    }
}
