// Device facts repo: synchronous snapshot plus on-demand async probes.
// Probes are independent of the snapshot and of each other; nothing is
// cached between calls.

use crate::errors::DeviceInfoError;
use crate::models::{AddressFamily, DeviceSnapshot, VerifierAvailability};
use crate::providers::ProviderSet;
use crate::snapshot;
use std::sync::Arc;
use tracing::instrument;

pub struct DeviceInfoRepo {
    providers: Arc<ProviderSet>,
}

impl DeviceInfoRepo {
    pub fn new(providers: ProviderSet) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }

    /// Repo wired to the host platform providers.
    pub fn with_platform_providers() -> Self {
        Self::new(crate::platform::provider_set())
    }

    /// Builds a fresh snapshot; never fails.
    #[instrument(skip(self), fields(repo = "deviceinfo", operation = "get_snapshot"))]
    pub fn get_snapshot(&self) -> DeviceSnapshot {
        snapshot::build_snapshot(&self.providers)
    }

    /// Remaining/full charge ratio from the aggregate battery report.
    /// Fails with `BatteryUnavailable` when either capacity is absent or
    /// the full-charge capacity is zero.
    #[instrument(skip(self), fields(repo = "deviceinfo", operation = "get_battery_level"))]
    pub async fn get_battery_level(&self) -> Result<f64, DeviceInfoError> {
        let providers = self.providers.clone();
        tokio::task::spawn_blocking(move || {
            let report = providers
                .battery
                .battery_report()
                .map_err(|_| DeviceInfoError::BatteryUnavailable)?;
            match (report.full_charge_mwh, report.remaining_mwh) {
                (Some(full), Some(remaining)) if full > 0.0 => Ok(remaining / full),
                _ => Err(DeviceInfoError::BatteryUnavailable),
            }
        })
        .await
        .map_err(|_| DeviceInfoError::BatteryUnavailable)?
    }

    /// IPv4 address of the active connection's adapter: the first host name
    /// whose family is IPv4 and whose adapter matches the profile's.
    /// Enumeration order is platform-defined and unspecified. Resolves to
    /// `None` when the adapter exists but no record matches.
    #[instrument(skip(self), fields(repo = "deviceinfo", operation = "get_ip_address"))]
    pub async fn get_ip_address(&self) -> Result<Option<String>, DeviceInfoError> {
        let providers = self.providers.clone();
        tokio::task::spawn_blocking(move || {
            let adapter_id = providers
                .network
                .internet_connection_profile()
                .and_then(|profile| profile.adapter_id)
                .ok_or(DeviceInfoError::NoNetworkAdapter)?;
            let hit = providers.network.host_names().into_iter().find(|hn| {
                hn.family == AddressFamily::Ipv4
                    && hn.adapter_id.as_deref() == Some(adapter_id.as_str())
            });
            Ok(hit.map(|hn| hn.canonical_name))
        })
        .await
        .map_err(|_| DeviceInfoError::NoNetworkAdapter)?
    }

    /// True only when the platform reports the user-verification mechanism
    /// as available. Errors collapse to `false`; this probe never fails.
    #[instrument(skip(self), fields(repo = "deviceinfo", operation = "is_pin_or_fingerprint_set"))]
    pub async fn is_pin_or_fingerprint_set(&self) -> bool {
        let providers = self.providers.clone();
        tokio::task::spawn_blocking(move || {
            matches!(
                providers.security.verifier_availability(),
                Ok(VerifierAvailability::Available)
            )
        })
        .await
        .unwrap_or(false)
    }

    /// Canonical identifier of the local timezone.
    #[instrument(skip(self), fields(repo = "deviceinfo", operation = "get_timezone"))]
    pub fn get_timezone(&self) -> String {
        self.providers.locale.timezone_id()
    }
}
