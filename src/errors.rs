// Probe errors

use thiserror::Error;

/// Failures surfaced by the on-demand probes. The snapshot itself never
/// fails; field-level unavailability degrades to a documented default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceInfoError {
    #[error("Could not fetch battery information.")]
    BatteryUnavailable,
    #[error("Network adapter not found.")]
    NoNetworkAdapter,
}
