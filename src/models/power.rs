// Aggregate battery report model

use serde::{Deserialize, Serialize};

/// Capacities from the platform's aggregate battery report, in
/// milliwatt-hours. Either value may be absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryReport {
    pub full_charge_mwh: Option<f64>,
    pub remaining_mwh: Option<f64>,
}
