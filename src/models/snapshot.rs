// Device snapshot model

use serde::{Deserialize, Serialize};

/// Sentinel substituted for any fact the platform cannot supply.
pub const NOT_AVAILABLE: &str = "not available";

/// Fixed platform label reported as `systemName`.
pub const SYSTEM_NAME: &str = "Linux";

/// One fully-populated mapping of device facts, produced fresh per call.
/// Every key is always present; a source that fails is reduced to its
/// documented fallback instead of surfacing an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub app_version: String,
    pub build_version: String,
    pub build_number: String,
    pub instance_id: String,
    pub device_name: String,
    pub system_name: String,
    pub system_version: String,
    pub api_level: String,
    pub model: String,
    pub brand: String,
    pub device_id: String,
    pub device_locale: String,
    pub device_country: String,
    pub unique_id: String,
    pub system_manufacturer: String,
    pub bundle_id: String,
    pub app_name: String,
    pub user_agent: String,
    pub is_emulator: bool,
    pub is_tablet: bool,
    pub carrier: String,
    pub is_24_hour: bool,
    pub max_memory: u64,
    pub first_install_time: i64,
}

impl Default for DeviceSnapshot {
    // Fallback values; derived booleans match the predicates applied to the
    // sentinel strings.
    fn default() -> Self {
        Self {
            app_version: NOT_AVAILABLE.into(),
            build_version: NOT_AVAILABLE.into(),
            build_number: "0".into(),
            instance_id: NOT_AVAILABLE.into(),
            device_name: NOT_AVAILABLE.into(),
            system_name: SYSTEM_NAME.into(),
            system_version: NOT_AVAILABLE.into(),
            api_level: NOT_AVAILABLE.into(),
            model: NOT_AVAILABLE.into(),
            brand: NOT_AVAILABLE.into(),
            device_id: NOT_AVAILABLE.into(),
            device_locale: NOT_AVAILABLE.into(),
            device_country: NOT_AVAILABLE.into(),
            unique_id: NOT_AVAILABLE.into(),
            system_manufacturer: NOT_AVAILABLE.into(),
            bundle_id: NOT_AVAILABLE.into(),
            app_name: NOT_AVAILABLE.into(),
            user_agent: NOT_AVAILABLE.into(),
            is_emulator: false,
            is_tablet: true,
            carrier: NOT_AVAILABLE.into(),
            is_24_hour: false,
            max_memory: 0,
            first_install_time: 0,
        }
    }
}
