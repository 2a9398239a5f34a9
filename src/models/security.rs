// User-verification availability model

use serde::{Deserialize, Serialize};

/// Platform availability of the user-verification (biometric/PIN)
/// mechanism. Only `Available` counts as set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifierAvailability {
    Available,
    DeviceNotPresent,
    NotConfigured,
}
