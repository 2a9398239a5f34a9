// User-verification availability via fprintd presence

use crate::models::VerifierAvailability;
use crate::providers::SecurityProvider;
use std::path::Path;

/// Install locations of the fprintd verify helper.
const FPRINTD_PATHS: &[&str] = &[
    "/usr/bin/fprintd-verify",
    "/usr/libexec/fprintd",
    "/usr/lib/fprintd/fprintd",
];

pub struct FprintdSecurity;

impl SecurityProvider for FprintdSecurity {
    fn verifier_availability(&self) -> anyhow::Result<VerifierAvailability> {
        if FPRINTD_PATHS.iter().any(|p| Path::new(p).exists()) {
            Ok(VerifierAvailability::Available)
        } else {
            Ok(VerifierAvailability::DeviceNotPresent)
        }
    }
}
