// Application package identity from build-time metadata

use crate::models::{PackageInfo, PackageVersion};
use crate::providers::PackageProvider;
use anyhow::Context;

/// Package version (from Cargo.toml).
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
const NAME: &str = env!("CARGO_PKG_NAME");

pub struct CargoPackage;

impl PackageProvider for CargoPackage {
    fn package_info(&self) -> anyhow::Result<PackageInfo> {
        Ok(PackageInfo {
            version: parse_version(VERSION)?,
            bundle_id: NAME.to_string(),
            display_name: NAME.to_string(),
            installed_at_ms: install_time_ms()?,
        })
    }
}

/// Parse up to four dotted numeric parts; missing parts are zero.
fn parse_version(s: &str) -> anyhow::Result<PackageVersion> {
    let mut parts = s.split('.');
    let mut next = |label: &str| -> anyhow::Result<u16> {
        match parts.next() {
            Some(p) => p
                .trim()
                .parse()
                .with_context(|| format!("package version {label}")),
            None => Ok(0),
        }
    };
    Ok(PackageVersion {
        major: next("major")?,
        minor: next("minor")?,
        build: next("build")?,
        revision: next("revision")?,
    })
}

/// Install timestamp: modification time of the running executable, in
/// epoch milliseconds.
fn install_time_ms() -> anyhow::Result<i64> {
    let exe = std::env::current_exe().context("current exe")?;
    let modified = std::fs::metadata(&exe)
        .and_then(|m| m.modified())
        .context("exe metadata")?;
    Ok(chrono::DateTime::<chrono::Utc>::from(modified).timestamp_millis())
}
