use anyhow::Result;
use deviceinfo::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    let repo = device_repo::DeviceInfoRepo::with_platform_providers();

    let snapshot = repo.get_snapshot();
    let rendered = match app_config.output.format.as_str() {
        "json" => serde_json::to_string(&snapshot)?,
        _ => serde_json::to_string_pretty(&snapshot)?,
    };
    println!("{rendered}");

    if app_config.probes.battery {
        match repo.get_battery_level().await {
            Ok(level) => {
                tracing::info!(operation = "get_battery_level", ratio = level, "Battery level")
            }
            Err(e) => tracing::warn!(error = %e, "Battery probe failed"),
        }
    }
    if app_config.probes.ip_address {
        match repo.get_ip_address().await {
            Ok(Some(ip)) => tracing::info!(operation = "get_ip_address", %ip, "IPv4 address"),
            Ok(None) => tracing::info!(operation = "get_ip_address", "No matching IPv4 host name"),
            Err(e) => tracing::warn!(error = %e, "IP address probe failed"),
        }
    }
    if app_config.probes.security {
        let set = repo.is_pin_or_fingerprint_set().await;
        tracing::info!(operation = "is_pin_or_fingerprint_set", set, "User verification");
    }
    tracing::info!(operation = "get_timezone", timezone = %repo.get_timezone(), "Timezone");

    Ok(())
}
