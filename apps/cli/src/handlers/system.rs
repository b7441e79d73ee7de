use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use droidkit::domain::config::{MemoryConfig, NetworkConfig};
use droidkit::kernel::memory::{NoopCollector, clean_memory_with};
use droidkit::kernel::network::{
    ConnectivityService, StaticConnectivity, SysfsConnectivity, check_data_connection,
};
use droidkit::kernel::time::{current_date, format_date};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

/// Prints `millis` (or now) in the platform date format.
///
/// # Errors
/// Returns an error if `millis` is outside chrono's representable range.
pub fn date(millis: Option<i64>) -> Result<()> {
    let stamp = match millis {
        Some(ms) => {
            let instant = DateTime::<Utc>::from_timestamp_millis(ms)
                .with_context(|| format!("Timestamp {ms} is out of range"))?;
            format_date(instant)
        },
        None => current_date(),
    };

    println!("{stamp}");
    Ok(())
}

/// Prints `online`/`offline`, or a JSON report with the active network.
///
/// # Errors
/// Returns an error if the interface directory cannot be read.
pub fn net(cfg: &NetworkConfig, sysfs_root: Option<PathBuf>, as_json: bool) -> Result<()> {
    let service = sysfs_root.map_or_else(|| SysfsConnectivity::from(cfg), SysfsConnectivity::new);

    if as_json {
        // One sysfs read, so the flag and the reported network always agree.
        let network = service.active_network()?;
        let online = check_data_connection(&StaticConnectivity::new(network.clone()))?;
        println!("{}", serde_json::to_string_pretty(&json!({ "online": online, "network": network }))?);
    } else {
        let online = check_data_connection(&service)?;
        println!("{}", if online { "online" } else { "offline" });
    }
    Ok(())
}

pub fn clean(cfg: &MemoryConfig, pause_ms: Option<u64>) {
    let pause = pause_ms.map_or_else(|| cfg.pause(), Duration::from_millis);
    clean_memory_with(&NoopCollector, pause);
    tracing::info!(pause = ?pause, "Memory hint issued");
}
