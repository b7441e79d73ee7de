use crate::package::ApiLevel;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level configuration shared across the kernel helpers and the CLI.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DroidkitConfigInner {
    pub platform: PlatformConfig,
    pub memory: MemoryConfig,
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct DroidkitConfig {
    #[serde(flatten, default)]
    inner: Arc<DroidkitConfigInner>,
}

impl Deref for DroidkitConfig {
    type Target = DroidkitConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DroidkitConfig {
    fn deref_mut(&mut self) -> &mut DroidkitConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Platform facts normally read from the device.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub api_level: ApiLevel,
}

/// Memory hint tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// How long `clean_memory` blocks after requesting a collection.
    pub pause_ms: u64,
}

impl MemoryConfig {
    #[must_use]
    pub const fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Connectivity probing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Directory listing network interfaces (`/sys/class/net` on Linux).
    pub sysfs_root: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

/// Logging output knobs consumed by `droidkit-logger`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra filter directives, e.g. `droidkit_kernel=debug`.
    pub filter: Option<String>,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub rotation: LogRotation,
    pub max_files: usize,
}

// --- Default ---

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { pause_ms: 500 }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { sysfs_root: PathBuf::from("/sys/class/net") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "droidkit".to_owned(),
            level: "info".to_owned(),
            filter: None,
            console: true,
            path: None,
            json: false,
            rotation: LogRotation::Daily,
            max_files: 10,
        }
    }
}
