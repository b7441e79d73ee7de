use config::{Config, Environment, File};
use droidkit_domain::config::DroidkitConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "droidkit";

/// Prefix of environment overrides (`DROIDKIT__MEMORY__PAUSE_MS=0`).
pub const ENV_PREFIX: &str = "DROIDKIT";

#[droidkit_derive::droidkit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file source and environment overrides.
///
/// 1. **File**: `path` if given (must exist), otherwise an optional `droidkit.{toml,yaml,json}`
///    in the working directory.
/// 2. **Environment**: variables prefixed with `DROIDKIT__`; nested keys use double
///    underscores (`DROIDKIT__PLATFORM__API_LEVEL` maps to `platform.api_level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use droidkit_kernel::config::load_config;
/// use droidkit_domain::config::DroidkitConfig;
///
/// let cfg: DroidkitConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.logging.console);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path, environment())
}

/// Loads the workspace's [`DroidkitConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_droidkit_config(path: Option<impl AsRef<Path>>) -> Result<DroidkitConfig, ConfigError> {
    load_config(path)
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with_env<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env);

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn overrides(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn environment_overrides_file_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("droidkit.toml");
        fs::write(&path, "[memory]\npause_ms = 250\n").unwrap();

        let cfg: DroidkitConfig = load_with_env(
            Some(&path),
            overrides(&[("DROIDKIT__MEMORY__PAUSE_MS", "5"), ("DROIDKIT__PLATFORM__API_LEVEL", "26")]),
        )
        .unwrap();

        assert_eq!(cfg.memory.pause_ms, 5);
        assert_eq!(cfg.platform.api_level.get(), 26);
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let cfg: DroidkitConfig =
            load_with_env(None::<&str>, overrides(&[("MEMORY__PAUSE_MS", "1")])).unwrap();
        assert_eq!(cfg.memory.pause_ms, 500);
    }
}
