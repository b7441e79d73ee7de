//! Network connectivity checks behind an injectable service.

use droidkit_domain::config::NetworkConfig;
use droidkit_domain::network::{NetworkInfo, NetworkState};
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[droidkit_derive::droidkit_error]
pub enum ConnectivityError {
    #[error("Connectivity service unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Connectivity check failure{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },
}

/// Read-only view of the platform's connectivity manager.
pub trait ConnectivityService {
    /// The currently active network, if any.
    ///
    /// # Errors
    /// Implementations report a failure to reach the underlying service.
    fn active_network(&self) -> Result<Option<NetworkInfo>, ConnectivityError>;
}

impl<S: ConnectivityService + ?Sized> ConnectivityService for &S {
    fn active_network(&self) -> Result<Option<NetworkInfo>, ConnectivityError> {
        (**self).active_network()
    }
}

/// Returns `true` only if an active network exists and is both available and connected.
///
/// # Errors
/// Propagates the service's error unchanged.
pub fn check_data_connection(service: &impl ConnectivityService) -> Result<bool, ConnectivityError> {
    let online = service
        .active_network()?
        .is_some_and(|network| network.is_available() && network.is_connected());
    Ok(online)
}

/// A connectivity service with a fixed answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticConnectivity {
    network: Option<NetworkInfo>,
}

impl StaticConnectivity {
    #[must_use]
    pub const fn new(network: Option<NetworkInfo>) -> Self {
        Self { network }
    }

    #[must_use]
    pub const fn offline() -> Self {
        Self { network: None }
    }

    pub fn online(interface: impl Into<String>) -> Self {
        Self { network: Some(NetworkInfo::new(interface, NetworkState::ONLINE)) }
    }
}

impl ConnectivityService for StaticConnectivity {
    fn active_network(&self) -> Result<Option<NetworkInfo>, ConnectivityError> {
        Ok(self.network.clone())
    }
}

/// Linux `ARPHRD_LOOPBACK` as reported in `/sys/class/net/<iface>/type`.
const ARPHRD_LOOPBACK: &str = "772";

/// Connectivity read from the Linux sysfs network class directory.
///
/// The active network is the first non-loopback interface (by name) whose `operstate`
/// is `up`; it counts as available when `carrier` reads `1`.
#[derive(Debug, Clone)]
pub struct SysfsConnectivity {
    root: PathBuf,
}

impl SysfsConnectivity {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn interfaces(&self) -> Result<Vec<String>, ConnectivityError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConnectivityError::Unavailable {
                    message: self.root.display().to_string().into(),
                    context: Some("Network class directory does not exist".into()),
                });
            },
            Err(e) => return Err(e).context("Failed to list network interfaces"),
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort_unstable();
        Ok(names)
    }

    fn inspect(&self, name: &str) -> Option<NetworkInfo> {
        let dir = self.root.join(name);
        if name == "lo" || read_attr(&dir, "type").as_deref() == Some(ARPHRD_LOOPBACK) {
            return None;
        }
        if read_attr(&dir, "operstate").as_deref() != Some("up") {
            return None;
        }

        let mut state = NetworkState::CONNECTED;
        if read_attr(&dir, "carrier").as_deref() == Some("1") {
            state |= NetworkState::AVAILABLE;
        }
        Some(NetworkInfo::new(name, state))
    }
}

impl Default for SysfsConnectivity {
    fn default() -> Self {
        Self::from(&NetworkConfig::default())
    }
}

impl From<&NetworkConfig> for SysfsConnectivity {
    fn from(config: &NetworkConfig) -> Self {
        Self::new(&config.sysfs_root)
    }
}

impl ConnectivityService for SysfsConnectivity {
    fn active_network(&self) -> Result<Option<NetworkInfo>, ConnectivityError> {
        let network = self.interfaces()?.iter().find_map(|name| self.inspect(name));
        debug!(root = %self.root.display(), active = ?network.as_ref().map(|n| &n.interface), "Read sysfs connectivity");
        Ok(network)
    }
}

// Unreadable attributes (e.g. `carrier` on a down link returns EINVAL) count as absent.
fn read_attr(dir: &Path, attr: &str) -> Option<String> {
    fs::read_to_string(dir.join(attr)).ok().map(|s| s.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenService;

    impl ConnectivityService for BrokenService {
        fn active_network(&self) -> Result<Option<NetworkInfo>, ConnectivityError> {
            Err(ConnectivityError::Unavailable { message: "binder died".into(), context: None })
        }
    }

    #[test]
    fn online_requires_available_and_connected() {
        assert!(check_data_connection(&StaticConnectivity::online("wlan0")).unwrap());

        let connected_only = NetworkInfo::new("wlan0", NetworkState::CONNECTED);
        assert!(!check_data_connection(&StaticConnectivity::new(Some(connected_only))).unwrap());

        let available_only = NetworkInfo::new("wlan0", NetworkState::AVAILABLE);
        assert!(!check_data_connection(&StaticConnectivity::new(Some(available_only))).unwrap());
    }

    #[test]
    fn no_active_network_is_offline() {
        assert!(!check_data_connection(&StaticConnectivity::offline()).unwrap());
    }

    #[test]
    fn service_errors_propagate() {
        let err = check_data_connection(&BrokenService).unwrap_err();
        assert!(matches!(err, ConnectivityError::Unavailable { .. }));
    }
}
