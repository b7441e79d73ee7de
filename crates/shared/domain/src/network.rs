use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Reported state of a network interface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NetworkState: u8 {
        /// The link is usable (carrier present, not administratively blocked).
        const AVAILABLE = 1 << 0;
        /// The link is up and can pass traffic.
        const CONNECTED = 1 << 1;

        const ONLINE = Self::AVAILABLE.bits() | Self::CONNECTED.bits();
    }
}

impl Serialize for NetworkState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for NetworkState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkKind {
    Wifi,
    Ethernet,
    Mobile,
    #[default]
    Other,
}

impl NetworkKind {
    /// Best-effort classification from a Linux interface name.
    #[must_use]
    pub fn from_interface(name: &str) -> Self {
        if name.starts_with("wl") {
            Self::Wifi
        } else if name.starts_with("en") || name.starts_with("eth") {
            Self::Ethernet
        } else if name.starts_with("wwan") || name.starts_with("rmnet") || name.starts_with("ccmni") {
            Self::Mobile
        } else {
            Self::Other
        }
    }
}

/// Snapshot of the active network as reported by a connectivity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub interface: String,
    pub kind: NetworkKind,
    pub state: NetworkState,
}

impl NetworkInfo {
    pub fn new(interface: impl Into<String>, state: NetworkState) -> Self {
        let interface = interface.into();
        Self { kind: NetworkKind::from_interface(&interface), interface, state }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.state.contains(NetworkState::AVAILABLE)
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.state.contains(NetworkState::CONNECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_derived_from_interface_name() {
        assert_eq!(NetworkInfo::new("wlan0", NetworkState::empty()).kind, NetworkKind::Wifi);
        assert_eq!(NetworkInfo::new("enp3s0", NetworkState::empty()).kind, NetworkKind::Ethernet);
        assert_eq!(NetworkInfo::new("rmnet_data0", NetworkState::empty()).kind, NetworkKind::Mobile);
        assert_eq!(NetworkInfo::new("tun0", NetworkState::empty()).kind, NetworkKind::Other);
    }

    #[test]
    fn state_flags_roundtrip_through_serde() {
        let json = serde_json::to_string(&NetworkState::ONLINE).unwrap();
        assert_eq!(json, "3");
        let state: NetworkState = serde_json::from_str(&json).unwrap();
        assert!(state.contains(NetworkState::AVAILABLE | NetworkState::CONNECTED));
    }
}
