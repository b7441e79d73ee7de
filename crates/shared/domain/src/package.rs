use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform SDK level (`Build.VERSION.SDK_INT` on Android).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    pub const LOLLIPOP: Self = Self(21);
    pub const M: Self = Self(23);
    pub const N: Self = Self(24);
    pub const O: Self = Self(26);
    /// First level exposing the 64-bit `longVersionCode`.
    pub const P: Self = Self(28);
    pub const Q: Self = Self(29);
    pub const R: Self = Self(30);
    pub const S: Self = Self(31);
    pub const TIRAMISU: Self = Self(33);
    pub const UPSIDE_DOWN_CAKE: Self = Self(34);

    pub const LATEST: Self = Self::UPSIDE_DOWN_CAKE;

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether the platform reports 64-bit version codes.
    #[must_use]
    pub const fn has_long_version_code(self) -> bool {
        self.0 >= Self::P.0
    }
}

impl Default for ApiLevel {
    fn default() -> Self {
        Self::LATEST
    }
}

impl From<u32> for ApiLevel {
    fn from(level: u32) -> Self {
        Self(level)
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Read-only package metadata (the subset of `PackageInfo` the helpers inspect).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageInfo {
    pub package_name: String,
    /// Human-readable version, absent for many system packages.
    pub version_name: Option<String>,
    /// Legacy 32-bit version code.
    pub version_code: i32,
    /// 64-bit version code (`versionCodeMajor << 32 | versionCode`).
    pub long_version_code: i64,
}

impl PackageInfo {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self { package_name: package_name.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_version_name(mut self, name: impl Into<String>) -> Self {
        self.version_name = Some(name.into());
        self
    }

    /// Sets both codes from a single legacy value, as the platform does when no major is set.
    #[must_use]
    pub fn with_version_code(mut self, code: i32) -> Self {
        self.version_code = code;
        self.long_version_code = i64::from(code);
        self
    }

    #[must_use]
    pub const fn with_long_version_code(mut self, code: i64) -> Self {
        self.long_version_code = code;
        self
    }
}
