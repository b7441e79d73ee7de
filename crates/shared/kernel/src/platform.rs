//! Access to platform facts that an Android app would read from `Build.VERSION`.

use droidkit_domain::config::PlatformConfig;
use droidkit_domain::package::ApiLevel;

/// Source of the running platform's SDK level.
pub trait Platform {
    fn api_level(&self) -> ApiLevel;
}

/// A platform pinned to one SDK level, e.g. from configuration or in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPlatform(pub ApiLevel);

impl Platform for FixedPlatform {
    fn api_level(&self) -> ApiLevel {
        self.0
    }
}

impl From<&PlatformConfig> for FixedPlatform {
    fn from(config: &PlatformConfig) -> Self {
        Self(config.api_level)
    }
}

impl<P: Platform + ?Sized> Platform for &P {
    fn api_level(&self) -> ApiLevel {
        (**self).api_level()
    }
}
