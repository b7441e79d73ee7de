//! Package version extraction.

use crate::platform::Platform;
use droidkit_domain::package::PackageInfo;
use std::fmt;

/// Version code as exposed by the platform level that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCode {
    /// 32-bit `versionCode` (API level < 28).
    Legacy(i32),
    /// 64-bit `longVersionCode` (API level >= 28).
    Long(i64),
}

impl VersionCode {
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Legacy(code) => i64::from(code),
            Self::Long(code) => code,
        }
    }
}

impl fmt::Display for VersionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(code) => code.fmt(f),
            Self::Long(code) => code.fmt(f),
        }
    }
}

/// Returns the version code field appropriate for the platform's API level.
pub fn get_version_code(info: &PackageInfo, platform: &impl Platform) -> VersionCode {
    if platform.api_level().has_long_version_code() {
        VersionCode::Long(info.long_version_code)
    } else {
        VersionCode::Legacy(info.version_code)
    }
}

/// Returns the version name verbatim when present, otherwise the version code as text.
pub fn get_version(info: &PackageInfo, platform: &impl Platform) -> String {
    info.version_name
        .clone()
        .unwrap_or_else(|| get_version_code(info, platform).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedPlatform;
    use droidkit_domain::package::ApiLevel;

    fn package() -> PackageInfo {
        PackageInfo::new("com.example.viewer").with_version_code(42).with_long_version_code(
            (1_i64 << 32) | 42,
        )
    }

    #[test]
    fn version_name_wins_when_present() {
        let info = package().with_version_name("3.2.1");
        assert_eq!(get_version(&info, &FixedPlatform(ApiLevel::LATEST)), "3.2.1");
    }

    #[test]
    fn empty_version_name_is_still_returned() {
        let info = package().with_version_name("");
        assert_eq!(get_version(&info, &FixedPlatform(ApiLevel::O)), "");
    }

    #[test]
    fn falls_back_to_version_code() {
        let info = package();
        assert_eq!(get_version(&info, &FixedPlatform(ApiLevel::O)), "42");
        assert_eq!(get_version(&info, &FixedPlatform(ApiLevel::P)), "4294967338");
    }

    #[test]
    fn version_code_depends_on_api_level() {
        let info = package();
        assert_eq!(get_version_code(&info, &FixedPlatform(ApiLevel(27))), VersionCode::Legacy(42));
        assert_eq!(
            get_version_code(&info, &FixedPlatform(ApiLevel::P)),
            VersionCode::Long(4_294_967_338)
        );
        assert_eq!(VersionCode::Legacy(-1).as_i64(), -1);
    }
}
