use anyhow::{Context, Result};
use droidkit::domain::package::{ApiLevel, PackageInfo};
use droidkit::kernel::platform::FixedPlatform;
use droidkit::kernel::version::{get_version, get_version_code};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a `PackageInfo` from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be opened or is not a valid package description.
pub fn load_manifest(path: &Path) -> Result<PackageInfo> {
    let file =
        File::open(path).with_context(|| format!("Failed to open manifest {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Malformed manifest {}", path.display()))
}

pub fn from_flags(
    package: String,
    version_name: Option<String>,
    version_code: Option<i32>,
    long_version_code: Option<i64>,
) -> PackageInfo {
    let mut info = PackageInfo::new(package);
    if let Some(code) = version_code {
        info = info.with_version_code(code);
    }
    if let Some(code) = long_version_code {
        info = info.with_long_version_code(code);
    }
    if let Some(name) = version_name {
        info = info.with_version_name(name);
    }
    info
}

pub fn version(info: &PackageInfo, api_level: ApiLevel, code: bool) {
    let platform = FixedPlatform(api_level);
    if code {
        println!("{}", get_version_code(info, &platform));
    } else {
        println!("{}", get_version(info, &platform));
    }
}
