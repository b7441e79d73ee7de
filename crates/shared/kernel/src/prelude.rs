//! Convenience re-exports for the most common helpers.

pub use crate::bundle::{Bundle, BundleError, BundleValue, to_bundle, to_bundle_lossy, try_to_bundle};
pub use crate::digest::{DigestAlgorithm, DigestError, hash_bytes, hash_string};
pub use crate::io::{PersistError, stream_to_file, stream_to_file_async};
pub use crate::memory::{CollectorHint, NoopCollector, clean_memory, clean_memory_with};
pub use crate::network::{
    ConnectivityError, ConnectivityService, StaticConnectivity, SysfsConnectivity,
    check_data_connection,
};
pub use crate::platform::{FixedPlatform, Platform};
pub use crate::text::{to_class_name, to_slug};
pub use crate::time::{current_date, format_date};
pub use crate::version::{VersionCode, get_version, get_version_code};
