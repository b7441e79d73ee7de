//! Facade crate for `DroidKit`.
//! Re-exports the domain models and kernel helpers so applications depend on one crate.
//! Keep this crate thin: it composes other crates and holds no logic of its own.
//!
//! ## Usage
//! - Add `droidkit`; enable the `logger` feature to get `droidkit::logger`.
//! - Reach for [`prelude`] for the everyday helpers.
//! - `#[derive(IntoBundle)]` expands to `::droidkit_kernel` paths; through this facade,
//!   add `#[bundle(crate = "droidkit::kernel")]` to the struct.
//!
//! ```rust
//! use droidkit::prelude::*;
//!
//! assert_eq!(to_slug("Hello World"), "hello-world");
//! assert!(!check_data_connection(&StaticConnectivity::offline()).unwrap());
//! ```

pub use droidkit_domain as domain;
pub use droidkit_kernel as kernel;
#[cfg(feature = "logger")]
pub use droidkit_logger as logger;

pub use droidkit_kernel::IntoBundle;

pub mod prelude {
    pub use droidkit_domain::network::{NetworkInfo, NetworkState};
    pub use droidkit_domain::package::{ApiLevel, PackageInfo};
    pub use droidkit_kernel::prelude::*;
}

/// Build-time enabled features (by Cargo feature).
pub const ENABLED: &[&str] = &[
    #[cfg(feature = "logger")]
    "logger",
];

#[must_use]
pub fn is_enabled(name: &str) -> bool {
    ENABLED.contains(&name)
}
