//! Kernel utilities: small, stateless helpers originally written for an Android app.
//! Keep this crate lightweight; platform access (connectivity, SDK level, collector)
//! always goes through an injected trait so callers can fake it in tests.
//!
//! ## Text
//! ```rust
//! use droidkit_kernel::text::{to_class_name, to_slug};
//!
//! assert_eq!(to_slug("Crème Brûlée"), "creme-brulee");
//! assert_eq!(to_class_name("com.example.App"), "Lcom/example/App");
//! ```
//!
//! ## Digests
//! ```rust
//! use droidkit_kernel::digest::hash_string;
//!
//! let hex = hash_string("SHA-1", "abc").unwrap();
//! assert_eq!(hex, "A9993E364706816ABA3E25717850C26C9CD0D89D");
//! ```

extern crate self as droidkit_kernel;

pub mod bundle;
pub mod config;
pub mod digest;
pub mod io;
pub mod memory;
pub mod network;
pub mod platform;
pub mod prelude;
pub mod text;
pub mod time;
pub mod version;

pub use droidkit_derive::IntoBundle;
pub use droidkit_domain as domain;
