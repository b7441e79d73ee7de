pub mod bundle;
pub mod error;
