pub mod bundle;
pub mod digest;
pub mod files;
pub mod package;
pub mod system;
pub mod text;
