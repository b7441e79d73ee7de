//! # Domain Models
//!
//! Pure data types shared by the kernel, the CLI, and the logger (`serde`, `bitflags` only).
//! Keep it lean: no I/O or platform access here, just data and simple helpers.

pub mod config;
pub mod network;
pub mod package;
