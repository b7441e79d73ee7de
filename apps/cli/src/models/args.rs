//! # CLI Argument Definitions
//!
//! Command-line surface of the `droidkit` binary, declared with `clap` derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "droidkit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Platform utility helpers: slugs, digests, connectivity, versions")]
pub struct Cli {
    /// Configuration file (defaults to an optional `droidkit.toml` in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Turn text into a URL-safe slug
    Slug { text: String },
    /// Convert a dotted package name to a JVM type descriptor
    ClassName { name: String },
    /// Digest text or a file and print uppercase hex
    Hash {
        /// Algorithm name, e.g. MD5, SHA-1, SHA-256
        #[arg(short, long, default_value = "SHA-256")]
        algorithm: String,
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        input: Option<String>,
        /// Hash the contents of this file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print a timestamp as yyyy-MM-ddTHH:mm:ss.SSSZ
    Date {
        /// Milliseconds since the Unix epoch (defaults to now)
        #[arg(long, allow_negative_numbers = true)]
        millis: Option<i64>,
    },
    /// Report whether a data connection is up
    Net {
        /// Interface directory to read (overrides `network.sysfs_root`)
        #[arg(long)]
        sysfs_root: Option<PathBuf>,
        /// Print the active network as JSON
        #[arg(long)]
        json: bool,
    },
    /// Stream a file (or `-` for stdin) into a destination file
    Copy { source: PathBuf, destination: PathBuf },
    /// Resolve the display version and version code of a package
    Version {
        /// JSON file holding a `PackageInfo`
        #[arg(short, long, conflicts_with_all = ["package", "version_name", "version_code", "long_version_code"])]
        manifest: Option<PathBuf>,
        #[arg(long, default_value = "")]
        package: String,
        #[arg(long)]
        version_name: Option<String>,
        #[arg(long)]
        version_code: Option<i32>,
        #[arg(long)]
        long_version_code: Option<i64>,
        /// Platform SDK level (overrides `platform.api_level`)
        #[arg(long)]
        api_level: Option<u32>,
        /// Print the version code instead of the display version
        #[arg(long)]
        code: bool,
    },
    /// Build a bundle from key=value pairs and print it as JSON
    Bundle {
        #[arg(value_name = "KEY=VALUE", required = true)]
        entries: Vec<String>,
    },
    /// Request a memory collection pass and pause
    Clean {
        /// Pause in milliseconds (overrides `memory.pause_ms`)
        #[arg(long)]
        pause_ms: Option<u64>,
    },
}
