#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{bundle, digest, files, package, system, text};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use clap::Parser;
use droidkit::kernel::config::load_droidkit_config;
use droidkit::logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = load_droidkit_config(cli.config.as_deref())
        .context("Critical: Configuration is malformed")?;

    let mut logger = Logger::from_config(&cfg.logging)?;
    if cli.verbose {
        logger = logger.level(LevelFilter::DEBUG);
    } else if cli.quiet {
        logger = logger.level(LevelFilter::ERROR);
    }
    let _log = logger.init()?;

    match cli.command {
        AppCommands::Slug { text } => text::slug(&text),
        AppCommands::ClassName { name } => text::class_name(&name),
        AppCommands::Hash { algorithm, input, file } => {
            digest::hash(&algorithm, input.as_deref(), file.as_deref())?;
        },
        AppCommands::Date { millis } => system::date(millis)?,
        AppCommands::Net { sysfs_root, json } => system::net(&cfg.network, sysfs_root, json)?,
        AppCommands::Copy { source, destination } => files::copy(&source, &destination)?,
        AppCommands::Version {
            manifest,
            package,
            version_name,
            version_code,
            long_version_code,
            api_level,
            code,
        } => {
            let info = match manifest {
                Some(path) => package::load_manifest(&path)?,
                None => package::from_flags(package, version_name, version_code, long_version_code),
            };
            let api_level = api_level.map_or(cfg.platform.api_level, Into::into);
            package::version(&info, api_level, code);
        },
        AppCommands::Bundle { entries } => bundle::bundle(&entries)?,
        AppCommands::Clean { pause_ms } => system::clean(&cfg.memory, pause_ms),
    }

    Ok(())
}
