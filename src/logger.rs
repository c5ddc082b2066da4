//! Logging setup
//!
//! The crate logs through the `log` facade. Applications that want those
//! records written somewhere call [`init`] once at startup; it installs a
//! `fern` dispatch writing timestamped lines either to a log file or to
//! stderr, filtered by the configured level.

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

/// Default log file location: `<cache_dir>/timehelper/timehelper.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().context("Could not determine cache directory")?;
    Ok(cache_dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatch described by `config` without installing it
///
/// Writes to `config.file` (or [`get_log_file_path`]) and creates the parent
/// directory when needed.
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;
    let path = match &config.file {
        Some(path) => path.clone(),
        None => get_log_file_path()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
    }

    let file =
        fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(base_dispatch().level(level).chain(file))
}

/// Install the global logger
///
/// Does nothing when logging is disabled. Fails if a global logger has
/// already been installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    build_dispatch(config)?
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::info!("logging initialised at level {}", config.level);
    Ok(())
}

/// Install a global logger writing to stderr
pub fn init_stderr(config: &LoggingConfig) -> Result<()> {
    let level = config.level_filter()?;
    base_dispatch()
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

fn base_dispatch() -> fern::Dispatch {
    fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{}] {:<5} {}: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            message
        ))
    })
}
