//! Configuration management for timehelper
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Every section is optional; missing keys fall back to the defaults in
//! [`crate::constants`].

use crate::constants::{
    CONFIG_DIR_FILE_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT,
    DEFAULT_INTERVAL_FORMAT, DEFAULT_LOCALE, DEFAULT_LOG_LEVEL, DEFAULT_TIME_FORMAT, DEFAULT_TOKEN_LENGTH,
    MAX_TOKEN_LENGTH,
};
use crate::utils::{datetime, interval::Interval, template};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: FormatConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

/// Default rendering templates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Template for `current_time*`
    pub time: String,
    /// Template for `current_date*`
    pub date: String,
    /// Template for `current_datetime*`
    pub datetime: String,
    /// Interval template for `date_difference`
    pub interval: String,
}

/// Defaults applied when a call does not specify them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Timezone for parsing and rendering; the host timezone when unset
    pub timezone: Option<String>,
    /// Locale used by `format_date_localized` when the caller passes none
    pub locale: String,
    /// Length of generated random strings
    pub token_length: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Level filter: off, error, warn, info, debug or trace
    pub level: String,
    /// Log file; defaults to the user cache directory when unset
    pub file: Option<PathBuf>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            time: DEFAULT_TIME_FORMAT.to_string(),
            date: DEFAULT_DATE_FORMAT.to_string(),
            datetime: DEFAULT_DATETIME_FORMAT.to_string(),
            interval: DEFAULT_INTERVAL_FORMAT.to_string(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            locale: DEFAULT_LOCALE.to_string(),
            token_length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.as_ref().display()))?;

        log::debug!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_DIR_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate rendering templates
        for (name, value) in [
            ("time", &self.formats.time),
            ("date", &self.formats.date),
            ("datetime", &self.formats.datetime),
        ] {
            if let Err(e) = template::to_strftime(value) {
                anyhow::bail!("Invalid formats.{} '{}': {}", name, value, e);
            }
        }

        if let Err(e) = Interval::default().format(&self.formats.interval) {
            anyhow::bail!("Invalid formats.interval '{}': {}", self.formats.interval, e);
        }

        // Validate defaults
        if let Some(timezone) = &self.defaults.timezone {
            if let Err(e) = datetime::resolve_timezone(timezone) {
                anyhow::bail!("Invalid defaults.timezone: {}", e);
            }
        }

        if let Err(e) = datetime::resolve_locale(&self.defaults.locale) {
            anyhow::bail!("Invalid defaults.locale: {}", e);
        }

        if self.defaults.token_length == 0 || self.defaults.token_length > MAX_TOKEN_LENGTH {
            anyhow::bail!(
                "token_length must be between 1 and {}, got {}",
                MAX_TOKEN_LENGTH,
                self.defaults.token_length
            );
        }

        // Validate logging
        self.logging.level_filter()?;

        Ok(())
    }
}
