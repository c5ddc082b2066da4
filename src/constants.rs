//! Constants used throughout the crate
//!
//! This module centralizes default templates, file names and other constant
//! values so the facade and the configuration layer agree on them.

// Default rendering templates
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_INTERVAL_FORMAT: &str = "%y years, %m months, %d days";

/// Canonical rendering used by timezone conversion and relative shifts
pub const CANONICAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Fixed bounds of a calendar day
pub const START_OF_DAY: &str = "00:00:00";
pub const END_OF_DAY: &str = "23:59:59";

// Token generation
pub const DEFAULT_TOKEN_LENGTH: usize = 60;
pub const MAX_TOKEN_LENGTH: usize = 4096;

/// Microseconds per second. A fixed constant, not a measured clock resolution.
pub const CLOCKS_PER_SEC: i64 = 1_000_000;

// Locale
pub const DEFAULT_LOCALE: &str = "en_US";

// Timezone used when the host timezone cannot be determined
pub const FALLBACK_TIMEZONE: &str = "UTC";

// Configuration file lookup
pub const CONFIG_FILE_NAME: &str = "timehelper.toml";
pub const CONFIG_DIR_NAME: &str = "timehelper";
pub const CONFIG_DIR_FILE_NAME: &str = "config.toml";

// Logging
pub const LOG_FILE_NAME: &str = "timehelper.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
