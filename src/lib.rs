//! timehelper - stateless date and time helpers
//!
//! This library wraps the `chrono` calendar engine and the `chrono-tz`
//! timezone database behind a single facade, [`TimeHelper`]: formatting the
//! current time, timezone conversion, calendar differences and shifts, leap
//! years, ranges and business days, locale-aware formatting, blocking sleeps
//! and a non-cryptographic random string generator.
//!
//! # Modules
//!
//! * [`helper`] - The [`TimeHelper`] facade
//! * [`clock`] - Where "now" comes from
//! * [`config`] - Configuration file loading and validation
//! * [`error`] - Error type shared by every operation
//! * [`logger`] - Optional `fern` logging setup
//! * [`token`] - Non-cryptographic random strings
//! * [`utils`] - Parsing, templates, intervals, ranges and shifts
//!
//! # Example
//!
//! ```
//! use timehelper::{FixedClock, TimeHelper};
//!
//! let clock = FixedClock::from_timestamp(1_717_243_200).unwrap(); // 2024-06-01 12:00:00 UTC
//! let helper = TimeHelper::new().with_clock(clock).with_timezone("UTC").unwrap();
//!
//! assert_eq!(helper.current_datetime(None).unwrap(), "2024-06-01 12:00:00");
//! assert_eq!(
//!     helper.convert_timezone("2024-06-01 12:00:00", "UTC", "America/New_York").unwrap(),
//!     "2024-06-01 08:00:00"
//! );
//! ```

/// Clock abstraction used to read the current instant
pub mod clock;

/// Configuration module for default templates, timezone and logging
pub mod config;

/// Constants and default values
pub mod constants;

/// Error types
pub mod error;

/// The date/time facade
pub mod helper;

/// Logging setup for the `log` facade
pub mod logger;

/// Non-cryptographic random strings
pub mod token;

/// Utility functions for parsing, templates and calendar arithmetic
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{TimeError, TimeResult};
pub use helper::{DayBounds, MonthBounds, TimeHelper};
pub use token::InsecureToken;
pub use utils::interval::Interval;
pub use utils::range::DateRange;
pub use utils::shift::TimeShift;
