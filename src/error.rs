//! Error types for date and time operations.

/// Errors returned by the date/time helpers.
///
/// Every operation surfaces its failure immediately; nothing is retried and no
/// fallback value is substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("Invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("Invalid timezone: '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid format template: {0}")]
    InvalidFormatTemplate(String),

    #[error("Unknown locale: '{0}'")]
    InvalidLocale(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Result alias used across the crate.
pub type TimeResult<T> = Result<T, TimeError>;
