//! Utility modules behind the [`TimeHelper`](crate::TimeHelper) facade.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Lenient parsing, timezone and locale resolution, names
//! - [`template`] - strftime and PHP-style format templates
//! - [`interval`] - Calendar intervals and interval templates
//! - [`range`] - Inclusive calendar-day ranges and business days
//! - [`shift`] - Relative time shifts applied in a fixed order
//!
//! All of them are pure functions over their inputs; none reads the clock.

pub mod datetime;
pub mod interval;
pub mod range;
pub mod shift;
pub mod template;
