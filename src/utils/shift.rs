//! Relative time shifts
//!
//! Offsets are applied one unit at a time in a fixed order: seconds, minutes,
//! hours, days, months, years. The first three are exact durations. Days,
//! months and years move the wall clock and re-resolve it in the instant's
//! timezone, so adding a day across a DST change keeps the time of day.
//! Month and year steps clamp the day-of-month (2024-01-31 + 1 month is
//! 2024-02-29). The order matters: +1 month then +1 day from January 31 is not
//! the same as +1 day then +1 month.

use chrono::{DateTime, Days, Duration, Months, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{TimeError, TimeResult};
use crate::utils::datetime::resolve_local;

/// Signed offsets for [`TimeShift::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeShift {
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
    pub months: i32,
    pub years: i32,
}

impl TimeShift {
    pub fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    pub fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    pub fn years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the offsets to an instant in fixed order
    pub fn apply(&self, instant: DateTime<Tz>) -> TimeResult<DateTime<Tz>> {
        let out_of_range = || TimeError::OutOfRange(format!("{} shifted by {:?}", instant, self));

        let exact = Duration::try_seconds(self.seconds)
            .and_then(|s| Duration::try_minutes(self.minutes).and_then(|m| s.checked_add(&m)))
            .and_then(|sm| Duration::try_hours(self.hours).and_then(|h| sm.checked_add(&h)))
            .ok_or_else(out_of_range)?;
        let shifted = instant.checked_add_signed(exact).ok_or_else(out_of_range)?;

        let tz = shifted.timezone();
        let mut wall = shifted.naive_local();
        wall = shift_days(wall, self.days).ok_or_else(out_of_range)?;
        wall = shift_months(wall, i64::from(self.months)).ok_or_else(out_of_range)?;
        wall = shift_months(wall, i64::from(self.years) * 12).ok_or_else(out_of_range)?;

        if wall == shifted.naive_local() {
            return Ok(shifted);
        }
        resolve_local(&tz, wall)
    }
}

fn shift_days(wall: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        wall.checked_add_days(magnitude)
    } else {
        wall.checked_sub_days(magnitude)
    }
}

fn shift_months(wall: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        wall.checked_add_months(magnitude)
    } else {
        wall.checked_sub_months(magnitude)
    }
}
