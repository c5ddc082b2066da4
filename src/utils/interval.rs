//! Calendar intervals between two instants
//!
//! An [`Interval`] is the difference between two instants broken down into
//! calendar components (years, months, days) plus the remaining clock time.
//! Whole months are counted with chrono's month arithmetic, which clamps the
//! day-of-month, so 2024-01-31 to 2024-03-01 is one month and one day.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{TimeError, TimeResult};

/// Signed calendar difference between two instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interval {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Total number of whole days between the two instants
    pub total_days: i64,
    /// Set when the second instant is earlier than the first
    pub inverted: bool,
}

impl Interval {
    /// Compute the interval from `from` to `to`
    ///
    /// Both instants are compared as wall-clock times in their own timezone,
    /// so callers should project them into the same zone first.
    pub fn between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> TimeResult<Self> {
        Self::between_naive(from.naive_local(), to.naive_local())
    }

    /// Compute the interval between two wall-clock times
    pub fn between_naive(from: NaiveDateTime, to: NaiveDateTime) -> TimeResult<Self> {
        let inverted = to < from;
        let (start, end) = if inverted { (to, from) } else { (from, to) };

        let span_months = (month_index(&end) - month_index(&start)).max(0);
        let mut whole_months = u32::try_from(span_months)
            .map_err(|_| TimeError::OutOfRange(format!("{} to {}", start, end)))?;
        let mut anchor = add_months(start, whole_months)?;
        while whole_months > 0 && anchor > end {
            whole_months -= 1;
            anchor = add_months(start, whole_months)?;
        }

        let remainder = end - anchor;
        let days = remainder.num_days();
        let clock = remainder - Duration::days(days);
        let clock_seconds = clock.num_seconds();

        Ok(Self {
            years: whole_months / 12,
            months: whole_months % 12,
            days: to_u32(days)?,
            hours: to_u32(clock_seconds / 3600)?,
            minutes: to_u32(clock_seconds % 3600 / 60)?,
            seconds: to_u32(clock_seconds % 60)?,
            total_days: (end - start).num_days(),
            inverted,
        })
    }

    /// Render the interval with a template
    ///
    /// Placeholders: `%y %m %d %h %i %s` for the components (uppercase for two
    /// digit zero padding), `%a` total days, `%R` sign, `%r` sign only when
    /// negative and `%%` for a literal percent.
    pub fn format(&self, template: &str) -> TimeResult<String> {
        let mut out = String::with_capacity(template.len() + 16);
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let Some(spec) = chars.next() else {
                return Err(TimeError::InvalidFormatTemplate(format!(
                    "dangling '%' at the end of '{}'",
                    template
                )));
            };

            match spec {
                'y' => out.push_str(&self.years.to_string()),
                'Y' => out.push_str(&format!("{:02}", self.years)),
                'm' => out.push_str(&self.months.to_string()),
                'M' => out.push_str(&format!("{:02}", self.months)),
                'd' => out.push_str(&self.days.to_string()),
                'D' => out.push_str(&format!("{:02}", self.days)),
                'h' => out.push_str(&self.hours.to_string()),
                'H' => out.push_str(&format!("{:02}", self.hours)),
                'i' => out.push_str(&self.minutes.to_string()),
                'I' => out.push_str(&format!("{:02}", self.minutes)),
                's' => out.push_str(&self.seconds.to_string()),
                'S' => out.push_str(&format!("{:02}", self.seconds)),
                'a' => out.push_str(&self.total_days.to_string()),
                'R' => out.push(if self.inverted { '-' } else { '+' }),
                'r' => {
                    if self.inverted {
                        out.push('-');
                    }
                }
                '%' => out.push('%'),
                other => {
                    log::debug!("unknown interval placeholder '%{}' in '{}'", other, template);
                    return Err(TimeError::InvalidFormatTemplate(format!(
                        "unknown placeholder '%{}' in '{}'",
                        other, template
                    )));
                }
            }
        }

        Ok(out)
    }
}

fn month_index(dt: &NaiveDateTime) -> i64 {
    i64::from(dt.year()) * 12 + i64::from(dt.month0())
}

fn add_months(start: NaiveDateTime, months: u32) -> TimeResult<NaiveDateTime> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| TimeError::OutOfRange(format!("{} + {} months", start, months)))
}

fn to_u32(value: i64) -> TimeResult<u32> {
    u32::try_from(value).map_err(|_| TimeError::OutOfRange(format!("interval component {}", value)))
}
