//! The date/time facade
//!
//! [`TimeHelper`] bundles every operation of the crate behind one value. It
//! holds no mutable state: the clock is read again on every call, and the
//! only things it carries are the default timezone and the default templates
//! taken from [`Config`].
//!
//! Two naming paths exist on purpose. [`TimeHelper::day_of_week`] and
//! [`TimeHelper::month_name`] always answer in English, whatever locale the
//! caller works with, while [`TimeHelper::format_date_localized`] renders
//! through chrono's locale tables.

use chrono::{DateTime, Datelike, Months, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration as StdDuration;

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, FormatConfig};
use crate::constants::{CANONICAL_DATETIME_FORMAT, CLOCKS_PER_SEC, END_OF_DAY, START_OF_DAY};
use crate::error::{TimeError, TimeResult};
use crate::token::InsecureToken;
use crate::utils::datetime::{self, format_ymd};
use crate::utils::interval::Interval;
use crate::utils::range::DateRange;
use crate::utils::shift::TimeShift;
use crate::utils::template;

/// Start and end of a calendar day, rendered as `Y-m-d H:M:S`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBounds {
    pub start: String,
    pub end: String,
}

/// First and last day of a calendar month, rendered as `Y-m-d`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBounds {
    pub first: String,
    pub last: String,
}

/// Stateless date/time helper
#[derive(Debug, Clone)]
pub struct TimeHelper<C: Clock = SystemClock> {
    clock: C,
    timezone: Tz,
    formats: FormatConfig,
    locale: String,
    token_length: usize,
}

impl TimeHelper<SystemClock> {
    /// Helper on the system clock and the host timezone with default templates
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            clock: SystemClock,
            timezone: datetime::system_timezone(),
            formats: config.formats,
            locale: config.defaults.locale,
            token_length: config.defaults.token_length,
        }
    }

    /// Helper on the system clock using the configured defaults
    pub fn from_config(config: &Config) -> TimeResult<Self> {
        let timezone = match &config.defaults.timezone {
            Some(name) => datetime::resolve_timezone(name)?,
            None => datetime::system_timezone(),
        };

        Ok(Self {
            clock: SystemClock,
            timezone,
            formats: config.formats.clone(),
            locale: config.defaults.locale.clone(),
            token_length: config.defaults.token_length,
        })
    }
}

impl Default for TimeHelper<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimeHelper<C> {
    /// Replace the clock, keeping every other setting
    pub fn with_clock<D: Clock>(self, clock: D) -> TimeHelper<D> {
        TimeHelper {
            clock,
            timezone: self.timezone,
            formats: self.formats,
            locale: self.locale,
            token_length: self.token_length,
        }
    }

    /// Replace the default timezone
    pub fn with_timezone(mut self, timezone: &str) -> TimeResult<Self> {
        self.timezone = datetime::resolve_timezone(timezone)?;
        Ok(self)
    }

    /// The default timezone used for parsing and rendering
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The current instant in the default timezone
    pub fn now(&self) -> DateTime<Tz> {
        self.now_in(&self.timezone)
    }

    fn now_in(&self, tz: &Tz) -> DateTime<Tz> {
        self.clock.now().with_timezone(tz)
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn render_now(&self, tz: &Tz, format: Option<&str>, default: &str) -> TimeResult<String> {
        template::format_with(&self.now_in(tz), format.unwrap_or(default))
    }

    fn parse_in(&self, input: &str, tz: &Tz) -> TimeResult<DateTime<Tz>> {
        datetime::parse_datetime(input, tz, self.now_in(tz))
    }

    fn parse_date(&self, input: &str) -> TimeResult<NaiveDate> {
        Ok(self.parse(input, None)?.date_naive())
    }

    // Current time, date and datetime

    pub fn current_time(&self, format: Option<&str>) -> TimeResult<String> {
        self.render_now(&self.timezone, format, &self.formats.time)
    }

    pub fn current_date(&self, format: Option<&str>) -> TimeResult<String> {
        self.render_now(&self.timezone, format, &self.formats.date)
    }

    pub fn current_datetime(&self, format: Option<&str>) -> TimeResult<String> {
        self.render_now(&self.timezone, format, &self.formats.datetime)
    }

    pub fn current_time_in_timezone(&self, timezone: &str, format: Option<&str>) -> TimeResult<String> {
        let tz = datetime::resolve_timezone(timezone)?;
        self.render_now(&tz, format, &self.formats.time)
    }

    pub fn current_date_in_timezone(&self, timezone: &str, format: Option<&str>) -> TimeResult<String> {
        let tz = datetime::resolve_timezone(timezone)?;
        self.render_now(&tz, format, &self.formats.date)
    }

    pub fn current_datetime_in_timezone(&self, timezone: &str, format: Option<&str>) -> TimeResult<String> {
        let tz = datetime::resolve_timezone(timezone)?;
        self.render_now(&tz, format, &self.formats.datetime)
    }

    /// Parse a date/time in the default timezone
    ///
    /// With `format` set the input must match that template exactly; without
    /// it the lenient parser is used.
    pub fn parse(&self, input: &str, format: Option<&str>) -> TimeResult<DateTime<Tz>> {
        match format {
            Some(format) => datetime::parse_with_template(input, format, &self.timezone, self.now()),
            None => self.parse_in(input, &self.timezone),
        }
    }

    // Differences and conversion

    /// Calendar interval from `first` to `second`
    pub fn interval_between(&self, first: &str, second: &str) -> TimeResult<Interval> {
        let from = self.parse(first, None)?;
        let to = self.parse(second, None)?;
        Interval::between(&from, &to)
    }

    /// Render the absolute interval between two dates
    ///
    /// The default template is `%y years, %m months, %d days`.
    pub fn date_difference(&self, first: &str, second: &str, format: Option<&str>) -> TimeResult<String> {
        self.interval_between(first, second)?
            .format(format.unwrap_or(self.formats.interval.as_str()))
    }

    /// Read `input` as wall time in `from` and render it in `to`
    ///
    /// An explicit offset in the input takes precedence over `from`.
    pub fn convert_timezone(&self, input: &str, from: &str, to: &str) -> TimeResult<String> {
        let from_tz = datetime::resolve_timezone(from)?;
        let to_tz = datetime::resolve_timezone(to)?;
        let instant = self.parse_in(input, &from_tz)?;

        log::debug!("converting {} from {} to {}", instant, from_tz.name(), to_tz.name());
        Ok(instant.with_timezone(&to_tz).format(CANONICAL_DATETIME_FORMAT).to_string())
    }

    /// Shift "now" by the given offsets and render it canonically
    ///
    /// See [`TimeShift::apply`] for the order the offsets are applied in.
    pub fn time_travel(&self, shift: TimeShift) -> TimeResult<String> {
        let shifted = shift.apply(self.now())?;
        Ok(shifted.format(CANONICAL_DATETIME_FORMAT).to_string())
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        datetime::is_leap_year(year)
    }

    /// Every timezone identifier known to the compiled-in database
    pub fn timezones(&self) -> Vec<&'static str> {
        chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
    }

    /// Random hex string seeded from the clock
    ///
    /// Not cryptographically secure; see [`InsecureToken`].
    pub fn generate_random_string(&self, length: Option<usize>) -> TimeResult<InsecureToken> {
        InsecureToken::generate(self.clock.now(), length.unwrap_or(self.token_length))
    }

    // Timing

    /// Wall-clock seconds since the Unix epoch with microsecond precision
    pub fn microtime(&self) -> f64 {
        self.clock.now().timestamp_micros() as f64 / CLOCKS_PER_SEC as f64
    }

    /// Seconds elapsed since a value previously returned by [`Self::microtime`]
    ///
    /// Based on the wall clock, so the result can be negative if the system
    /// clock is adjusted in between.
    pub fn measure_execution_time(&self, start: f64) -> f64 {
        self.microtime() - start
    }

    /// Block the calling thread for whole seconds
    pub fn sleep_for(&self, seconds: u64) {
        log::debug!("sleeping for {}s", seconds);
        thread::sleep(StdDuration::from_secs(seconds));
    }

    /// Block the calling thread for milliseconds
    pub fn sleep_for_milliseconds(&self, milliseconds: u64) {
        log::debug!("sleeping for {}ms", milliseconds);
        thread::sleep(StdDuration::from_millis(milliseconds));
    }

    pub fn clocks_per_sec(&self) -> i64 {
        CLOCKS_PER_SEC
    }

    // Calendar queries

    /// Whole years between a birth date and today
    pub fn calculate_age(&self, date_of_birth: &str) -> TimeResult<u32> {
        let born = self.parse_date(date_of_birth)?;
        let today = self.today();
        let years = if born <= today {
            today.years_since(born)
        } else {
            born.years_since(today)
        };
        years.ok_or_else(|| TimeError::OutOfRange(format!("age for {}", date_of_birth)))
    }

    pub fn is_date_in_past(&self, date: &str) -> TimeResult<bool> {
        Ok(self.parse(date, None)? < self.now())
    }

    pub fn is_today(&self, date: &str) -> TimeResult<bool> {
        Ok(self.parse_date(date)? == self.today())
    }

    /// English weekday name, e.g. "Monday"
    pub fn day_of_week(&self, date: &str) -> TimeResult<&'static str> {
        Ok(datetime::weekday_name(self.parse_date(date)?.weekday()))
    }

    /// English month name, e.g. "January"
    pub fn month_name(&self, date: &str) -> TimeResult<&'static str> {
        let month = self.parse_date(date)?.month();
        datetime::month_name(month).ok_or_else(|| TimeError::OutOfRange(format!("month {}", month)))
    }

    /// Render a date with a locale's month and weekday names
    ///
    /// The template is honored. Without one, the locale's preferred date
    /// representation (`%x`) is used; without a locale, the configured
    /// default locale applies.
    pub fn format_date_localized(
        &self,
        date: &str,
        locale: Option<&str>,
        format: Option<&str>,
    ) -> TimeResult<String> {
        let locale = datetime::resolve_locale(locale.unwrap_or(self.locale.as_str()))?;
        let strftime = template::to_strftime(format.unwrap_or("%x"))?;
        let instant = self.parse(date, None)?;
        template::render(instant.format_localized(&strftime, locale), &strftime)
    }

    /// Unix timestamp of now, or of `date` when given
    pub fn timestamp(&self, date: Option<&str>) -> TimeResult<i64> {
        match date {
            Some(date) => Ok(self.parse(date, None)?.timestamp()),
            None => Ok(self.clock.now().timestamp()),
        }
    }

    pub fn start_and_end_of_day(&self, date: &str) -> TimeResult<DayBounds> {
        let day = format_ymd(self.parse_date(date)?);
        Ok(DayBounds {
            start: format!("{} {}", day, START_OF_DAY),
            end: format!("{} {}", day, END_OF_DAY),
        })
    }

    /// ISO-8601 week number
    pub fn week_number(&self, date: &str) -> TimeResult<u32> {
        Ok(self.parse_date(date)?.iso_week().week())
    }

    pub fn first_and_last_day_of_month(&self, date: &str) -> TimeResult<MonthBounds> {
        let day = self.parse_date(date)?;
        let out_of_range = || TimeError::OutOfRange(format!("month of {}", day));
        let first = day.with_day(1).ok_or_else(out_of_range)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(out_of_range)?;

        Ok(MonthBounds {
            first: format_ymd(first),
            last: format_ymd(last),
        })
    }

    /// Calendar days between today and `date`, sign dropped
    pub fn days_until(&self, date: &str) -> TimeResult<i64> {
        let target = self.parse_date(date)?;
        Ok((target - self.today()).num_days().abs())
    }

    // Ranges

    /// Lazy inclusive range of calendar days
    pub fn date_range(&self, start: &str, end: &str) -> TimeResult<DateRange> {
        Ok(DateRange::new(self.parse_date(start)?, self.parse_date(end)?))
    }

    pub fn all_dates_in_range(&self, start: &str, end: &str) -> TimeResult<Vec<String>> {
        Ok(self.date_range(start, end)?.map(format_ymd).collect())
    }

    /// Monday-Friday days in the inclusive range
    pub fn business_days_between(&self, start: &str, end: &str) -> TimeResult<usize> {
        Ok(self.date_range(start, end)?.business_days())
    }
}
