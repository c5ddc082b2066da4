//! Date and time utility functions
//!
//! This module provides the parsing and naming primitives the facade is built
//! on: lenient date/time parsing, timezone and locale resolution, and the
//! locale-agnostic weekday/month names.

use chrono::{
    DateTime, Duration, LocalResult, Locale, Month, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Weekday,
};
use chrono_tz::Tz;

use crate::constants::FALLBACK_TIMEZONE;
use crate::error::{TimeError, TimeResult};
use crate::utils::template;

/// Standard date format used for every `Y-m-d` rendering
pub const YMD_FORMAT: &str = "%Y-%m-%d";

/// Naive date-time layouts accepted by [`parse_datetime`], most specific first
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Naive date layouts accepted by [`parse_datetime`], interpreted at midnight
const DATE_LAYOUTS: &[&str] = &[YMD_FORMAT, "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(YMD_FORMAT).to_string()
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Resolve a timezone identifier against the compiled-in tz database
pub fn resolve_timezone(name: &str) -> TimeResult<Tz> {
    name.trim().parse::<Tz>().map_err(|_| {
        log::debug!("unknown timezone identifier '{}'", name);
        TimeError::InvalidTimezone(name.to_string())
    })
}

/// The host's timezone, or UTC when it cannot be determined
pub fn system_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => resolve_timezone(&name).unwrap_or_else(|_| {
            log::warn!("host timezone '{}' is not in the tz database, using {}", name, FALLBACK_TIMEZONE);
            Tz::UTC
        }),
        Err(e) => {
            log::warn!("could not determine host timezone ({}), using {}", e, FALLBACK_TIMEZONE);
            Tz::UTC
        }
    }
}

/// Resolve a locale identifier such as `fr_FR` or `fr-FR`
pub fn resolve_locale(name: &str) -> TimeResult<Locale> {
    let normalized = name.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| {
        log::debug!("unknown locale '{}'", name);
        TimeError::InvalidLocale(name.to_string())
    })
}

/// Attach a timezone to a wall-clock time
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant. Times
/// inside a gap (clocks turned forward) are moved forward by the gap length,
/// so 02:30 on a spring-forward night becomes 03:30.
pub fn resolve_local(tz: &Tz, naive: NaiveDateTime) -> TimeResult<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let before = naive
                .checked_sub_signed(Duration::days(1))
                .and_then(|day_before| tz.from_local_datetime(&day_before).earliest())
                .ok_or_else(|| TimeError::OutOfRange(format!("{} in {}", naive, tz.name())))?;
            let offset = Duration::seconds(i64::from(before.offset().fix().local_minus_utc()));
            let utc = naive
                .checked_sub_signed(offset)
                .ok_or_else(|| TimeError::OutOfRange(format!("{} in {}", naive, tz.name())))?;
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

fn midnight(tz: &Tz, date: NaiveDate) -> TimeResult<DateTime<Tz>> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

fn parse_keyword(input: &str, tz: &Tz, now: DateTime<Tz>) -> Option<TimeResult<DateTime<Tz>>> {
    let today = now.date_naive();
    let date = match input.to_ascii_lowercase().as_str() {
        "now" => return Some(Ok(now)),
        "today" | "midnight" => today,
        "tomorrow" => today.succ_opt()?,
        "yesterday" => today.pred_opt()?,
        _ => return None,
    };
    Some(midnight(tz, date))
}

/// Parse a date/time string leniently
///
/// Tries, in order: the keywords `now`, `today`, `midnight`, `tomorrow` and
/// `yesterday`; `@<unix seconds>`; RFC 3339 and RFC 2822 with explicit offsets;
/// naive date-times and naive dates (midnight) interpreted in `tz`.
///
/// # Arguments
/// * `input` - The string to parse
/// * `tz` - Timezone for inputs that carry no offset of their own
/// * `now` - The current instant, used by the relative keywords
///
/// # Returns
/// * `TimeResult<DateTime<Tz>>` - The instant, projected into `tz`
pub fn parse_datetime(input: &str, tz: &Tz, now: DateTime<Tz>) -> TimeResult<DateTime<Tz>> {
    let trimmed = input.trim();
    let invalid = || {
        log::debug!("could not parse '{}' as a date/time", input);
        TimeError::InvalidDateFormat(input.to_string())
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some(result) = parse_keyword(trimmed, tz, now) {
        return result;
    }

    if let Some(seconds) = trimmed.strip_prefix('@') {
        let seconds: i64 = seconds.parse().map_err(|_| invalid())?;
        return DateTime::from_timestamp(seconds, 0)
            .map(|utc| utc.with_timezone(tz))
            .ok_or_else(invalid);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(tz));
    }

    if let Some(naive) = DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
    {
        return resolve_local(tz, naive);
    }

    if let Some(date) = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
    {
        return midnight(tz, date);
    }

    Err(invalid())
}

/// Parse a string with an explicit format template
///
/// The template may be strftime or PHP-style. Templates carrying an offset are
/// honored; otherwise the value is read as wall time in `tz`. Date-only
/// templates yield midnight and time-only templates land on the date of `now`.
pub fn parse_with_template(input: &str, format: &str, tz: &Tz, now: DateTime<Tz>) -> TimeResult<DateTime<Tz>> {
    let strftime = template::to_strftime(format)?;

    if let Ok(dt) = DateTime::parse_from_str(input, &strftime) {
        return Ok(dt.with_timezone(tz));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, &strftime) {
        return resolve_local(tz, naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, &strftime) {
        return midnight(tz, date);
    }
    if let Ok(time) = NaiveTime::parse_from_str(input, &strftime) {
        return resolve_local(tz, now.date_naive().and_time(time));
    }

    log::debug!("'{}' does not match template '{}'", input, format);
    Err(TimeError::InvalidDateFormat(input.to_string()))
}

/// Get a human-readable weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Get a human-readable month name from a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Whether a weekday is Monday through Friday
pub fn is_business_day(weekday: Weekday) -> bool {
    weekday.number_from_monday() <= 5
}
