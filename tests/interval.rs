use chrono::{NaiveDate, NaiveDateTime};
use timehelper::{Interval, TimeError};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
}

fn sample() -> Interval {
    Interval {
        years: 1,
        months: 2,
        days: 3,
        hours: 4,
        minutes: 5,
        seconds: 6,
        total_days: 430,
        inverted: false,
    }
}

#[test]
fn test_default_template() {
    assert_eq!(
        sample().format("%y years, %m months, %d days").unwrap(),
        "1 years, 2 months, 3 days"
    );
}

#[test]
fn test_padded_placeholders() {
    assert_eq!(sample().format("%Y-%M-%D %H:%I:%S").unwrap(), "01-02-03 04:05:06");
    assert_eq!(sample().format("%h:%i:%s").unwrap(), "4:5:6");
}

#[test]
fn test_sign_placeholders() {
    let forward = sample();
    let backward = Interval { inverted: true, ..sample() };
    assert_eq!(forward.format("%R%a").unwrap(), "+430");
    assert_eq!(backward.format("%R%a").unwrap(), "-430");
    assert_eq!(forward.format("%r%a").unwrap(), "430");
    assert_eq!(backward.format("%r%a").unwrap(), "-430");
}

#[test]
fn test_literal_percent() {
    assert_eq!(sample().format("100%%").unwrap(), "100%");
}

#[test]
fn test_malformed_templates() {
    assert!(matches!(sample().format("%q"), Err(TimeError::InvalidFormatTemplate(_))));
    assert!(matches!(sample().format("trailing %"), Err(TimeError::InvalidFormatTemplate(_))));
}

#[test]
fn test_clock_components() {
    let interval = Interval::between_naive(at(2024, 1, 1, 10, 0, 0), at(2024, 1, 2, 9, 30, 15)).unwrap();
    assert_eq!((interval.days, interval.hours, interval.minutes, interval.seconds), (0, 23, 30, 15));
    assert_eq!(interval.total_days, 0);
}

#[test]
fn test_time_of_day_borrows_from_month() {
    let interval = Interval::between_naive(at(2024, 1, 15, 18, 0, 0), at(2024, 2, 15, 6, 0, 0)).unwrap();
    assert_eq!((interval.months, interval.days, interval.hours), (0, 30, 12));
}

#[test]
fn test_years_and_months() {
    let interval = Interval::between_naive(at(2024, 1, 1, 0, 0, 0), at(2025, 3, 15, 0, 0, 0)).unwrap();
    assert_eq!((interval.years, interval.months, interval.days), (1, 2, 14));
    assert_eq!(interval.total_days, 439);
}

#[test]
fn test_identical_instants() {
    let interval = Interval::between_naive(at(2024, 6, 1, 12, 0, 0), at(2024, 6, 1, 12, 0, 0)).unwrap();
    assert_eq!(interval, Interval::default());
}
