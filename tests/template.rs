use chrono::TimeZone;
use chrono_tz::Tz;
use timehelper::utils::template::*;
use timehelper::TimeError;

#[test]
fn test_is_strftime() {
    assert!(is_strftime("%Y"));
    assert!(!is_strftime("Y-m-d"));
}

#[test]
fn test_both_dialects_render_identically() {
    let instant = Tz::UTC.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    assert_eq!(
        format_with(&instant, "Y-m-d H:i:s").unwrap(),
        format_with(&instant, "%Y-%m-%d %H:%M:%S").unwrap()
    );
}

#[test]
fn test_php_tokens() {
    let instant = Tz::UTC.with_ymd_and_hms(2024, 6, 1, 15, 4, 5).unwrap();
    assert_eq!(format_with(&instant, "D, d M Y").unwrap(), "Sat, 01 Jun 2024");
    assert_eq!(format_with(&instant, "l j F").unwrap(), "Saturday 1 June");
    assert_eq!(format_with(&instant, "N w W").unwrap(), "6 6 22");
    assert_eq!(format_with(&instant, "g:i a").unwrap(), "3:04 pm");
    assert_eq!(format_with(&instant, "h A G").unwrap(), "03 PM 15");
    assert_eq!(format_with(&instant, "n/y").unwrap(), "6/24");
    assert_eq!(format_with(&instant, "c").unwrap(), "2024-06-01T15:04:05+00:00");
    assert_eq!(format_with(&instant, "U").unwrap(), "1717254245");
    assert_eq!(format_with(&instant, "P O").unwrap(), "+00:00 +0000");
}

#[test]
fn test_escaped_characters_are_literal() {
    let instant = Tz::UTC.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    assert_eq!(format_with(&instant, "\\d\\a\\y: d").unwrap(), "day: 01");
}

#[test]
fn test_timezone_abbreviation() {
    let tz: Tz = "America/New_York".parse().unwrap();
    let instant = tz.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    assert_eq!(format_with(&instant, "H:i T").unwrap(), "09:00 EST");
}

#[test]
fn test_unsupported_tokens() {
    for template in ["z", "t", "L", "S", "Y-m-d e"] {
        assert!(
            matches!(to_strftime(template), Err(TimeError::InvalidFormatTemplate(_))),
            "template {:?}",
            template
        );
    }
}

#[test]
fn test_validate_strftime() {
    assert!(validate_strftime("%Y-%m-%d %H:%M:%S%.3f %:z").is_ok());
    assert!(validate_strftime("plain text").is_ok());
    assert!(validate_strftime("%Y-%").is_err());
}

#[test]
fn test_parse_only_specifier_is_an_error() {
    let instant = Tz::UTC.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    assert!(matches!(
        format_with(&instant, "%H %#z"),
        Err(TimeError::InvalidFormatTemplate(_))
    ));
    assert!(matches!(validate_strftime("%#z"), Err(TimeError::InvalidFormatTemplate(_))));
}

#[test]
fn test_render_maps_formatting_failure() {
    struct Broken;
    impl std::fmt::Display for Broken {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    assert!(matches!(render(Broken, "%Y"), Err(TimeError::InvalidFormatTemplate(_))));
    assert_eq!(render("12:00", "%H:%M").unwrap(), "12:00");
}
