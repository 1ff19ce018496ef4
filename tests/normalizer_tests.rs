//! Unit coverage for the value normalizers: numbers, weights, durations
//! and the column-level datetime detection.

use chrono::{NaiveDate, TimeDelta};
use warestat::core::parse::datetime::{
    DetectedFormat, extract_hour_from_text, parse_datetime_column,
};
use warestat::core::parse::duration::parse_confirm_duration;
use warestat::core::parse::number::{normalize_number, normalize_weight, parse_qty, parse_weight_kg};
use warestat::utils::formatting::format_duration_hhmm;

#[test]
fn generic_parser_reads_three_trailing_digits_as_thousands() {
    assert_eq!(normalize_number("2,304"), Some(2304.0));
    assert_eq!(normalize_number("1,234"), Some(1234.0));
}

#[test]
fn weight_parser_reads_comma_as_decimal_always() {
    assert_eq!(normalize_weight("2,304"), Some(2.304));
    assert_eq!(normalize_weight("1,5"), Some(1.5));
}

#[test]
fn mixed_separators_dot_is_thousands() {
    assert_eq!(normalize_number("1.234,56"), Some(1234.56));
    assert_eq!(normalize_weight("1.234,56"), Some(1234.56));
}

#[test]
fn multiple_dots_are_thousands() {
    assert_eq!(normalize_number("1.234.567"), Some(1234567.0));
}

#[test]
fn spaces_nbsp_and_apostrophes_are_stripped() {
    assert_eq!(normalize_number("1 234,5"), Some(1234.5));
    assert_eq!(normalize_number("1\u{00A0}234"), Some(1234.0));
    assert_eq!(normalize_number("1'234'567"), Some(1234567.0));
}

#[test]
fn single_comma_without_three_digits_is_decimal() {
    assert_eq!(normalize_number("12,5"), Some(12.5));
    assert_eq!(normalize_number("12,34"), Some(12.34));
}

#[test]
fn unparseable_numbers_default_to_zero() {
    assert_eq!(parse_qty("кг"), 0.0);
    assert_eq!(parse_qty(""), 0.0);
    assert_eq!(parse_qty("nan"), 0.0);
    assert_eq!(parse_weight_kg("None"), 0.0);
    assert_eq!(parse_weight_kg("шт"), 0.0);
}

#[test]
fn duration_colon_formats() {
    assert_eq!(parse_confirm_duration("1:02:03"), TimeDelta::seconds(3723));
    assert_eq!(parse_confirm_duration("02:30"), TimeDelta::seconds(150));
}

#[test]
fn duration_bare_seconds_and_milliseconds() {
    assert_eq!(parse_confirm_duration("90"), TimeDelta::seconds(90));
    assert_eq!(parse_confirm_duration("42,5"), TimeDelta::milliseconds(42_500));
    // above ten days' worth of seconds the number is read as milliseconds
    assert_eq!(
        parse_confirm_duration("900000000"),
        TimeDelta::milliseconds(900_000_000)
    );
}

#[test]
fn duration_garbage_is_zero() {
    assert_eq!(parse_confirm_duration(""), TimeDelta::zero());
    assert_eq!(parse_confirm_duration("fast"), TimeDelta::zero());
    assert_eq!(parse_confirm_duration("1:2:3:4"), TimeDelta::zero());
}

#[test]
fn hhmm_formatting_clamps_negative() {
    assert_eq!(format_duration_hhmm(TimeDelta::minutes(-5)), "00:00");
    assert_eq!(format_duration_hhmm(TimeDelta::minutes(75)), "01:15");
    assert_eq!(format_duration_hhmm(TimeDelta::hours(26)), "26:00");
}

#[test]
fn datetime_column_detects_dayfirst_format() {
    let column = vec![
        "01.02.2024 09:00:00",
        "01.02.2024 09:20:00",
        "02.02.2024 10:05:00",
        "bad",
    ];
    let (fmt, parsed) = parse_datetime_column(&column);
    assert_eq!(fmt, DetectedFormat::Fixed("%d.%m.%Y %H:%M:%S"));
    assert_eq!(
        parsed[0],
        NaiveDate::from_ymd_opt(2024, 2, 1).and_then(|d| d.and_hms_opt(9, 0, 0))
    );
    assert_eq!(parsed[3], None);
}

#[test]
fn datetime_column_falls_back_to_lenient_when_mixed() {
    // no single fixed format clears 80%, but every cell is readable
    let column = vec!["01.02.2024 09:00", "2024-02-01 10:00:00", "03/02/2024 11:30"];
    let (fmt, parsed) = parse_datetime_column(&column);
    assert_eq!(fmt, DetectedFormat::Lenient);
    assert!(parsed.iter().all(|p| p.is_some()));
}

#[test]
fn datetime_blank_cells_stay_none_without_dropping_rows() {
    let column = vec!["01.02.2024", "", "02.02.2024", "03.02.2024", "04.02.2024"];
    let (_, parsed) = parse_datetime_column(&column);
    assert!(parsed[0].is_some());
    assert_eq!(parsed[1], None);
}

#[test]
fn hour_extraction_from_text() {
    assert_eq!(extract_hour_from_text("12:30"), Some(12));
    assert_eq!(extract_hour_from_text(" 9:05"), Some(9));
    assert_eq!(extract_hour_from_text("99:00"), None);
    assert_eq!(extract_hour_from_text("no time here"), None);
}
