// ABOUTME: Unit tests for the time, distance and pace parsers
// ABOUTME: Covers clock notation, unit names, default units, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use running::parsing::{extract_num_and_unit, parse_distance, parse_pace, parse_time};
use running::ErrorCode;

const MILE: f64 = 1609.344;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// --- extract_num_and_unit ---

#[test]
fn test_extract_integer_and_decimal() {
    let quantity = extract_num_and_unit("10km").unwrap();
    assert_eq!((quantity.magnitude, quantity.unit), (10.0, "km"));

    let quantity = extract_num_and_unit("2.5mile").unwrap();
    assert_eq!((quantity.magnitude, quantity.unit), (2.5, "mile"));
}

#[test]
fn test_extract_rejects_trailing_garbage() {
    assert_eq!(
        extract_num_and_unit("10km!").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

// --- parse_time ---

#[test]
fn test_time_minutes_seconds() {
    assert_eq!(parse_time("2:30").unwrap(), 150.0);
}

#[test]
fn test_time_hours_minutes_seconds() {
    assert_eq!(parse_time("1:35:00").unwrap(), 5700.0);
}

#[test]
fn test_time_fractional_seconds() {
    assert_close(parse_time("2:30.5").unwrap(), 150.5);
}

#[test]
fn test_time_unit_suffix() {
    assert_eq!(parse_time("1h").unwrap(), 3600.0);
    assert_eq!(parse_time("100sec").unwrap(), 100.0);
    assert_eq!(parse_time("50min").unwrap(), 3000.0);
    assert_eq!(parse_time("2days").unwrap(), 2.0 * 86_400.0);
}

#[test]
fn test_time_bare_number_defaults_seconds() {
    assert_eq!(parse_time("90").unwrap(), 90.0);
}

#[test]
fn test_time_unit_name_only() {
    assert_eq!(parse_time("hour").unwrap(), 3600.0);
    assert_eq!(parse_time("minute").unwrap(), 60.0);
    assert_eq!(parse_time("week").unwrap(), 604_800.0);
}

#[test]
fn test_time_too_many_clock_parts() {
    let error = parse_time("1:02:03:04").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_time_non_numeric_clock_parts() {
    for input in ["a:30", "5:", ":", "1:-2", "1:inf"] {
        let error = parse_time(input).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat, "input {input:?}");
    }
}

#[test]
fn test_time_unknown_unit() {
    let error = parse_time("10xyz").unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownUnit);
    assert!(error.message.contains("xyz"));
}

#[test]
fn test_time_garbage() {
    assert_eq!(
        parse_time("soon").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

// --- parse_distance ---

#[test]
fn test_distance_marathon() {
    assert_eq!(parse_distance("marathon", "km").unwrap(), 42_195.0);
}

#[test]
fn test_distance_half_marathon_aliases() {
    assert_eq!(parse_distance("half-marathon", "km").unwrap(), 21_097.5);
    assert_eq!(parse_distance("half", "km").unwrap(), 21_097.5);
}

#[test]
fn test_distance_numeric_units() {
    assert_eq!(parse_distance("10km", "km").unwrap(), 10_000.0);
    assert_eq!(parse_distance("1mile", "km").unwrap(), MILE);
    assert_eq!(parse_distance("800m", "km").unwrap(), 800.0);
    assert_close(parse_distance("100yards", "km").unwrap(), 91.44);
}

#[test]
fn test_distance_bare_number_uses_default() {
    assert_eq!(parse_distance("5", "km").unwrap(), 5000.0);
    assert_eq!(parse_distance("5", "mile").unwrap(), 5.0 * MILE);
}

#[test]
fn test_distance_unit_name_ignores_default() {
    assert_eq!(parse_distance("marathon", "not-a-unit").unwrap(), 42_195.0);
}

#[test]
fn test_distance_unknown_unit() {
    assert_eq!(
        parse_distance("10xyz", "km").unwrap_err().code,
        ErrorCode::UnknownUnit
    );
}

#[test]
fn test_distance_unknown_default_unit() {
    let error = parse_distance("5", "parsec").unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownUnit);
    assert!(error.message.contains("parsec"));
}

#[test]
fn test_distance_negative_rejected() {
    assert_eq!(
        parse_distance("-5km", "km").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

// --- parse_pace ---

#[test]
fn test_pace_with_slash() {
    assert_close(parse_pace("5:00/km", "km").unwrap(), 1000.0 / 300.0);
}

#[test]
fn test_pace_with_mile_unit() {
    assert_close(parse_pace("8:00/mile", "km").unwrap(), MILE / 480.0);
    assert_close(parse_pace("6min/mile", "km").unwrap(), MILE / 360.0);
}

#[test]
fn test_pace_with_multi_unit_distance() {
    assert_close(parse_pace("10:00/2km", "km").unwrap(), 2000.0 / 600.0);
}

#[test]
fn test_pace_without_slash_uses_default() {
    assert_close(parse_pace("5:00", "km").unwrap(), 1000.0 / 300.0);
    assert_close(parse_pace("8:00", "mile").unwrap(), MILE / 480.0);
}

#[test]
fn test_pace_slash_and_default_forms_agree() {
    assert_close(
        parse_pace("5:00/km", "km").unwrap(),
        parse_pace("5:00", "km").unwrap(),
    );
}

#[test]
fn test_named_pace_kipchoge() {
    assert_close(
        parse_pace("kipchoge", "km").unwrap(),
        42_195.0 / (2.0 * 3600.0 + 60.0 + 9.0),
    );
}

#[test]
fn test_named_pace_kiptum() {
    assert_close(
        parse_pace("kiptum", "km").unwrap(),
        42_195.0 / (2.0 * 3600.0 + 35.0),
    );
}

#[test]
fn test_named_pace_bolt() {
    assert_close(parse_pace("bolt", "km").unwrap(), 100.0 / 9.58);
}

#[test]
fn test_pace_zero_time_rejected() {
    let error = parse_pace("0:00/km", "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(
        parse_pace("0", "km").unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_pace_zero_distance_rejected() {
    assert_eq!(
        parse_pace("5:00/0km", "km").unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_pace_double_slash_rejected() {
    assert_eq!(
        parse_pace("5:00/km/h", "km").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_pace_unknown_default_unit() {
    assert_eq!(
        parse_pace("5:00", "xyz").unwrap_err().code,
        ErrorCode::UnknownUnit
    );
}

#[test]
fn test_pace_unknown_distance_unit() {
    assert_eq!(
        parse_pace("5:00/10xyz", "km").unwrap_err().code,
        ErrorCode::UnknownUnit
    );
}
