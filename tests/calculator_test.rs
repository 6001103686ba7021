// ABOUTME: Tests for deriving the missing quantity from the two given
// ABOUTME: Covers each derivation mode, named paces, and degenerate inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use running::calculator::{derive, Inputs, ResultLine};
use running::formatters::format_seconds;
use running::mode::Mode;
use running::parsing::parse_time;
use running::ErrorCode;

fn inputs<'a>(
    time: Option<&'a str>,
    distance: Option<&'a str>,
    pace: Option<&'a str>,
) -> Inputs<'a> {
    Inputs {
        time,
        distance,
        pace,
    }
}

fn headline(time: Option<&str>, distance: Option<&str>, pace: Option<&str>, unit: &str) -> String {
    let derivation = derive(&inputs(time, distance, pace), unit).unwrap();
    ResultLine::for_derivation(&derivation, unit)
        .unwrap()
        .to_string()
}

#[test]
fn test_time_from_pace_and_distance() {
    let derivation = derive(&inputs(None, Some("10km"), Some("5:00")), "km").unwrap();
    assert_eq!(derivation.mode, Mode::Time);
    assert!((derivation.seconds - 3000.0).abs() < 1e-6);
    assert!((derivation.meters - 10_000.0).abs() < 1e-9);
}

#[test]
fn test_pace_from_time_and_distance() {
    assert_eq!(
        headline(Some("50:00"), Some("10km"), None, "km"),
        "Required pace: 05:00 /km"
    );
}

#[test]
fn test_marathon_pace_per_mile() {
    assert_eq!(
        headline(Some("3:30:00"), Some("marathon"), None, "mile"),
        "Required pace: 08:01 /mile"
    );
}

#[test]
fn test_distance_from_time_and_pace() {
    assert_eq!(
        headline(Some("50min"), None, Some("4:30/km"), "km"),
        "Travelled distance: 11.11 km"
    );
}

#[test]
fn test_elapsed_time_headline() {
    assert_eq!(
        headline(None, Some("marathon"), Some("4:30"), "km"),
        "Elapsed time: 3:09:53 [H:]MM:SS"
    );
}

#[test]
fn test_named_pace_marathon() {
    assert_eq!(
        headline(None, Some("marathon"), Some("kipchoge"), "km"),
        "Elapsed time: 2:01:09 [H:]MM:SS"
    );
    assert_eq!(
        headline(None, Some("marathon"), Some("bolt"), "km"),
        "Elapsed time: 1:07:22 [H:]MM:SS"
    );
}

#[test]
fn test_pace_unit_differs_from_display_unit() {
    // 10 km at 8:00 per mile
    assert_eq!(
        headline(None, Some("10km"), Some("8:00/mile"), "km"),
        "Elapsed time: 49:43 [H:]MM:SS"
    );
}

#[test]
fn test_pace_then_time_round_trip() {
    let cases = [
        ("10km", "49:43"),
        ("half", "1:45:00"),
        ("marathon", "3:30:00"),
        ("800m", "2:10"),
    ];

    for (distance, time) in cases {
        let original = parse_time(time).unwrap();
        let forward = derive(&inputs(Some(time), Some(distance), None), "km").unwrap();
        assert_eq!(forward.mode, Mode::Pace);

        // Default Display of f64 is the shortest string that parses back to the same value
        let pace = format!("{}/1km", 1000.0 / forward.speed);
        let back = derive(&inputs(None, Some(distance), Some(&pace)), "km").unwrap();
        assert_eq!(back.mode, Mode::Time);
        assert!(
            (back.seconds - original).abs() < 1e-6,
            "{distance} in {time}: got {} seconds back, expected {original}",
            back.seconds
        );

        let line = ResultLine::for_derivation(&back, "km").unwrap();
        assert_eq!(line.value, format_seconds(original), "{distance} in {time}");
    }
}

#[test]
fn test_overlong_number_is_rejected() {
    let huge = format!("1{}", "0".repeat(400));

    let distance = format!("{huge}km");
    let error = derive(&inputs(None, Some(&distance), Some("5:00")), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let error = derive(&inputs(Some(&huge), None, Some("5:00")), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_overflowing_result_is_rejected() {
    // Finite inputs whose derived values overflow or exceed exact whole seconds
    let far = format!("1{}km", "0".repeat(300));
    let error = derive(&inputs(None, Some(&far), Some("5:00")), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let farther = format!("1{}km", "0".repeat(306));
    let error = derive(&inputs(None, Some(&farther), Some("5:00")), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_not_enough_inputs() {
    let error = derive(&inputs(None, None, Some("5:00")), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::NotEnoughInputs);

    let error = derive(&Inputs::default(), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::NotEnoughInputs);
}

#[test]
fn test_too_many_inputs() {
    let error = derive(&inputs(Some("50:00"), Some("10km"), Some("5:00")), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::TooManyInputs);
}

#[test]
fn test_zero_time_cannot_give_pace() {
    let error = derive(&inputs(Some("0"), Some("10km"), None), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_zero_distance_cannot_give_pace() {
    let error = derive(&inputs(Some("50:00"), Some("0km"), None), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_parse_errors_propagate() {
    let error = derive(&inputs(Some("soon"), Some("10km"), None), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let error = derive(&inputs(Some("50:00"), Some("10parsecs"), None), "km").unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownUnit);
}

#[test]
fn test_default_unit_only_checked_when_used() {
    // Both inputs carry explicit units, so the bad default is never consulted
    let derivation = derive(&inputs(None, Some("10km"), Some("5:00/km")), "xyz").unwrap();
    assert!((derivation.seconds - 3000.0).abs() < 1e-6);

    let error = derive(&inputs(None, Some("10"), Some("5:00/km")), "xyz").unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownUnit);
}
