// ABOUTME: Time parser converting clock, unit-name, and unit-suffixed strings to seconds
// ABOUTME: Supports "2:30", "1:35:00", "2:30.5", "hour", "2h", "100sec" and bare seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use super::lexical::extract_num_and_unit;
use running_core::constants::defaults::DEFAULT_TIME_UNIT;
use running_core::constants::units::{HOUR, MINUTE, SECOND};
use running_core::constants::time_factor;
use running_core::{AppError, AppResult, Seconds};
use tracing::debug;

/// Place values of clock components, rightmost first
const CLOCK_PLACES: [Seconds; 3] = [SECOND, MINUTE, HOUR];

/// How a time string is written
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeNotation {
    /// The whole string is a time unit alias, meaning one of that unit
    UnitName(Seconds),
    /// Colon-delimited `MM:SS` or `H:MM:SS`
    Clock,
    /// `<number><optional-unit>`, unit defaulting to seconds
    Quantity,
}

impl TimeNotation {
    /// Classify `input`, checking unit names first, then clock notation
    #[must_use]
    pub fn detect(input: &str) -> Self {
        if let Some(seconds) = time_factor(input) {
            Self::UnitName(seconds)
        } else if input.contains(':') {
            Self::Clock
        } else {
            Self::Quantity
        }
    }
}

/// Parse a time string into seconds
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` for malformed clock or quantity strings
/// and `ErrorCode::UnknownUnit` for an unrecognized unit suffix
pub fn parse_time(input: &str) -> AppResult<Seconds> {
    let notation = TimeNotation::detect(input);
    debug!(input, ?notation, "parsing time");

    match notation {
        TimeNotation::UnitName(seconds) => Ok(seconds),
        TimeNotation::Clock => parse_clock(input),
        TimeNotation::Quantity => {
            let quantity = extract_num_and_unit(input)?;
            let unit = quantity.unit_or(DEFAULT_TIME_UNIT);
            let factor = time_factor(unit).ok_or_else(|| AppError::unknown_unit(unit))?;
            Ok(quantity.magnitude * factor)
        }
    }
}

fn parse_clock(input: &str) -> AppResult<Seconds> {
    let invalid = || {
        AppError::invalid_format(format!(
            "Invalid clock time '{input}', expected MM:SS or H:MM:SS"
        ))
    };

    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() > CLOCK_PLACES.len() {
        return Err(invalid());
    }

    parts
        .iter()
        .rev()
        .zip(CLOCK_PLACES)
        .try_fold(0.0, |total: Seconds, (part, place)| -> AppResult<Seconds> {
            let value = parse_clock_part(part).ok_or_else(invalid)?;
            Ok(value.mul_add(place, total))
        })
}

fn parse_clock_part(part: &str) -> Option<f64> {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
