// ABOUTME: Display formatting for seconds, distances, paces and split labels
// ABOUTME: Renders canonical SI values in a requested distance unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use running_core::constants::distance_factor;
use running_core::constants::limits::MAX_SECONDS;
use running_core::{AppError, AppResult, Meters, MetersPerSecond, Seconds};

/// Format a duration as `H:MM:SS`, or `MM:SS` below one hour
///
/// Rounds to the nearest whole second (ties to even) before splitting, so
/// 59.6 s renders as `01:00`.
#[must_use]
pub fn format_seconds(seconds: Seconds) -> String {
    let total = seconds.round_ties_even() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format a distance in `unit` with two decimals
///
/// # Errors
///
/// Returns `ErrorCode::UnknownUnit` if `unit` is not a distance unit
pub fn format_distance(meters: Meters, unit: &str) -> AppResult<String> {
    let factor = distance_factor(unit).ok_or_else(|| AppError::unknown_unit(unit))?;
    Ok(format!("{:.2}", meters / factor))
}

/// Format a speed as the time needed to cover one `unit`
///
/// # Errors
///
/// Returns `ErrorCode::UnknownUnit` if `unit` is not a distance unit and
/// `ErrorCode::ValueOutOfRange` if `speed` is not positive or too slow to display
pub fn format_pace(speed: MetersPerSecond, unit: &str) -> AppResult<String> {
    let factor = distance_factor(unit).ok_or_else(|| AppError::unknown_unit(unit))?;
    if !(speed.is_finite() && speed > 0.0) {
        return Err(AppError::out_of_range("Speed must be greater than zero"));
    }
    let seconds_per_unit = factor / speed;
    if seconds_per_unit > MAX_SECONDS {
        return Err(AppError::out_of_range("Pace is too slow to display"));
    }
    Ok(format_seconds(seconds_per_unit))
}

/// Format a cumulative unit count for the splits table
///
/// Whole numbers render bare ("42"); others keep at most three decimals with
/// trailing zeros and a trailing point stripped ("42.195", "1.5").
#[must_use]
pub fn format_split_label(distance_units: f64) -> String {
    if distance_units.fract() == 0.0 {
        return format!("{distance_units:.0}");
    }
    let fixed = format!("{distance_units:.3}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}
