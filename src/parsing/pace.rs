// ABOUTME: Pace parser converting named, time-per-distance, and bare-time strings to speed
// ABOUTME: "5:00/km" and "6min/mile" split on the slash; "5:00" means per one default unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use super::distance::parse_distance;
use super::time::parse_time;
use running_core::constants::distance_factor;
use running_core::constants::paces::named_pace;
use running_core::{AppError, AppResult, Meters, MetersPerSecond, Seconds};
use tracing::debug;

/// How a pace string is written
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaceNotation<'a> {
    /// A named pace such as "kipchoge"
    Named(MetersPerSecond),
    /// `<time>/<distance>`
    TimePerDistance {
        /// Time part, parsed as a time string
        time: &'a str,
        /// Distance part, parsed as a distance string
        distance: &'a str,
    },
    /// A time string covering one default distance unit
    TimePerDefaultUnit,
}

impl<'a> PaceNotation<'a> {
    /// Classify `input`, checking pace names first, then the slash form
    #[must_use]
    pub fn detect(input: &'a str) -> Self {
        if let Some(speed) = named_pace(input) {
            Self::Named(speed)
        } else if let Some((time, distance)) = input.split_once('/') {
            Self::TimePerDistance { time, distance }
        } else {
            Self::TimePerDefaultUnit
        }
    }
}

/// Parse a pace string into meters per second
///
/// # Errors
///
/// Returns the time or distance parser's error for either part,
/// `ErrorCode::InvalidFormat` for more than one slash, and
/// `ErrorCode::ValueOutOfRange` when the time or distance part is zero
pub fn parse_pace(input: &str, default_unit: &str) -> AppResult<MetersPerSecond> {
    let notation = PaceNotation::detect(input);
    debug!(input, default_unit, ?notation, "parsing pace");

    let (seconds, meters) = match notation {
        PaceNotation::Named(speed) => return Ok(speed),
        PaceNotation::TimePerDistance { time, distance } => {
            if distance.contains('/') {
                return Err(AppError::invalid_format(format!(
                    "Invalid pace '{input}', expected TIME/DISTANCE"
                )));
            }
            (parse_time(time)?, parse_distance(distance, default_unit)?)
        }
        PaceNotation::TimePerDefaultUnit => {
            let meters = distance_factor(default_unit)
                .ok_or_else(|| AppError::unknown_unit(default_unit))?;
            (parse_time(input)?, meters)
        }
    };

    speed_from(meters, seconds)
}

fn speed_from(meters: Meters, seconds: Seconds) -> AppResult<MetersPerSecond> {
    if seconds <= 0.0 {
        return Err(AppError::out_of_range(
            "Pace time must be greater than zero",
        ));
    }
    if meters <= 0.0 {
        return Err(AppError::out_of_range(
            "Pace distance must be greater than zero",
        ));
    }
    Ok(meters / seconds)
}
