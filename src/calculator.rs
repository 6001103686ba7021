// ABOUTME: Derivation arithmetic computing the missing quantity from the two given
// ABOUTME: Produces the canonical meters/seconds/speed triple and the headline result line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use crate::formatters::{format_distance, format_pace, format_seconds};
use crate::mode::{identify_mode, Mode};
use crate::parsing::{parse_distance, parse_pace, parse_time};
use running_core::constants::limits::MAX_SECONDS;
use running_core::{AppError, AppResult, Meters, MetersPerSecond, Seconds};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Raw quantity strings as typed by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inputs<'a> {
    /// Time string, e.g. "1:35:00"
    pub time: Option<&'a str>,
    /// Distance string, e.g. "10k"
    pub distance: Option<&'a str>,
    /// Pace string, e.g. "5:00/km"
    pub pace: Option<&'a str>,
}

impl Inputs<'_> {
    /// The derivation mode for these inputs
    #[must_use]
    pub const fn mode(&self) -> Mode {
        identify_mode(self.time, self.distance, self.pace)
    }
}

/// The canonical triple after deriving the missing quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Derivation {
    /// Which quantity was derived
    pub mode: Mode,
    /// Distance in meters
    pub meters: Meters,
    /// Elapsed time in seconds
    pub seconds: Seconds,
    /// Speed in meters per second
    pub speed: MetersPerSecond,
}

/// Parse the two given inputs and derive the third
///
/// # Errors
///
/// Returns the input-count error for the error modes, any parser error, and
/// `ErrorCode::ValueOutOfRange` when deriving a pace from a zero time or
/// zero distance, or when a derived value overflows
pub fn derive(inputs: &Inputs<'_>, unit: &str) -> AppResult<Derivation> {
    let mode = inputs.mode();

    let derivation = match (mode, inputs.time, inputs.distance, inputs.pace) {
        (Mode::Pace, Some(time), Some(distance), None) => {
            let seconds = parse_time(time)?;
            let meters = parse_distance(distance, unit)?;
            if seconds <= 0.0 {
                return Err(AppError::out_of_range("Time must be greater than zero"));
            }
            if meters <= 0.0 {
                return Err(AppError::out_of_range("Distance must be greater than zero"));
            }
            Derivation {
                mode,
                meters,
                seconds,
                speed: meters / seconds,
            }
        }
        (Mode::Distance, Some(time), None, Some(pace)) => {
            let speed = parse_pace(pace, unit)?;
            let seconds = parse_time(time)?;
            Derivation {
                mode,
                meters: speed * seconds,
                seconds,
                speed,
            }
        }
        (Mode::Time, None, Some(distance), Some(pace)) => {
            let speed = parse_pace(pace, unit)?;
            let meters = parse_distance(distance, unit)?;
            Derivation {
                mode,
                meters,
                seconds: meters / speed,
                speed,
            }
        }
        _ => return Err(mode.error().unwrap_or_else(AppError::not_enough_inputs)),
    };
    ensure_displayable(&derivation)?;

    debug!(
        mode = %derivation.mode,
        meters = derivation.meters,
        seconds = derivation.seconds,
        speed = derivation.speed,
        "derived quantities"
    );
    Ok(derivation)
}

// All three values finite, seconds small enough to format exactly
fn ensure_displayable(derivation: &Derivation) -> AppResult<()> {
    let finite = derivation.meters.is_finite()
        && derivation.seconds.is_finite()
        && derivation.speed.is_finite();
    if !finite || derivation.seconds > MAX_SECONDS {
        return Err(AppError::out_of_range(
            "Result is too large to display, try smaller inputs",
        ));
    }
    Ok(())
}

/// Headline output line, e.g. `Required pace: 05:00 /km`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLine {
    /// Leading label
    pub label: &'static str,
    /// Formatted value
    pub value: String,
    /// Unit suffix
    pub suffix: String,
}

impl ResultLine {
    /// Build the result line for a derivation, displayed in `unit`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::UnknownUnit` if `unit` is needed and unknown
    pub fn for_derivation(derivation: &Derivation, unit: &str) -> AppResult<Self> {
        let (label, value, suffix) = match derivation.mode {
            Mode::Pace => (
                "Required pace:",
                format_pace(derivation.speed, unit)?,
                format!("/{unit}"),
            ),
            Mode::Distance => (
                "Travelled distance:",
                format_distance(derivation.meters, unit)?,
                unit.to_owned(),
            ),
            Mode::Time => (
                "Elapsed time:",
                format_seconds(derivation.seconds),
                "[H:]MM:SS".to_owned(),
            ),
            Mode::NotEnough => return Err(AppError::not_enough_inputs()),
            Mode::TooMany => return Err(AppError::too_many_inputs()),
        };
        Ok(Self {
            label,
            value,
            suffix,
        })
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.label, self.value, self.suffix)
    }
}
