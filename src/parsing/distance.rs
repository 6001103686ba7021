// ABOUTME: Distance parser converting named and unit-suffixed strings to meters
// ABOUTME: A bare number takes the caller's default unit; "marathon" alone is one marathon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use super::lexical::extract_num_and_unit;
use running_core::constants::distance_factor;
use running_core::{AppError, AppResult, Meters};
use tracing::debug;

/// How a distance string is written
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceNotation {
    /// The whole string is a distance alias, meaning one of that unit
    UnitName(Meters),
    /// `<number><optional-unit>`, unit defaulting to the caller's default
    Quantity,
}

impl DistanceNotation {
    /// Classify `input`, checking unit names first
    #[must_use]
    pub fn detect(input: &str) -> Self {
        distance_factor(input).map_or(Self::Quantity, Self::UnitName)
    }
}

/// Parse a distance string into meters
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` for malformed quantities and
/// `ErrorCode::UnknownUnit` when the written or default unit is not a
/// distance unit
pub fn parse_distance(input: &str, default_unit: &str) -> AppResult<Meters> {
    let notation = DistanceNotation::detect(input);
    debug!(input, default_unit, ?notation, "parsing distance");

    match notation {
        DistanceNotation::UnitName(meters) => Ok(meters),
        DistanceNotation::Quantity => {
            let quantity = extract_num_and_unit(input)?;
            let unit = quantity.unit_or(default_unit);
            let factor = distance_factor(unit).ok_or_else(|| AppError::unknown_unit(unit))?;
            Ok(quantity.magnitude * factor)
        }
    }
}
