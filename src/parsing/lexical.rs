// ABOUTME: Lexical unit parser splitting "10km" into a magnitude and a unit suffix
// ABOUTME: The whole input must match <number><optional-unit>; signs and exponents are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use regex::Regex;
use running_core::{AppError, AppResult};
use std::sync::LazyLock;

/// Unsigned integer or decimal, followed by word characters and hyphens.
/// Stored as Option to handle compilation failures gracefully.
static QUANTITY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d*\.\d+|\d+)([\w-]*)$").ok());

/// A magnitude with the unit suffix it was written with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<'a> {
    /// Non-negative magnitude
    pub magnitude: f64,
    /// Unit suffix, empty when none was written
    pub unit: &'a str,
}

impl<'a> Quantity<'a> {
    /// The written unit, or `default` when no suffix was given
    #[must_use]
    pub fn unit_or(&self, default: &'a str) -> &'a str {
        if self.unit.is_empty() {
            default
        } else {
            self.unit
        }
    }
}

/// Split `input` into a numeric magnitude and a trailing unit suffix
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if `input` is not exactly
/// `<number><optional-unit>`
pub fn extract_num_and_unit(input: &str) -> AppResult<Quantity<'_>> {
    let invalid = || AppError::invalid_format(format!("Invalid quantity '{input}'"));

    let pattern = QUANTITY_PATTERN
        .as_ref()
        .ok_or_else(|| AppError::invalid_format("Quantity pattern is unavailable"))?;
    let captures = pattern.captures(input).ok_or_else(invalid)?;

    let magnitude = captures
        .get(1)
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(invalid)?;
    let unit = captures.get(2).map_or("", |suffix| suffix.as_str());

    Ok(Quantity { magnitude, unit })
}
