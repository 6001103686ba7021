// ABOUTME: Race distances and Riegel formula constants for time predictions
// ABOUTME: Races are listed in ascending distance order with fixed display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use super::units::{HALF_MARATHON_METERS, MARATHON_METERS, METERS_PER_MILE};
use crate::units::Meters;

/// Riegel formula exponent (typical value for running)
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// A race distance shown in the predictions table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceDistance {
    /// Display label
    pub label: &'static str,
    /// Race length
    pub meters: Meters,
}

impl RaceDistance {
    const fn new(label: &'static str, meters: Meters) -> Self {
        Self { label, meters }
    }
}

/// Standard race distances, shortest first
pub const RACE_DISTANCES: &[RaceDistance] = &[
    RaceDistance::new("1500m", 1_500.0),
    RaceDistance::new("1 mile", METERS_PER_MILE),
    RaceDistance::new("5K", 5_000.0),
    RaceDistance::new("10K", 10_000.0),
    RaceDistance::new("Half-marathon", HALF_MARATHON_METERS),
    RaceDistance::new("Marathon", MARATHON_METERS),
];
