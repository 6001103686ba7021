// ABOUTME: Unit alias tables mapping distance and time names to SI scale factors
// ABOUTME: Aliases are many-to-one and case-sensitive; unknown aliases resolve to None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use crate::units::{Meters, Seconds};

/// Meters in one international foot
pub const METERS_PER_FOOT: Meters = 0.3048;

/// Meters in one yard
pub const METERS_PER_YARD: Meters = 0.9144;

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: Meters = 1000.0;

/// Meters in one statute mile
pub const METERS_PER_MILE: Meters = 1609.344;

/// Official marathon distance in meters
pub const MARATHON_METERS: Meters = 42_195.0;

/// Half marathon distance in meters
pub const HALF_MARATHON_METERS: Meters = MARATHON_METERS / 2.0;

/// Seconds per second
pub const SECOND: Seconds = 1.0;

/// Seconds per minute
pub const MINUTE: Seconds = 60.0;

/// Seconds per hour
pub const HOUR: Seconds = 60.0 * MINUTE;

/// Seconds per day
pub const DAY: Seconds = 24.0 * HOUR;

/// Seconds per week
pub const WEEK: Seconds = 7.0 * DAY;

/// Distance aliases and their size in meters
pub const DISTANCE_UNITS: &[(&str, Meters)] = &[
    ("feet", METERS_PER_FOOT),
    ("foot", METERS_PER_FOOT),
    ("yard", METERS_PER_YARD),
    ("yards", METERS_PER_YARD),
    ("m", 1.0),
    ("meter", 1.0),
    ("meters", 1.0),
    ("k", METERS_PER_KM),
    ("km", METERS_PER_KM),
    ("kilometer", METERS_PER_KM),
    ("mile", METERS_PER_MILE),
    ("miles", METERS_PER_MILE),
    ("marathon", MARATHON_METERS),
    ("half", HALF_MARATHON_METERS),
    ("half-marathon", HALF_MARATHON_METERS),
];

/// Time aliases and their length in seconds
pub const TIME_UNITS: &[(&str, Seconds)] = &[
    ("s", SECOND),
    ("sec", SECOND),
    ("secs", SECOND),
    ("second", SECOND),
    ("seconds", SECOND),
    ("m", MINUTE),
    ("min", MINUTE),
    ("mins", MINUTE),
    ("minute", MINUTE),
    ("minutes", MINUTE),
    ("h", HOUR),
    ("hour", HOUR),
    ("hours", HOUR),
    ("d", DAY),
    ("day", DAY),
    ("days", DAY),
    ("w", WEEK),
    ("week", WEEK),
    ("weeks", WEEK),
];

fn lookup(table: &[(&str, f64)], alias: &str) -> Option<f64> {
    table
        .iter()
        .find_map(|&(name, factor)| (name == alias).then_some(factor))
}

/// Meters in one unit of `alias`, if it is a known distance unit
#[must_use]
pub fn distance_factor(alias: &str) -> Option<Meters> {
    lookup(DISTANCE_UNITS, alias)
}

/// Seconds in one unit of `alias`, if it is a known time unit
#[must_use]
pub fn time_factor(alias: &str) -> Option<Seconds> {
    lookup(TIME_UNITS, alias)
}
