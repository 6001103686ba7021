// ABOUTME: Named paces derived from well-known record performances
// ABOUTME: A pace name maps directly to a speed in meters per second
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use super::units::{HOUR, MARATHON_METERS, MINUTE};
use crate::units::MetersPerSecond;

/// Eliud Kipchoge, marathon world record (Berlin 2022, 2:01:09)
pub const KIPCHOGE: MetersPerSecond = MARATHON_METERS / (2.0 * HOUR + 1.0 * MINUTE + 9.0);

/// Kelvin Kiptum, marathon world record (Chicago 2023, 2:00:35)
pub const KIPTUM: MetersPerSecond = MARATHON_METERS / (2.0 * HOUR + 35.0);

/// Usain Bolt, 100 m world record (Berlin 2009, 9.58 s)
pub const BOLT: MetersPerSecond = 100.0 / 9.58;

/// Pace names accepted by the pace parser
pub const NAMED_PACES: &[(&str, MetersPerSecond)] =
    &[("kipchoge", KIPCHOGE), ("kiptum", KIPTUM), ("bolt", BOLT)];

/// Speed of the named pace, if `name` is one
#[must_use]
pub fn named_pace(name: &str) -> Option<MetersPerSecond> {
    NAMED_PACES
        .iter()
        .find_map(|&(alias, speed)| (alias == name).then_some(speed))
}
