// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Static unit tables, named paces, and race prediction constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

//! Constants module
//!
//! Every table here is a static literal, immutable for the life of the process.
//! Lookups are total over their domain: an alias that is not listed yields
//! `None`, never a fallback value.

/// Distance and time unit alias tables
pub mod units;

/// Named paces of famous performances
pub mod paces;

/// Race distances and the Riegel model used for predictions
pub mod races;

pub use units::{distance_factor, time_factor, DISTANCE_UNITS, TIME_UNITS};

/// CLI defaults
pub mod defaults {
    /// Default distance unit when none is given
    pub const DEFAULT_UNIT: &str = "km";
    /// Time unit applied to a bare number
    pub const DEFAULT_TIME_UNIT: &str = "s";
    /// Log level when none is configured
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

/// Environment variable names read by the command-line shell
pub mod env_config {
    /// Default distance unit when `--unit` is not given
    pub const DEFAULT_UNIT: &str = "RUNNING_DEFAULT_UNIT";
    /// Output format when `--format` is not given (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "RUNNING_OUTPUT_FORMAT";
    /// Log filter directive
    pub const LOG_LEVEL: &str = "RUST_LOG";
    /// Log line format (`pretty`, `compact`, `json`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Split table limits
pub mod splits {
    /// Remainder below this many units is treated as floating point noise
    pub const REMAINDER_EPSILON: f64 = 1e-9;
    /// Upper bound on rows in one splits table
    pub const MAX_SPLIT_ROWS: usize = 100_000;
}

/// Bounds on values that can be displayed
pub mod limits {
    use crate::units::Seconds;

    /// Largest duration whose whole seconds are exact in an `f64` (2^53)
    pub const MAX_SECONDS: Seconds = 9_007_199_254_740_992.0;
}
