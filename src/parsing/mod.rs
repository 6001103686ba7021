// ABOUTME: Quantity parsers turning free-form strings into canonical SI values
// ABOUTME: Each parser detects a notation first, then dispatches on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

//! # Quantity Parsing
//!
//! Inputs are classified into a small closed set of notations per quantity,
//! checked in a fixed priority order (named match, then composite forms, then
//! `<number><unit>`). Classification and evaluation are separate steps so the
//! precedence can be tested on its own.

/// `<number><unit>` splitting
pub mod lexical;

/// Time strings to seconds
pub mod time;

/// Distance strings to meters
pub mod distance;

/// Pace strings to meters per second
pub mod pace;

pub use distance::{parse_distance, DistanceNotation};
pub use lexical::{extract_num_and_unit, Quantity};
pub use pace::{parse_pace, PaceNotation};
pub use time::{parse_time, TimeNotation};
