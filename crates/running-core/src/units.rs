// ABOUTME: Canonical SI quantity aliases used across the calculator
// ABOUTME: Distances are meters, durations are seconds, speeds are meters per second
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

/// A distance, always stored in meters
pub type Meters = f64;

/// A duration, always stored in seconds
pub type Seconds = f64;

/// A speed in meters per second
pub type MetersPerSecond = f64;
