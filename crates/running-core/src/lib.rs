// ABOUTME: Core types and constants for the running pace calculator
// ABOUTME: Foundation crate with error handling, canonical quantities, and unit tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

#![deny(unsafe_code)]

//! # Running Core
//!
//! Foundation crate shared by the parser, formatter, and report layers of the
//! pace calculator. Everything here is immutable data or plain value types.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `AppResult` alias
//! - **constants**: distance/time unit tables, named paces, race distances
//! - **units**: canonical SI quantity aliases

/// Unified error handling with stable error codes
pub mod errors;

/// Static unit tables and calculator constants
pub mod constants;

/// Canonical quantity types (meters, seconds, meters per second)
pub mod units;

pub use errors::{AppError, AppResult, ErrorCode};
pub use units::{Meters, MetersPerSecond, Seconds};
