// ABOUTME: Main library entry point for the running pace calculator
// ABOUTME: Parses human quantities, derives the missing one, and renders reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

#![deny(unsafe_code)]

//! # Running
//!
//! A unit-aware running pace calculator. Given any two of pace, distance and
//! time it derives the third, and can additionally produce a splits table and
//! Riegel race predictions.
//!
//! ## Architecture
//!
//! - **parsing**: free-form strings ("5:30", "4min/mile", "marathon") to SI values
//! - **mode**: which quantity to derive from which inputs are present
//! - **calculator**: derivation arithmetic and the headline result line
//! - **formatters**: SI values back to display strings, plus JSON output
//! - **reports**: splits and race prediction tables
//! - **output**: one full invocation, from request to printable string
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust
//! use running::output::{render, Request};
//!
//! let request = Request {
//!     pace: Some("5:00".into()),
//!     distance: Some("10km".into()),
//!     ..Request::default()
//! };
//! assert_eq!(render(&request), "Elapsed time: 50:00 [H:]MM:SS\n");
//! ```

/// Quantity parsers for time, distance and pace strings
pub mod parsing;

/// Derivation mode resolution from input presence
pub mod mode;

/// Derivation arithmetic and result lines
pub mod calculator;

/// Display formatting for quantities and output formats
pub mod formatters;

/// Splits and race prediction reports
pub mod reports;

/// Full invocation rendering
pub mod output;

/// Environment-driven configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

pub use running_core::{constants, errors, units};
pub use running_core::{AppError, AppResult, ErrorCode, Meters, MetersPerSecond, Seconds};
