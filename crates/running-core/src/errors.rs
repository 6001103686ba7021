// ABOUTME: Unified error type and error codes for parsing and derivation failures
// ABOUTME: Every fallible calculator operation returns AppResult with one of these codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

//! # Unified Error Handling
//!
//! The calculator never panics on user input. Input-count problems, malformed
//! quantities, unknown units, and degenerate values all surface as an
//! [`AppError`] carrying a stable [`ErrorCode`] and a user-facing message.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Fewer than two of time, distance and pace were given
    NotEnoughInputs,
    /// All three of time, distance and pace were given
    TooManyInputs,
    /// Input did not match any accepted notation
    InvalidFormat,
    /// Unit suffix or default unit is not in the relevant table
    UnknownUnit,
    /// Value parsed but cannot be used (zero time in a pace, etc.)
    ValueOutOfRange,
    /// Environment configuration is invalid
    ConfigInvalid,
    /// JSON rendering failed
    SerializationError,
}

impl ErrorCode {
    /// Get a short description of this error class
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NotEnoughInputs => "Not enough inputs to derive a result",
            Self::TooManyInputs => "Too many inputs to derive a result",
            Self::InvalidFormat => "The input could not be parsed",
            Self::UnknownUnit => "The unit is not recognized",
            Self::ValueOutOfRange => "The value is outside the usable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Output serialization failed",
        }
    }

    /// Whether this error comes from the input-count check rather than parsing
    #[must_use]
    pub const fn is_input_count(&self) -> bool {
        matches!(self, Self::NotEnoughInputs | Self::TooManyInputs)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the calculator
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Fewer than two quantities were provided
    #[must_use]
    pub fn not_enough_inputs() -> Self {
        Self::new(
            ErrorCode::NotEnoughInputs,
            "You need to give at least two of time, distance or pace.",
        )
    }

    /// Time, distance and pace were all provided
    #[must_use]
    pub fn too_many_inputs() -> Self {
        Self::new(
            ErrorCode::TooManyInputs,
            "You provided time, distance and pace. Try omitting one.",
        )
    }

    /// Input string does not match the expected notation
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Unit alias missing from the relevant table
    #[must_use]
    pub fn unknown_unit(unit: &str) -> Self {
        Self::new(ErrorCode::UnknownUnit, format!("Unknown unit '{unit}'"))
    }

    /// Value is parseable but unusable
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
