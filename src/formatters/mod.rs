// ABOUTME: Output format abstraction and quantity display formatting
// ABOUTME: Supports plain text (default) and JSON rendering of calculator reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

//! Output Format Abstraction Layer
//!
//! Quantity formatters ([`format_seconds`], [`format_distance`],
//! [`format_pace`], [`format_split_label`]) turn canonical SI values into
//! display strings. [`OutputFormat`] selects whether a whole report is
//! rendered as aligned plain text or as JSON.
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, the human-readable terminal layout
//! - **JSON**: Machine-readable report for scripting

/// Seconds, distances, paces and split labels to display strings
pub mod quantity;

pub use quantity::{format_distance, format_pace, format_seconds, format_split_label};

use running_core::AppResult;
use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `None` for unrecognized values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize `data` as pretty-printed JSON
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if serialization fails
pub fn format_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
