// ABOUTME: Assembles one calculator invocation into printable text or JSON
// ABOUTME: Errors become a one-line message plus a --help hint, never a failure exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

//! # Invocation Output
//!
//! [`render`] is the single entry point used by the command-line shell. It
//! resolves the mode, derives the missing quantity, optionally builds the
//! splits and predictions reports, and returns the complete output string.

use crate::calculator::{derive, Derivation, Inputs, ResultLine};
use crate::formatters::{format_json, OutputFormat};
use crate::reports::{generate_splits, predict_race_times, PredictionsTable, SplitsTable};
use running_core::constants::defaults::DEFAULT_UNIT;
use running_core::{AppError, AppResult};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// Hint printed after every error message
pub const HELP_HINT: &str = "See running --help for further instructions.";

/// Everything the shell collects from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Time string
    pub time: Option<String>,
    /// Distance string
    pub distance: Option<String>,
    /// Pace string
    pub pace: Option<String>,
    /// Default distance unit for input and display
    pub unit: String,
    /// Include the splits table
    pub splits: bool,
    /// Include race predictions
    pub predict: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            time: None,
            distance: None,
            pace: None,
            unit: DEFAULT_UNIT.to_owned(),
            splits: false,
            predict: false,
            format: OutputFormat::Text,
        }
    }
}

impl Request {
    /// Borrow the raw quantity strings
    #[must_use]
    pub fn inputs(&self) -> Inputs<'_> {
        Inputs {
            time: self.time.as_deref(),
            distance: self.distance.as_deref(),
            pace: self.pace.as_deref(),
        }
    }
}

/// Complete result of one successful invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Canonical values after derivation
    #[serde(flatten)]
    pub derivation: Derivation,
    /// Headline result
    pub result: ResultLine,
    /// Splits table, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splits: Option<SplitsTable>,
    /// Race predictions, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<PredictionsTable>,
}

impl Report {
    /// Render the plain-text layout, one line per row, newline-terminated
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.result.to_string()];

        if let Some(splits) = self.splits.as_ref().filter(|table| !table.is_empty()) {
            lines.push(String::new());
            lines.push("Splits:".to_owned());
            lines.extend(splits.render_rows());
        }

        if let Some(predictions) = &self.predictions {
            lines.push(String::new());
            lines.push("Race predictions:".to_owned());
            lines.extend(predictions.render_rows());
        }

        with_newline(lines.join("\n"))
    }
}

/// Derive and build every requested report for `request`
///
/// # Errors
///
/// Returns the first input-count, parse, unit, or range error encountered
pub fn build_report(request: &Request) -> AppResult<Report> {
    let unit = request.unit.as_str();
    let derivation = derive(&request.inputs(), unit)?;
    let result = ResultLine::for_derivation(&derivation, unit)?;

    let splits = request
        .splits
        .then(|| generate_splits(derivation.meters, derivation.speed, unit))
        .transpose()?;
    let predictions = request
        .predict
        .then(|| predict_race_times(derivation.meters, derivation.speed, unit))
        .transpose()?;

    Ok(Report {
        derivation,
        result,
        splits,
        predictions,
    })
}

/// Render the full output for `request` in its output format
///
/// Never fails: errors are rendered as user-facing messages.
#[must_use]
pub fn render(request: &Request) -> String {
    match build_report(request) {
        Ok(report) => match request.format {
            OutputFormat::Text => report.to_text(),
            OutputFormat::Json => format_json(&report)
                .map_or_else(|error| render_error(&error, OutputFormat::Text), with_newline),
        },
        Err(error) => {
            debug!(
                code = ?error.code,
                input_count = error.code.is_input_count(),
                message = %error.message,
                "calculation failed"
            );
            render_error(&error, request.format)
        }
    }
}

/// Render an error as a message line plus the help hint, or as a JSON object
#[must_use]
pub fn render_error(error: &AppError, format: OutputFormat) -> String {
    let text = || format!("{}\n{HELP_HINT}\n", error.message);
    match format {
        OutputFormat::Text => text(),
        OutputFormat::Json => {
            let body = json!({ "error": error, "hint": HELP_HINT });
            format_json(&body).map_or_else(|_| text(), with_newline)
        }
    }
}

fn with_newline(mut output: String) -> String {
    output.push('\n');
    output
}
