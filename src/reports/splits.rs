// ABOUTME: Splits generator emitting cumulative elapsed time per whole distance unit
// ABOUTME: Appends a final partial row when the distance is not a whole number of units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use super::column_width;
use crate::formatters::{format_seconds, format_split_label};
use running_core::constants::distance_factor;
use running_core::constants::splits::{MAX_SPLIT_ROWS, REMAINDER_EPSILON};
use running_core::{AppError, AppResult, Meters, MetersPerSecond};
use serde::Serialize;

/// One milestone in the splits table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRow {
    /// Cumulative distance in units ("1", "2", ..., "42.195")
    pub label: String,
    /// Cumulative elapsed time at this milestone
    pub elapsed: String,
}

/// Splits for a run, in the unit they were generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitsTable {
    /// Distance unit of each interval
    pub unit: String,
    /// Rows in increasing distance order
    pub rows: Vec<SplitRow>,
}

impl SplitsTable {
    /// Whether there is nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render each row with labels right-aligned to a common width
    #[must_use]
    pub fn render_rows(&self) -> Vec<String> {
        let width = column_width(&self.rows, |row| row.label.len());
        self.rows
            .iter()
            .map(|row| format!("  {:>width$} {}  {}", row.label, self.unit, row.elapsed))
            .collect()
    }
}

/// Generate the splits table for `meters` run at `speed`, one row per `unit`
///
/// # Errors
///
/// Returns `ErrorCode::UnknownUnit` if `unit` is not a distance unit, and
/// `ErrorCode::ValueOutOfRange` for a non-positive speed or a table longer
/// than the row limit
pub fn generate_splits(
    meters: Meters,
    speed: MetersPerSecond,
    unit: &str,
) -> AppResult<SplitsTable> {
    let interval = distance_factor(unit).ok_or_else(|| AppError::unknown_unit(unit))?;
    if !(speed.is_finite() && speed > 0.0) {
        return Err(AppError::out_of_range("Speed must be greater than zero"));
    }

    let total_units = meters / interval;
    let whole = total_units.floor();
    let has_partial = total_units - whole > REMAINDER_EPSILON;
    let row_count = whole + f64::from(u8::from(has_partial));
    if !row_count.is_finite() || row_count > MAX_SPLIT_ROWS as f64 {
        return Err(AppError::out_of_range(format!(
            "Too many splits, at most {MAX_SPLIT_ROWS} rows can be shown"
        )));
    }
    let full_intervals = whole as usize;

    let mut rows: Vec<SplitRow> = (1..=full_intervals)
        .map(|index| SplitRow {
            label: index.to_string(),
            elapsed: format_seconds(index as f64 * interval / speed),
        })
        .collect();

    if has_partial {
        rows.push(SplitRow {
            label: format_split_label(total_units),
            elapsed: format_seconds(meters / speed),
        });
    }

    Ok(SplitsTable {
        unit: unit.to_owned(),
        rows,
    })
}
