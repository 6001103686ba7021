// ABOUTME: Race time predictions for standard distances using the Riegel formula
// ABOUTME: T2 = T1 x (D2 / D1)^1.06, with the implied pace for each race
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use super::column_width;
use crate::formatters::{format_pace, format_seconds};
use running_core::constants::limits::MAX_SECONDS;
use running_core::constants::races::{RACE_DISTANCES, RIEGEL_EXPONENT};
use running_core::{AppError, AppResult, Meters, MetersPerSecond, Seconds};
use serde::Serialize;

/// Predicted result for one race distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    /// Race label, e.g. "Half-marathon"
    pub race: &'static str,
    /// Race distance
    pub meters: Meters,
    /// Predicted finishing time
    pub seconds: Seconds,
    /// Formatted predicted time
    pub time: String,
    /// Formatted pace per display unit
    pub pace: String,
}

/// Predictions for every standard race, shortest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionsTable {
    /// Distance unit paces are shown in
    pub unit: String,
    /// One row per race distance
    pub rows: Vec<PredictionRow>,
}

impl PredictionsTable {
    /// Render each row with race labels and times right-aligned to common widths
    #[must_use]
    pub fn render_rows(&self) -> Vec<String> {
        let label_width = column_width(&self.rows, |row| row.race.len());
        let time_width = column_width(&self.rows, |row| row.time.len());
        self.rows
            .iter()
            .map(|row| {
                format!(
                    "  {:>label_width$}  {:>time_width$}   ({} /{})",
                    row.race, row.time, row.pace, self.unit
                )
            })
            .collect()
    }
}

/// Predict race time using Riegel formula
///
/// Riegel's formula: Time2 = Time1 × (Distance2 / Distance1)^1.06
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` if any distance or time is non-positive,
/// or if the predicted time overflows
pub fn predict_time_riegel(
    known_distance: Meters,
    known_time: Seconds,
    target_distance: Meters,
) -> AppResult<Seconds> {
    if known_distance <= 0.0 || known_time <= 0.0 || target_distance <= 0.0 {
        return Err(AppError::out_of_range(
            "Predictions need a positive distance and time",
        ));
    }

    let distance_ratio = target_distance / known_distance;
    let predicted = known_time * distance_ratio.powf(RIEGEL_EXPONENT);
    if !predicted.is_finite() || predicted > MAX_SECONDS {
        return Err(AppError::out_of_range("Predicted time is too large to display"));
    }
    Ok(predicted)
}

/// Predict times for all standard races from `meters` covered at `speed`
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` for a non-positive distance or speed
/// and `ErrorCode::UnknownUnit` if `unit` is not a distance unit
pub fn predict_race_times(
    meters: Meters,
    speed: MetersPerSecond,
    unit: &str,
) -> AppResult<PredictionsTable> {
    if !(speed.is_finite() && speed > 0.0) {
        return Err(AppError::out_of_range("Speed must be greater than zero"));
    }
    let elapsed = meters / speed;

    let rows = RACE_DISTANCES
        .iter()
        .map(|race| -> AppResult<PredictionRow> {
            let predicted = predict_time_riegel(meters, elapsed, race.meters)?;
            Ok(PredictionRow {
                race: race.label,
                meters: race.meters,
                seconds: predicted,
                time: format_seconds(predicted),
                pace: format_pace(race.meters / predicted, unit)?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(PredictionsTable {
        unit: unit.to_owned(),
        rows,
    })
}
