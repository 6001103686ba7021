// ABOUTME: Derived reports built on the canonical distance/time/speed triple
// ABOUTME: Splits table at whole-unit milestones and Riegel race time predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

/// Cumulative time at each whole-unit milestone
pub mod splits;

/// Riegel formula race predictions
pub mod predictions;

pub use predictions::{predict_race_times, predict_time_riegel, PredictionRow, PredictionsTable};
pub use splits::{generate_splits, SplitRow, SplitsTable};

/// Width of the widest string produced by `width_of` over `items`
fn column_width<T>(items: &[T], width_of: impl Fn(&T) -> usize) -> usize {
    items.iter().map(width_of).max().unwrap_or(0)
}
