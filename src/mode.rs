// ABOUTME: Mode resolver deciding which quantity to derive from the inputs present
// ABOUTME: Five-way closed enumeration including the two input-count error modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

use running_core::AppError;
use serde::Serialize;
use std::fmt;

/// What the calculator should do with the given inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Distance and time given: derive the pace
    Pace,
    /// Time and pace given: derive the distance
    Distance,
    /// Distance and pace given: derive the time
    Time,
    /// Fewer than two inputs given
    NotEnough,
    /// All three inputs given
    TooMany,
}

impl Mode {
    /// Resolve the mode from which of time, distance and pace are present
    #[must_use]
    pub const fn from_presence(time: bool, distance: bool, pace: bool) -> Self {
        match (time, distance, pace) {
            (true, true, true) => Self::TooMany,
            (true, false, true) => Self::Distance,
            (false, true, true) => Self::Time,
            (true, true, false) => Self::Pace,
            (true, false, false)
            | (false, true, false)
            | (false, false, true)
            | (false, false, false) => Self::NotEnough,
        }
    }

    /// The input-count error for the error modes
    #[must_use]
    pub fn error(&self) -> Option<AppError> {
        match self {
            Self::NotEnough => Some(AppError::not_enough_inputs()),
            Self::TooMany => Some(AppError::too_many_inputs()),
            Self::Pace | Self::Distance | Self::Time => None,
        }
    }

    /// The mode name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::Distance => "distance",
            Self::Time => "time",
            Self::NotEnough => "not_enough",
            Self::TooMany => "too_many",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the mode from the presence (not the value) of each input
#[must_use]
pub const fn identify_mode(time: Option<&str>, distance: Option<&str>, pace: Option<&str>) -> Mode {
    Mode::from_presence(time.is_some(), distance.is_some(), pace.is_some())
}
