// ABOUTME: Environment configuration for command-line defaults
// ABOUTME: Reads the default distance unit and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

//! Environment-based configuration for the command-line shell

use crate::formatters::OutputFormat;
use running_core::constants::{defaults, distance_factor, env_config};
use running_core::{AppError, AppResult};
use std::env;
use tracing::warn;

/// Defaults the shell applies when a flag is not given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default distance unit for `--unit`
    pub default_unit: String,
    /// Default output format for `--format`
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_unit: defaults::DEFAULT_UNIT.to_owned(),
            output_format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Testable core of [`CliConfig::from_env`]: read values through `lookup`
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_unit = lookup(env_config::DEFAULT_UNIT)
            .map(|unit| unit.trim().to_owned())
            .filter(|unit| !unit.is_empty())
            .unwrap_or_else(|| defaults::DEFAULT_UNIT.to_owned());

        let output_format = lookup(env_config::OUTPUT_FORMAT).map_or(OutputFormat::Text, |raw| {
            OutputFormat::parse(&raw).unwrap_or_else(|| {
                warn!(
                    variable = env_config::OUTPUT_FORMAT,
                    value = %raw,
                    "Ignoring unrecognized output format, using text"
                );
                OutputFormat::Text
            })
        });

        Self {
            default_unit,
            output_format,
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the default unit is not a distance unit
    pub fn validate(&self) -> AppResult<()> {
        if distance_factor(&self.default_unit).is_none() {
            return Err(AppError::config(format!(
                "{} is set to unknown unit '{}'",
                env_config::DEFAULT_UNIT,
                self.default_unit
            )));
        }
        Ok(())
    }
}
