// ABOUTME: Configuration module for the running pace calculator
// ABOUTME: Environment-only configuration; command line flags override it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren

/// Environment-based defaults for the command-line shell
pub mod environment;

pub use environment::CliConfig;
