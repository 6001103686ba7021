// ABOUTME: running - command-line running pace calculator
// ABOUTME: Collects pace, distance, time and flags, prints the derived result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Jonathan Löfgren
//!
//! Usage:
//! ```bash
//! # Time to run 10 km at 5:00 per km
//! running --pace 5:00 --distance 10km
//!
//! # Pace needed for a 3:30 marathon, in minutes per mile
//! running -d marathon -t 3:30:00 -u mile
//!
//! # Distance covered in 50 minutes at 4:30/km, with splits
//! running -p 4:30/km -t 50min --splits
//!
//! # Race predictions from a 45 minute 10K
//! running -d 10k -t 45:00 --predict
//! ```

use clap::Parser;
use running::config::CliConfig;
use running::formatters::OutputFormat;
use running::logging::LoggingConfig;
use running::output::{render, Request};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "running",
    version,
    about = "User-friendly running pace calculator",
    long_about = "Give any two of pace, distance and time to calculate the third. \
                  Optionally show split times and race predictions."
)]
struct Cli {
    /// Running pace, for example '5:30', '4min/mile', '3min/km', '8:00/mile' etc.
    #[arg(long, short = 'p')]
    pace: Option<String>,

    /// Running distance, for example '10k', '800m', 'marathon', '1mile' etc.
    #[arg(long, short = 'd')]
    distance: Option<String>,

    /// Running time, for example '1:35:00', '2h', '100sec' etc
    #[arg(long, short = 't')]
    time: Option<String>,

    /// Default distance unit when omitted and for result (default is kilometer).
    #[arg(long, short = 'u')]
    unit: Option<String>,

    /// Show split times at each unit interval.
    #[arg(long, short = 's')]
    splits: bool,

    /// Show predicted race times using the Riegel formula.
    #[arg(long, short = 'r')]
    predict: bool,

    /// Output format: text (default) or json
    #[arg(long)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = LoggingConfig::from_env().with_verbose(cli.verbose).init() {
        eprintln!("{error}");
    }

    let config = CliConfig::from_env();
    if let Err(error) = config.validate() {
        warn!(error = %error, "Invalid configuration");
    }

    let format = cli.format.as_deref().map_or(config.output_format, |raw| {
        OutputFormat::parse(raw).unwrap_or_else(|| {
            warn!(value = raw, "Unrecognized --format, using text");
            OutputFormat::Text
        })
    });

    let request = Request {
        time: cli.time,
        distance: cli.distance,
        pace: cli.pace,
        unit: cli.unit.unwrap_or(config.default_unit),
        splits: cli.splits,
        predict: cli.predict,
        format,
    };
    debug!(?request, "running calculation");

    print!("{}", render(&request));
}
