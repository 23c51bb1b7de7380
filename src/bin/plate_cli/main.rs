// ABOUTME: plate-cli - command-line front end for the plate calculator
// ABOUTME: Solves barbell loads and lists the plate and barbell catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Load 100 kg on an Olympic bar
//! plate-cli solve --target 100
//!
//! # Load 225 lbs, JSON output
//! plate-cli solve --target 225 --unit lbs --format json
//!
//! # Custom plate stock on a 15 kg bar
//! plate-cli solve --target 62.5 --bar women --plates 20,10,5,2.5,1.25
//!
//! # Catalogs
//! plate-cli plates --unit lbs
//! plate-cli bars
//!
//! # Every quick-pick weight on the configured bar
//! plate-cli quick
//! ```

mod commands;

use clap::{Args, Parser, Subcommand};
use plate_calculator::{
    config::{environment::parse_plate_list, CalculatorConfig},
    errors::AppResult,
    formatters::{format_error, OutputFormat},
    logging::LoggingConfig,
    models::{BarbellType, WeightUnit},
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "plate-cli",
    about = "Barbell plate calculator",
    long_about = "Works out which plates to put on each side of a bar to reach a target weight. \
                  Defaults come from PLATE_CALC_* environment variables; flags override them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Weight unit (kg, lbs)
    #[arg(long, global = true)]
    unit: Option<WeightUnit>,

    /// Output format (text, json, toon)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Work out the plates for one target weight
    Solve {
        /// Target total weight, bar included
        #[arg(long, short = 't')]
        target: f64,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// List the standard plate set with colours
    Plates,

    /// List the barbell catalog
    Bars,

    /// Solve every quick-pick weight
    Quick {
        #[command(flatten)]
        load: LoadArgs,
    },
}

/// Flags shared by every command that solves a load
#[derive(Args)]
struct LoadArgs {
    /// Barbell type (olympic, women, ez, hex)
    #[arg(long, conflicts_with = "base")]
    bar: Option<BarbellType>,

    /// Explicit base weight instead of a catalog bar
    #[arg(long)]
    base: Option<f64>,

    /// Attachment points the plates are split across
    #[arg(long)]
    points: Option<u32>,

    /// Per-point leftover still reported as exact
    #[arg(long)]
    tolerance: Option<f64>,

    /// Plate stock, comma-separated (e.g. 25,20,10,5,2.5)
    #[arg(long)]
    plates: Option<String>,
}

impl LoadArgs {
    fn apply(&self, config: &mut CalculatorConfig) -> AppResult<()> {
        if let Some(bar) = self.bar {
            config.barbell = bar;
        }
        if let Some(points) = self.points {
            config.attachment_points = points;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(plates) = &self.plates {
            config.plates = Some(parse_plate_list(plates)?);
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("warning: logging disabled: {e}");
    }

    let mut config = CalculatorConfig::from_env();
    if let Some(unit) = cli.unit {
        config.unit = unit;
    }
    if let Some(format) = &cli.format {
        config.output_format = OutputFormat::from_str_param(format);
    }
    let format = config.output_format;

    match run(cli.command, config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", format_error(&error, format));
            ExitCode::from(error.code.exit_code())
        }
    }
}

fn run(command: Command, mut config: CalculatorConfig) -> AppResult<String> {
    match command {
        Command::Solve { target, load } => {
            load.apply(&mut config)?;
            commands::solve::run(&config, target, load.base)
        }
        Command::Plates => commands::catalog::plates(&config),
        Command::Bars => commands::catalog::bars(&config),
        Command::Quick { load } => {
            load.apply(&mut config)?;
            commands::quick::run(&config, load.base)
        }
    }
}
