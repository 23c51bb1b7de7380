// ABOUTME: quick command - solves every quick-pick weight on the configured bar
// ABOUTME: Targets lighter than the bar are skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use plate_calculator::{
    calculator, config::CalculatorConfig, errors::AppResult, formatters::format_output,
};

/// Solve each quick-pick target and render the table
pub fn run(config: &CalculatorConfig, base: Option<f64>) -> AppResult<String> {
    let report = calculator::quick_picks(config, base)?;
    Ok(format_output(&report, config.output_format)?)
}
