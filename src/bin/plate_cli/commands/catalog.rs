// ABOUTME: plates and bars commands - list the equipment catalogs
// ABOUTME: The plate list honours a custom PLATE_CALC_PLATES stock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use plate_calculator::{
    calculator, config::CalculatorConfig, errors::AppResult, formatters::format_output,
};

/// Render the plate stock for the configured unit
pub fn plates(config: &CalculatorConfig) -> AppResult<String> {
    let report = calculator::plate_catalog(config)?;
    Ok(format_output(&report, config.output_format)?)
}

/// Render the barbells stocked in the configured unit
pub fn bars(config: &CalculatorConfig) -> AppResult<String> {
    let report = calculator::barbell_catalog(config);
    Ok(format_output(&report, config.output_format)?)
}
