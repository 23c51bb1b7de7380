// ABOUTME: solve command - loads one target weight onto the configured bar
// ABOUTME: Warns on stderr when the target can only be approximated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use plate_calculator::{
    calculator,
    config::CalculatorConfig,
    errors::AppResult,
    formatters::format_output,
    solver::format_weight,
};

/// Solve `target` and render the report
pub fn run(config: &CalculatorConfig, target: f64, base: Option<f64>) -> AppResult<String> {
    let report = calculator::solve(config, target, base)?;

    if !report.solution.is_exact() {
        let unit = config.unit.label();
        eprintln!(
            "warning: {} {unit} cannot be loaded exactly with these plates; showing {} {unit}",
            format_weight(target),
            format_weight(report.solution.achieved_total_weight())
        );
    }

    Ok(format_output(&report, config.output_format)?)
}
