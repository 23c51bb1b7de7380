// ABOUTME: Calculator operations behind each plate-cli command, returning reports
// ABOUTME: Validates the effective configuration, solves loads, and skips quick picks below the bar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Command operations.
//!
//! Each function takes the effective [`CalculatorConfig`] (environment plus
//! flags) and returns a report ready for [`format_output`](crate::formatters::format_output).
//! Failures carry an [`ErrorCode`](crate::errors::ErrorCode) whose
//! `exit_code()` becomes the process status.

use crate::config::CalculatorConfig;
use crate::errors::AppResult;
use crate::formatters::{BarbellCatalogReport, PlateCatalogReport, QuickPickReport, SolveReport};
use plate_core::constants::quick_picks::TARGET_WEIGHTS;
use plate_solver::LoadResolver;
use tracing::{debug, info};

/// Solve one target on the configured bar, or on `base` when given
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the plate stock fails
/// table validation, or the request is rejected (e.g. target below the bar)
pub fn solve(
    config: &CalculatorConfig,
    target: f64,
    base: Option<f64>,
) -> AppResult<SolveReport> {
    config.validate_for(base)?;
    debug!(?config, ?base, "Effective configuration");

    let table = config.denomination_table(None)?;
    let request = config.request_for(target, base)?;
    let solution = LoadResolver::solve(&table, &request)?;

    info!(
        target,
        achieved = solution.achieved_total_weight(),
        exact = solution.is_exact(),
        "Solved load"
    );

    Ok(SolveReport::new(config.unit, request, solution))
}

/// Solve every quick-pick target that is not lighter than the bar
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the plate stock fails
/// table validation, or a request is rejected
pub fn quick_picks(config: &CalculatorConfig, base: Option<f64>) -> AppResult<QuickPickReport> {
    config.validate_for(base)?;

    let table = config.denomination_table(None)?;
    let base_weight = match base {
        Some(base) => base,
        None => config.barbell_weight()?,
    };

    let mut solutions = Vec::with_capacity(TARGET_WEIGHTS.len());
    for target in TARGET_WEIGHTS {
        if target < base_weight {
            debug!(target, base_weight, "Skipping quick pick below bar weight");
            continue;
        }
        let request = config.request_for(target, Some(base_weight))?;
        solutions.push(LoadResolver::solve(&table, &request)?);
    }

    Ok(QuickPickReport::new(config.unit, base_weight, &solutions))
}

/// The plate stock for the configured unit
///
/// # Errors
///
/// Returns an error if a custom plate stock fails table validation
pub fn plate_catalog(config: &CalculatorConfig) -> AppResult<PlateCatalogReport> {
    let table = config.denomination_table(None)?;
    Ok(PlateCatalogReport::new(config.unit, &table))
}

/// The barbells stocked in the configured unit
#[must_use]
pub fn barbell_catalog(config: &CalculatorConfig) -> BarbellCatalogReport {
    BarbellCatalogReport::new(config.unit)
}
