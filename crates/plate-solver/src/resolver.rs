// ABOUTME: Greedy largest-plate-first resolver for symmetric barbell loading
// ABOUTME: Walks the whole table taking floor(remainder / plate) of every plate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::grid;
use crate::request::LoadRequest;
use crate::solution::{LoadSolution, PlateCount};
use crate::table::DenominationTable;
use plate_core::LoadError;
use tracing::{debug, info};

/// Converts a target weight into plates per attachment point
///
/// Stateless: no cache, no configuration. Identical inputs always produce
/// identical solutions, so callers may memoize freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadResolver;

impl LoadResolver {
    /// Resolve `request` against `table`
    ///
    /// Takes `floor(remainder / plate)` of every plate, largest first, over the
    /// full table, then carries what is left to the next plate. The walk never stops early: a leftover of `0.5` is still
    /// filled by a `0.5` plate after the larger plates are skipped.
    ///
    /// The result never exceeds the target. It is the closest achievable load
    /// only if the table is greedy-compatible (see [`DenominationTable`]).
    /// An approximate load is still a successful result with
    /// `is_exact() == false`; whether to accept it is the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidRequest` if the request fails validation
    /// (see [`LoadRequest::validate`]). Nothing is computed in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plate_solver::{DenominationTable, LoadRequest, LoadResolver};
    ///
    /// # fn main() -> Result<(), plate_core::LoadError> {
    /// let table = DenominationTable::new([10.0, 5.0, 2.0, 1.0])?;
    /// let request = LoadRequest::new(17.0, 0.0).with_attachment_points(1);
    /// let solution = LoadResolver::solve(&table, &request)?;
    ///
    /// assert_eq!(solution.count_for(10.0), 1);
    /// assert_eq!(solution.count_for(5.0), 1);
    /// assert_eq!(solution.count_for(2.0), 1);
    /// assert!(solution.is_exact());
    /// # Ok(())
    /// # }
    /// ```
    pub fn solve(
        table: &DenominationTable,
        request: &LoadRequest,
    ) -> Result<LoadSolution, LoadError> {
        request.validate()?;

        let remainder = request.remainder_per_point();
        debug!(
            target_total = request.target_total_weight,
            base = request.base_weight,
            attachment_points = request.attachment_points,
            remainder_per_point = remainder,
            denominations = table.len(),
            "Resolving plate load"
        );

        if remainder <= 0.0 {
            return Ok(LoadSolution::unloaded(request));
        }

        let mut remaining = remainder;
        let mut per_point = Vec::new();

        for denomination in table.iter() {
            let count = grid::whole_multiples(remaining, denomination);
            if count == 0 {
                continue;
            }
            // The slack can push count × plate a hair past the remainder
            remaining = (count as f64).mul_add(-denomination, remaining).max(0.0);
            // Targets are capped at MAX_TOTAL_WEIGHT and plates are at least
            // 0.001, so a count never exceeds 10^9
            per_point.push(PlateCount {
                denomination,
                count: count as u32,
            });
        }

        let solution = LoadSolution::from_counts(request, per_point);

        if solution.is_exact() {
            debug!(
                achieved_total = solution.achieved_total_weight(),
                plates_per_point = solution.per_point().len(),
                "Exact plate load resolved"
            );
        } else {
            info!(
                target_total = solution.target_total_weight(),
                achieved_total = solution.achieved_total_weight(),
                shortfall_per_point = solution.shortfall_per_point(),
                tolerance = request.tolerance,
                "Target not reachable with available plates, returning closest lower load"
            );
        }

        Ok(solution)
    }
}
