// ABOUTME: Denomination table: validated, descending, duplicate-free plate catalog
// ABOUTME: Rejects empty, non-positive, duplicate, and sub-resolution denominations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::grid;
use plate_core::constants::resolver::MAX_TOTAL_WEIGHT;
use plate_core::{LoadError, WeightUnit};
use serde::Serialize;

/// Immutable catalog of available plate sizes, largest first
///
/// # Precondition
///
/// The resolver walks the table greedily, which is only guaranteed to find
/// the closest achievable load when the table is *greedy-compatible*: taking
/// the largest plate that fits never blocks a better total. Standard plate
/// sets (`25, 20, 15, 10, 5, 2.5, 1.25, 0.5` kg) are designed that way.
/// Irregular sets (for example `{4, 3}` against a remainder of `6`) are
/// accepted but may be solved approximately where an exact load exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenominationTable {
    units: Vec<f64>,
}

impl DenominationTable {
    /// Validate and normalize raw denominations
    ///
    /// Input order does not matter; the table is sorted descending.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidTable` if `raw_units` is empty, or contains a
    /// non-finite, non-positive, sub-resolution (below 0.001), oversized, or
    /// duplicate value. Duplicates are rejected rather than collapsed.
    pub fn new(raw_units: impl IntoIterator<Item = f64>) -> Result<Self, LoadError> {
        let mut units: Vec<f64> = raw_units.into_iter().collect();

        if units.is_empty() {
            return Err(LoadError::invalid_table(
                "table must contain at least one denomination",
            ));
        }

        for &unit in &units {
            Self::validate_unit(unit)?;
        }

        units.sort_by(|a, b| b.total_cmp(a));

        if let Some(pair) = units
            .windows(2)
            .find(|pair| grid::nearest_steps(pair[0]) == grid::nearest_steps(pair[1]))
        {
            return Err(LoadError::invalid_table(format!(
                "duplicate denomination {}",
                pair[1]
            )));
        }

        Ok(Self::from_sorted(units))
    }

    /// Standard plate set for `unit`
    #[must_use]
    pub fn standard(unit: WeightUnit) -> Self {
        Self::from_sorted(unit.standard_plates().to_vec())
    }

    const fn from_sorted(units: Vec<f64>) -> Self {
        Self { units }
    }

    fn validate_unit(unit: f64) -> Result<(), LoadError> {
        if !unit.is_finite() {
            return Err(LoadError::invalid_table(format!(
                "denomination {unit} is not a finite number"
            )));
        }
        if unit <= 0.0 {
            return Err(LoadError::invalid_table(format!(
                "denomination {unit} must be positive"
            )));
        }
        if !grid::is_representable(unit) {
            return Err(LoadError::invalid_table(format!(
                "denomination {unit} is below the 0.001 resolution"
            )));
        }
        if unit > MAX_TOTAL_WEIGHT {
            return Err(LoadError::invalid_table(format!(
                "denomination {unit} exceeds the maximum weight {MAX_TOTAL_WEIGHT}"
            )));
        }
        Ok(())
    }

    /// Denominations, largest first
    #[must_use]
    pub fn units(&self) -> &[f64] {
        &self.units
    }

    /// Iterate denominations, largest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.units.iter().copied()
    }

    /// Number of denominations (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false; a table is never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Largest denomination
    #[must_use]
    pub fn largest(&self) -> f64 {
        self.units.first().copied().unwrap_or_default()
    }

    /// Smallest denomination
    #[must_use]
    pub fn smallest(&self) -> f64 {
        self.units.last().copied().unwrap_or_default()
    }

    /// Whether `denomination` is stocked
    #[must_use]
    pub fn contains(&self, denomination: f64) -> bool {
        let target = grid::nearest_steps(denomination);
        self.units
            .iter()
            .any(|&unit| grid::nearest_steps(unit) == target)
    }
}

impl<'a> IntoIterator for &'a DenominationTable {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
