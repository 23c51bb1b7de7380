// ABOUTME: Presentation helpers projecting a load solution into counts and text
// ABOUTME: Pure functions over solution fields; never re-run the solver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::solution::{LoadSolution, PlateCount};
use plate_core::{PlateColor, WeightUnit};
use serde::Serialize;

/// Format a weight without trailing zeros (`25`, `2.5`, `1.25`)
#[must_use]
pub fn format_weight(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// One plate row for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateLine {
    /// Plate size
    pub denomination: f64,
    /// Plates on each attachment point
    pub count_per_point: u32,
    /// Plates across all attachment points
    pub count_total: u32,
    /// Weight these plates add to one attachment point
    pub weight_per_point: f64,
    /// IWF colour
    pub color: PlateColor,
}

/// Presentation-ready digest of a [`LoadSolution`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    /// Unit of every weight below
    pub unit: WeightUnit,
    /// Plate rows, largest first
    pub plates: Vec<PlateLine>,
    /// Plates on each attachment point
    pub items_per_point: u32,
    /// Plates across all attachment points
    pub total_items: u32,
    /// Plate weight on one attachment point
    pub loaded_weight_per_point: f64,
    /// Plate weight across all attachment points
    pub loaded_weight_total: f64,
    /// One-line human-readable breakdown
    pub description: String,
}

impl LoadSummary {
    /// Project `solution` for display in `unit`
    #[must_use]
    pub fn from_solution(solution: &LoadSolution, unit: WeightUnit) -> Self {
        let points = solution.attachment_points();
        let plates = solution
            .per_point()
            .iter()
            .map(|plate| PlateLine {
                denomination: plate.denomination,
                count_per_point: plate.count,
                count_total: plate.count.saturating_mul(points),
                weight_per_point: plate.weight(),
                color: PlateColor::for_plate(plate.denomination, unit),
            })
            .collect();

        Self {
            unit,
            plates,
            items_per_point: items_per_point(solution),
            total_items: total_item_count(solution),
            loaded_weight_per_point: loaded_weight_per_point(solution),
            loaded_weight_total: loaded_weight_total(solution),
            description: describe(solution, unit),
        }
    }
}

/// Plates on a single attachment point
#[must_use]
pub fn items_per_point(solution: &LoadSolution) -> u32 {
    solution
        .per_point()
        .iter()
        .fold(0_u32, |acc, plate| acc.saturating_add(plate.count))
}

/// Plates across all attachment points (`Σ count × attachment_points`)
#[must_use]
pub fn total_item_count(solution: &LoadSolution) -> u32 {
    items_per_point(solution).saturating_mul(solution.attachment_points())
}

/// Plate weight on a single attachment point
#[must_use]
pub fn loaded_weight_per_point(solution: &LoadSolution) -> f64 {
    solution.per_point().iter().map(PlateCount::weight).sum()
}

/// Plate weight across all attachment points
#[must_use]
pub fn loaded_weight_total(solution: &LoadSolution) -> f64 {
    loaded_weight_per_point(solution) * f64::from(solution.attachment_points())
}

/// Human-readable breakdown
///
/// `"25 kg × 1, 15 kg × 1 per side (100 kg total)"`, or
/// `"bar only (20 kg total)"` when no plates are needed. Approximate loads
/// add how far short they fall: `"(100 kg total, 1 kg short)"`.
#[must_use]
pub fn describe(solution: &LoadSolution, unit: WeightUnit) -> String {
    let label = unit.label();
    let total = format!(
        "{} {label} total",
        format_weight(solution.achieved_total_weight())
    );
    let totals = if solution.is_exact() {
        total
    } else {
        format!("{total}, {} {label} short", format_weight(solution.delta()))
    };

    if solution.is_unloaded() {
        let subject = if solution.base_weight() > 0.0 {
            "bar only"
        } else {
            "no plates"
        };
        return format!("{subject} ({totals})");
    }

    let plates = solution
        .per_point()
        .iter()
        .map(|plate| {
            format!(
                "{} {label} × {}",
                format_weight(plate.denomination),
                plate.count
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let placement = match solution.attachment_points() {
        1 => String::new(),
        2 => " per side".to_owned(),
        n => format!(" on each of {n} points"),
    };

    format!("{plates}{placement} ({totals})")
}
