// ABOUTME: Serializable report types for solve results and equipment catalogs
// ABOUTME: Each report renders as plain text for terminals and as JSON/TOON for machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::PlainText;
use plate_core::{Barbell, PlateColor, WeightUnit};
use plate_solver::{format_weight, DenominationTable, LoadRequest, LoadSolution, LoadSummary};
use serde::Serialize;
use std::fmt::Write as _;

/// A resolved load with its request and display summary
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Unit of every weight in the report
    pub unit: WeightUnit,
    /// The request as solved
    pub request: LoadRequest,
    /// Resolver output
    pub solution: LoadSolution,
    /// Display projection of `solution`
    pub summary: LoadSummary,
}

impl SolveReport {
    /// Wrap a solution for output
    #[must_use]
    pub fn new(unit: WeightUnit, request: LoadRequest, solution: LoadSolution) -> Self {
        let summary = LoadSummary::from_solution(&solution, unit);
        Self {
            unit,
            request,
            solution,
            summary,
        }
    }
}

impl PlainText for SolveReport {
    fn to_plain_text(&self) -> String {
        let unit = self.unit.label();
        let solution = &self.solution;
        let mut out = format!(
            "Target: {} {unit}   Bar: {} {unit}   Attachment points: {}",
            format_weight(solution.target_total_weight()),
            format_weight(solution.base_weight()),
            solution.attachment_points()
        );

        if solution.is_unloaded() {
            out.push_str("\nNo plates needed");
        } else {
            let heading = if solution.attachment_points() == 2 {
                "Plates per side:".to_owned()
            } else {
                format!("Plates per point (x{}):", solution.attachment_points())
            };
            let _ = write!(out, "\n{heading}");
            for line in &self.summary.plates {
                let _ = write!(
                    out,
                    "\n  {:>6} {unit} × {:<3} ({})",
                    format_weight(line.denomination),
                    line.count_per_point,
                    line.color
                );
            }
        }

        let _ = write!(
            out,
            "\nTotal: {} {unit}",
            format_weight(solution.achieved_total_weight())
        );
        if solution.is_exact() {
            out.push_str(" (exact)");
        } else {
            let _ = write!(
                out,
                " (approximate, {} {unit} short of {} {unit})",
                format_weight(solution.delta()),
                format_weight(solution.target_total_weight())
            );
        }
        out
    }
}

/// One plate in a catalog listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateEntry {
    /// Plate size
    pub denomination: f64,
    /// IWF colour
    pub color: PlateColor,
    /// Display hex code
    pub hex: &'static str,
}

/// Plate stock listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateCatalogReport {
    /// Unit of every plate
    pub unit: WeightUnit,
    /// Plates, largest first
    pub plates: Vec<PlateEntry>,
}

impl PlateCatalogReport {
    /// List every plate in `table`
    #[must_use]
    pub fn new(unit: WeightUnit, table: &DenominationTable) -> Self {
        let plates = table
            .iter()
            .map(|denomination| {
                let color = PlateColor::for_plate(denomination, unit);
                PlateEntry {
                    denomination,
                    color,
                    hex: color.hex(),
                }
            })
            .collect();
        Self { unit, plates }
    }
}

impl PlainText for PlateCatalogReport {
    fn to_plain_text(&self) -> String {
        let unit = self.unit.label();
        let mut out = format!("Plates ({unit}):");
        for plate in &self.plates {
            let _ = write!(
                out,
                "\n  {:>6} {unit}  {:<6} {}",
                format_weight(plate.denomination),
                plate.color,
                plate.hex
            );
        }
        out
    }
}

/// Barbell catalog listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarbellCatalogReport {
    /// Unit of every bar weight
    pub unit: WeightUnit,
    /// Stocked bars
    pub barbells: Vec<Barbell>,
}

impl BarbellCatalogReport {
    /// Bars stocked in `unit`
    #[must_use]
    pub fn new(unit: WeightUnit) -> Self {
        Self {
            unit,
            barbells: Barbell::catalog(unit),
        }
    }
}

impl PlainText for BarbellCatalogReport {
    fn to_plain_text(&self) -> String {
        let unit = self.unit.label();
        let mut out = format!("Barbells ({unit}):");
        for bar in &self.barbells {
            let _ = write!(
                out,
                "\n  {:<8} {:<12} {:>4} {unit}",
                bar.kind.as_str(),
                bar.name,
                format_weight(bar.weight)
            );
        }
        out
    }
}

/// One quick-pick target and how it loads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickPickRow {
    /// Target total weight
    pub target: f64,
    /// Human-readable breakdown
    pub description: String,
    /// Whether the target is reachable within tolerance
    pub is_exact: bool,
}

/// Loads for every quick-pick target on one bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickPickReport {
    /// Unit of every weight
    pub unit: WeightUnit,
    /// Bar weight every row is loaded on
    pub base_weight: f64,
    /// One row per target that is not below the bar
    pub rows: Vec<QuickPickRow>,
}

impl QuickPickReport {
    /// Build from already solved quick-pick targets
    #[must_use]
    pub fn new(unit: WeightUnit, base_weight: f64, solutions: &[LoadSolution]) -> Self {
        let rows = solutions
            .iter()
            .map(|solution| QuickPickRow {
                target: solution.target_total_weight(),
                description: LoadSummary::from_solution(solution, unit).description,
                is_exact: solution.is_exact(),
            })
            .collect();
        Self {
            unit,
            base_weight,
            rows,
        }
    }
}

impl PlainText for QuickPickReport {
    fn to_plain_text(&self) -> String {
        let unit = self.unit.label();
        let mut out = format!("Quick picks on a {} {unit} bar:", format_weight(self.base_weight));
        for row in &self.rows {
            let _ = write!(
                out,
                "\n  {:>5} {unit}  {}",
                format_weight(row.target),
                row.description
            );
        }
        out
    }
}
