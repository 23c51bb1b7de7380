// ABOUTME: Load solution: plates per attachment point, achieved total, and exactness
// ABOUTME: Immutable value built once by the resolver from the chosen plate counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::grid;
use crate::request::LoadRequest;
use serde::Serialize;

/// Number of plates of one denomination on a single attachment point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateCount {
    /// Plate size
    pub denomination: f64,
    /// Plates of this size on each attachment point (never zero)
    pub count: u32,
}

impl PlateCount {
    /// Weight these plates add to one attachment point
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.denomination * f64::from(self.count)
    }
}

/// Result of resolving a [`LoadRequest`]
///
/// Invariants, for every solution the resolver returns:
/// - `achieved_total_weight == base_weight + attachment_points * Σ(denomination * count)`
/// - `base_weight <= achieved_total_weight <= target_total_weight`
/// - `delta == target_total_weight - achieved_total_weight >= 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSolution {
    per_point: Vec<PlateCount>,
    target_total_weight: f64,
    base_weight: f64,
    attachment_points: u32,
    achieved_total_weight: f64,
    shortfall_per_point: f64,
    delta: f64,
    is_exact: bool,
}

impl LoadSolution {
    /// Build from plate counts already chosen for `request`
    ///
    /// `per_point` must be in descending denomination order with nonzero counts.
    pub(crate) fn from_counts(request: &LoadRequest, per_point: Vec<PlateCount>) -> Self {
        let loaded_per_point: f64 = per_point.iter().map(PlateCount::weight).sum();
        let achieved_total_weight =
            f64::from(request.attachment_points).mul_add(loaded_per_point, request.base_weight);

        // Sub-resolution noise from the grid snap can dip a hair below zero
        let shortfall_per_point = (request.remainder_per_point() - loaded_per_point).max(0.0);
        let delta = (request.target_total_weight - achieved_total_weight).max(0.0);

        Self {
            per_point,
            target_total_weight: request.target_total_weight,
            base_weight: request.base_weight,
            attachment_points: request.attachment_points,
            achieved_total_weight,
            shortfall_per_point,
            delta,
            is_exact: shortfall_per_point <= request.tolerance,
        }
    }

    /// Solution for a request that needs no plates
    pub(crate) fn unloaded(request: &LoadRequest) -> Self {
        Self {
            per_point: Vec::new(),
            target_total_weight: request.target_total_weight,
            base_weight: request.base_weight,
            attachment_points: request.attachment_points,
            achieved_total_weight: request.base_weight,
            shortfall_per_point: 0.0,
            delta: 0.0,
            is_exact: true,
        }
    }

    /// Plates on each attachment point, largest first
    #[must_use]
    pub fn per_point(&self) -> &[PlateCount] {
        &self.per_point
    }

    /// Plates of `denomination` on each attachment point (zero if unused)
    #[must_use]
    pub fn count_for(&self, denomination: f64) -> u32 {
        let target = grid::nearest_steps(denomination);
        self.per_point
            .iter()
            .find(|plate| grid::nearest_steps(plate.denomination) == target)
            .map_or(0, |plate| plate.count)
    }

    /// True when no plates are needed
    #[must_use]
    pub fn is_unloaded(&self) -> bool {
        self.per_point.is_empty()
    }

    /// Requested total weight
    #[must_use]
    pub const fn target_total_weight(&self) -> f64 {
        self.target_total_weight
    }

    /// Base (bar) weight
    #[must_use]
    pub const fn base_weight(&self) -> f64 {
        self.base_weight
    }

    /// Attachment points the load is split across
    #[must_use]
    pub const fn attachment_points(&self) -> u32 {
        self.attachment_points
    }

    /// Base weight plus all plates on all attachment points
    #[must_use]
    pub const fn achieved_total_weight(&self) -> f64 {
        self.achieved_total_weight
    }

    /// Weight each attachment point is missing
    #[must_use]
    pub const fn shortfall_per_point(&self) -> f64 {
        self.shortfall_per_point
    }

    /// `target_total_weight - achieved_total_weight`, never negative
    #[must_use]
    pub const fn delta(&self) -> f64 {
        self.delta
    }

    /// Whether the per-point shortfall is within tolerance
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.is_exact
    }
}
