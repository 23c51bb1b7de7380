// ABOUTME: Load request: target total, base weight, attachment points, and tolerance
// ABOUTME: Validation runs before any solving so bad input never yields a silent empty load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use plate_core::constants::resolver::{
    DEFAULT_ATTACHMENT_POINTS, DEFAULT_TOLERANCE, MAX_TOTAL_WEIGHT,
};
use plate_core::{Barbell, LoadError};
use serde::{Deserialize, Serialize};

const fn default_attachment_points() -> u32 {
    DEFAULT_ATTACHMENT_POINTS
}

const fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// What the lifter wants on the bar
///
/// All weights share one unit; the request does not know which.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Total weight wanted, including the base
    pub target_total_weight: f64,
    /// Weight of the unloaded fixture (bar)
    pub base_weight: f64,
    /// Symmetric points the plate weight is split across (2 for a barbell)
    #[serde(default = "default_attachment_points")]
    pub attachment_points: u32,
    /// Largest per-point leftover still classified as exact
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl LoadRequest {
    /// Request for a two-sided bar with the default tolerance
    #[must_use]
    pub fn new(target_total_weight: f64, base_weight: f64) -> Self {
        Self {
            target_total_weight,
            base_weight,
            attachment_points: DEFAULT_ATTACHMENT_POINTS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Request loading a catalog barbell
    #[must_use]
    pub fn for_barbell(target_total_weight: f64, barbell: &Barbell) -> Self {
        Self::new(target_total_weight, barbell.weight)
    }

    /// Override the number of attachment points
    #[must_use]
    pub fn with_attachment_points(mut self, attachment_points: u32) -> Self {
        self.attachment_points = attachment_points;
        self
    }

    /// Override the exactness tolerance
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check every request invariant
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidRequest` if:
    /// - either weight is not finite or is negative
    /// - the target is below the base weight or above the supported maximum
    /// - `attachment_points` is zero
    /// - `tolerance` is negative or not finite
    pub fn validate(&self) -> Result<(), LoadError> {
        let Self {
            target_total_weight: target,
            base_weight: base,
            attachment_points,
            tolerance,
        } = *self;

        if !target.is_finite() || !base.is_finite() {
            return Err(LoadError::invalid_request(
                "target and base weights must be finite numbers",
            ));
        }
        if base < 0.0 {
            return Err(LoadError::invalid_request(format!(
                "base weight {base} cannot be negative"
            )));
        }
        if target < base {
            return Err(LoadError::invalid_request(format!(
                "target weight {target} must not be below base weight {base}"
            )));
        }
        if target > MAX_TOTAL_WEIGHT {
            return Err(LoadError::invalid_request(format!(
                "target weight {target} exceeds the maximum {MAX_TOTAL_WEIGHT}"
            )));
        }
        if attachment_points == 0 {
            return Err(LoadError::invalid_request(
                "at least one attachment point is required",
            ));
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(LoadError::invalid_request(format!(
                "tolerance {tolerance} must be a non-negative number"
            )));
        }
        Ok(())
    }

    /// Weight each attachment point must carry
    #[must_use]
    pub fn remainder_per_point(&self) -> f64 {
        (self.target_total_weight - self.base_weight) / f64::from(self.attachment_points.max(1))
    }
}
