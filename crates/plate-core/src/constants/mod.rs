// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Standard plate sets, barbell weights, resolver tolerances, and quick-pick targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Plate sets are listed largest first,
//! which is also the order the resolver walks them in.

/// Standard plate denominations per weight unit
pub mod plates {
    /// Kilogram plates (IWF/IPF competition and training set)
    pub const KILOGRAM_PLATES: [f64; 8] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25, 0.5];

    /// Pound plates commonly found in commercial gyms
    pub const POUND_PLATES: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];
}

/// Unloaded barbell weights
pub mod barbells {
    /// Men's Olympic bar (kg)
    pub const OLYMPIC_KG: f64 = 20.0;
    /// Women's / standard bar (kg)
    pub const WOMEN_KG: f64 = 15.0;
    /// EZ curl bar (kg)
    pub const EZ_KG: f64 = 10.0;
    /// Hex / trap bar (kg)
    pub const HEX_KG: f64 = 25.0;

    /// Men's Olympic bar (lbs)
    pub const OLYMPIC_LBS: f64 = 45.0;
    /// Women's / standard bar (lbs)
    pub const WOMEN_LBS: f64 = 35.0;
    /// EZ curl bar (lbs)
    pub const EZ_LBS: f64 = 20.0;
}

/// Resolver numerics
pub mod resolver {
    /// Default per-attachment-point leftover accepted as an exact load
    pub const DEFAULT_TOLERANCE: f64 = 0.01;

    /// Default number of attachment points (two sleeves of a barbell)
    pub const DEFAULT_ATTACHMENT_POINTS: u32 = 2;

    /// Steps per weight unit used to compare and validate denominations (thousandths)
    pub const RESOLUTION_STEPS_PER_UNIT: f64 = 1000.0;

    /// Slack applied when snapping a float onto the resolution grid
    pub const GRID_SNAP_EPSILON: f64 = 1e-6;

    /// Slack added to a remainder before dividing it by a plate, so float
    /// noise (`0.3 - 0.2` is `0.0999…`) still fits a whole plate
    pub const FLOOR_EPSILON: f64 = 1e-9;

    /// Largest total weight accepted in a request
    pub const MAX_TOTAL_WEIGHT: f64 = 1_000_000.0;
}

/// Quick-pick target weights shown next to the target input
pub mod quick_picks {
    /// Common working/max weights
    pub const TARGET_WEIGHTS: [f64; 8] = [60.0, 80.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0];
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name for the plate calculator
    pub const PLATE_CALCULATOR: &str = "plate-calculator";
}
