// ABOUTME: Numeric helpers for the greedy walk and the thousandths comparison grid
// ABOUTME: Floors remainder/plate with float slack; compares denominations on the grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use plate_core::constants::resolver::{
    FLOOR_EPSILON, GRID_SNAP_EPSILON, RESOLUTION_STEPS_PER_UNIT,
};

/// Whole plates of `denomination` that fit in `remainder`
///
/// `floor(remainder / denomination)` with [`FLOOR_EPSILON`] of slack on the
/// remainder. Plate sizes need not sit on the thousandths grid (`2.26796`,
/// `1/3` both divide exactly).
pub fn whole_multiples(remainder: f64, denomination: f64) -> u64 {
    let count = ((remainder + FLOOR_EPSILON) / denomination).floor();
    if count <= 0.0 {
        0
    } else {
        count as u64
    }
}

/// Nearest grid step, used to compare denominations for equality
pub fn nearest_steps(value: f64) -> i64 {
    (value * RESOLUTION_STEPS_PER_UNIT).round() as i64
}

/// True when `value` is at least one grid step
pub fn is_representable(value: f64) -> bool {
    value.mul_add(RESOLUTION_STEPS_PER_UNIT, GRID_SNAP_EPSILON) >= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_multiples_is_floor_division() {
        assert_eq!(whole_multiples(40.0, 25.0), 1);
        assert_eq!(whole_multiples(40.5, 0.5), 81);
        assert_eq!(whole_multiples(0.3 - 0.2, 0.1), 1);
        assert_eq!(whole_multiples(0.4, 0.5), 0);
        assert_eq!(whole_multiples(-3.0, 1.0), 0);
    }

    #[test]
    fn test_whole_multiples_off_grid_denominations() {
        let pound_in_kg = 2.267_96;
        assert_eq!(whole_multiples(2.0 * pound_in_kg, pound_in_kg), 2);
        assert_eq!(whole_multiples(1.0, 1.0 / 3.0), 3);
    }

    #[test]
    fn test_representable() {
        assert!(is_representable(0.001));
        assert!(!is_representable(0.000_4));
    }
}
