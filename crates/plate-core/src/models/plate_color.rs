// ABOUTME: IWF colour coding for kilogram bumper and change plates
// ABOUTME: Lets front ends colour a plate from its denomination alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeightUnit;
use crate::constants::resolver::RESOLUTION_STEPS_PER_UNIT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plate colour per the IWF competition standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateColor {
    /// 25 kg and 2.5 kg
    Red,
    /// 20 kg and 1.25 kg
    Blue,
    /// 15 kg and 0.5 kg
    Yellow,
    /// 10 kg
    Green,
    /// 5 kg
    White,
    /// Anything outside the IWF set (including all pound plates)
    Grey,
}

impl PlateColor {
    /// Colour for a plate of `denomination` in `unit`
    #[must_use]
    pub fn for_plate(denomination: f64, unit: WeightUnit) -> Self {
        if unit != WeightUnit::Kilograms || !denomination.is_finite() {
            return Self::Grey;
        }

        // Compare on the thousandths grid so 1.25 and 2.5 match exactly
        match (denomination * RESOLUTION_STEPS_PER_UNIT).round() as i64 {
            25_000 | 2_500 => Self::Red,
            20_000 | 1_250 => Self::Blue,
            15_000 | 500 => Self::Yellow,
            10_000 => Self::Green,
            5_000 => Self::White,
            _ => Self::Grey,
        }
    }

    /// Hex colour code for display
    #[must_use]
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
            Self::Yellow => "#eab308",
            Self::Green => "#22c55e",
            Self::White => "#f5f5f5",
            Self::Grey => "#9ca3af",
        }
    }

    /// Lowercase colour name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::White => "white",
            Self::Grey => "grey",
        }
    }
}

impl fmt::Display for PlateColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
