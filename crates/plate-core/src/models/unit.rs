// ABOUTME: Weight unit enumeration with labels, parsing, and standard plate sets
// ABOUTME: Kilogram and pound gyms stock different plates and bars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::plates::{KILOGRAM_PLATES, POUND_PLATES};
use crate::errors::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit every weight in a request, table, and solution is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    /// Pounds
    #[serde(rename = "lbs")]
    Pounds,
}

impl WeightUnit {
    /// Short display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lbs",
        }
    }

    /// Standard plate set for this unit, largest first
    #[must_use]
    pub const fn standard_plates(&self) -> &'static [f64] {
        match self {
            Self::Kilograms => &KILOGRAM_PLATES,
            Self::Pounds => &POUND_PLATES,
        }
    }

    /// Parse from string with fallback to kilograms
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => Ok(Self::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pounds),
            other => Err(AppError::new(
                ErrorCode::InvalidFormat,
                format!("Unknown weight unit '{other}' (expected kg or lbs)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("KG".parse::<WeightUnit>().ok(), Some(WeightUnit::Kilograms));
        assert_eq!(" lbs ".parse::<WeightUnit>().ok(), Some(WeightUnit::Pounds));
        assert_eq!("pound".parse::<WeightUnit>().ok(), Some(WeightUnit::Pounds));
        assert!("stone".parse::<WeightUnit>().is_err());
        assert_eq!(WeightUnit::from_str_or_default("stone"), WeightUnit::Kilograms);
    }

    #[test]
    fn test_standard_plates_are_descending() {
        for unit in [WeightUnit::Kilograms, WeightUnit::Pounds] {
            let plates = unit.standard_plates();
            assert!(plates.windows(2).all(|pair| pair[0] > pair[1]));
        }
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&WeightUnit::Pounds).unwrap_or_default();
        assert_eq!(json, "\"lbs\"");
    }
}
