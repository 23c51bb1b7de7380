// ABOUTME: Barbell catalog with per-unit unloaded weights
// ABOUTME: Supplies the base weight of a load request from a bar type selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeightUnit;
use crate::constants::barbells;
use crate::errors::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of bar the plates are loaded on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarbellType {
    /// Men's Olympic bar
    #[default]
    Olympic,
    /// Women's / standard bar
    Women,
    /// EZ curl bar
    Ez,
    /// Hex / trap bar (only stocked in kilograms)
    Hex,
}

impl BarbellType {
    /// Every bar type, in catalog order
    pub const ALL: [Self; 4] = [Self::Olympic, Self::Women, Self::Ez, Self::Hex];

    /// Unloaded weight in the given unit, `None` when the bar is not stocked in that unit
    #[must_use]
    pub const fn weight(&self, unit: WeightUnit) -> Option<f64> {
        match (self, unit) {
            (Self::Olympic, WeightUnit::Kilograms) => Some(barbells::OLYMPIC_KG),
            (Self::Women, WeightUnit::Kilograms) => Some(barbells::WOMEN_KG),
            (Self::Ez, WeightUnit::Kilograms) => Some(barbells::EZ_KG),
            (Self::Hex, WeightUnit::Kilograms) => Some(barbells::HEX_KG),
            (Self::Olympic, WeightUnit::Pounds) => Some(barbells::OLYMPIC_LBS),
            (Self::Women, WeightUnit::Pounds) => Some(barbells::WOMEN_LBS),
            (Self::Ez, WeightUnit::Pounds) => Some(barbells::EZ_LBS),
            (Self::Hex, WeightUnit::Pounds) => None,
        }
    }

    /// Display name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Olympic => "Olympic bar",
            Self::Women => "Women's bar",
            Self::Ez => "EZ curl bar",
            Self::Hex => "Hex bar",
        }
    }

    /// Identifier accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Olympic => "olympic",
            Self::Women => "women",
            Self::Ez => "ez",
            Self::Hex => "hex",
        }
    }

    /// Resolve to a catalog entry for `unit`
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when this bar is not stocked in `unit`
    pub fn in_unit(self, unit: WeightUnit) -> Result<Barbell, AppError> {
        self.weight(unit)
            .map(|weight| Barbell {
                kind: self,
                name: self.display_name(),
                weight,
                unit,
            })
            .ok_or_else(|| {
                AppError::out_of_range(format!(
                    "{} is not available in {}",
                    self.display_name(),
                    unit
                ))
            })
    }
}

impl fmt::Display for BarbellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarbellType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "olympic" | "standard" | "men" | "mens" => Ok(Self::Olympic),
            "women" | "womens" => Ok(Self::Women),
            "ez" | "ez-curl" | "ez_curl" | "curl" => Ok(Self::Ez),
            "hex" | "trap" => Ok(Self::Hex),
            other => Err(AppError::new(
                ErrorCode::InvalidFormat,
                format!("Unknown barbell type '{other}' (expected olympic, women, ez, or hex)"),
            )),
        }
    }
}

/// A stocked bar: type, name, and unloaded weight in a given unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Barbell {
    /// Bar type
    pub kind: BarbellType,
    /// Display name
    pub name: &'static str,
    /// Unloaded weight
    pub weight: f64,
    /// Unit of `weight`
    pub unit: WeightUnit,
}

impl Barbell {
    /// All bars stocked in `unit`, in catalog order
    #[must_use]
    pub fn catalog(unit: WeightUnit) -> Vec<Self> {
        BarbellType::ALL
            .iter()
            .filter_map(|kind| kind.in_unit(unit).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilogram_catalog_has_every_bar() {
        let catalog = Barbell::catalog(WeightUnit::Kilograms);
        let weights: Vec<f64> = catalog.iter().map(|bar| bar.weight).collect();
        assert_eq!(weights, vec![20.0, 15.0, 10.0, 25.0]);
    }

    #[test]
    fn test_pound_catalog_skips_hex_bar() {
        let catalog = Barbell::catalog(WeightUnit::Pounds);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|bar| bar.kind != BarbellType::Hex));
        assert!(BarbellType::Hex.in_unit(WeightUnit::Pounds).is_err());
    }

    #[test]
    fn test_barbell_parsing() {
        assert_eq!("Trap".parse::<BarbellType>().ok(), Some(BarbellType::Hex));
        assert_eq!("ez-curl".parse::<BarbellType>().ok(), Some(BarbellType::Ez));
        assert!("safety-squat".parse::<BarbellType>().is_err());
    }
}
