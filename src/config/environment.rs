// ABOUTME: Calculator configuration from environment variables with typed defaults
// ABOUTME: Resolves unit, bar, plate stock, attachment points, tolerance, and output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use crate::errors::AppResult;
use crate::formatters::OutputFormat;
use plate_core::constants::resolver::{DEFAULT_ATTACHMENT_POINTS, DEFAULT_TOLERANCE};
use plate_core::{BarbellType, WeightUnit};
use plate_solver::{DenominationTable, LoadRequest};
use serde::Serialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Environment variable holding the weight unit
pub const ENV_UNIT: &str = "PLATE_CALC_UNIT";
/// Environment variable holding the default barbell
pub const ENV_BARBELL: &str = "PLATE_CALC_BARBELL";
/// Environment variable holding the attachment point count
pub const ENV_ATTACHMENT_POINTS: &str = "PLATE_CALC_ATTACHMENT_POINTS";
/// Environment variable holding the exactness tolerance
pub const ENV_TOLERANCE: &str = "PLATE_CALC_TOLERANCE";
/// Environment variable holding the output format
pub const ENV_OUTPUT_FORMAT: &str = "PLATE_CALC_OUTPUT_FORMAT";
/// Environment variable holding a custom plate stock (comma-separated)
pub const ENV_PLATES: &str = "PLATE_CALC_PLATES";

/// Calculator defaults, overridable per invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorConfig {
    /// Unit for every weight
    pub unit: WeightUnit,
    /// Bar used when no explicit base weight is given
    pub barbell: BarbellType,
    /// Sides the plate weight is split across
    pub attachment_points: u32,
    /// Per-side leftover still treated as exact
    pub tolerance: f64,
    /// Output format for the CLI
    pub output_format: OutputFormat,
    /// Custom plate stock replacing the unit's standard set
    pub plates: Option<Vec<f64>>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            unit: WeightUnit::Kilograms,
            barbell: BarbellType::Olympic,
            attachment_points: DEFAULT_ATTACHMENT_POINTS,
            tolerance: DEFAULT_TOLERANCE,
            output_format: OutputFormat::Text,
            plates: None,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from environment
    ///
    /// Unparseable values fall back to their defaults with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            unit: env_parse_or(ENV_UNIT, defaults.unit),
            barbell: env_parse_or(ENV_BARBELL, defaults.barbell),
            attachment_points: env_parse_or(ENV_ATTACHMENT_POINTS, defaults.attachment_points),
            tolerance: env_parse_or(ENV_TOLERANCE, defaults.tolerance),
            output_format: env::var(ENV_OUTPUT_FORMAT)
                .map_or(defaults.output_format, |value| {
                    OutputFormat::from_str_param(&value)
                }),
            plates: env::var(ENV_PLATES)
                .ok()
                .and_then(|value| match parse_plate_list(&value) {
                    Ok(plates) => Some(plates),
                    Err(e) => {
                        warn!(key = ENV_PLATES, value = %value, error = %e, "Ignoring invalid plate stock");
                        None
                    }
                }),
        }
    }

    /// Check value ranges and equipment availability
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `attachment_points` is zero
    /// - `tolerance` is negative or not finite
    /// - the configured barbell is not stocked in the configured unit
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attachment_points == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "attachment points must be at least 1".to_owned(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "tolerance {} must be a non-negative number",
                self.tolerance
            )));
        }
        if self.barbell.weight(self.unit).is_none() {
            return Err(ConfigError::Unavailable(format!(
                "{} is not available in {}",
                self.barbell.display_name(),
                self.unit
            )));
        }
        Ok(())
    }

    /// [`validate`](Self::validate) for a run that may override the bar
    ///
    /// An explicit base weight replaces the catalog bar, so an unstocked bar
    /// is not an error then.
    ///
    /// # Errors
    ///
    /// Returns any other `ConfigError` from [`validate`](Self::validate)
    pub fn validate_for(&self, base_override: Option<f64>) -> Result<(), ConfigError> {
        match self.validate() {
            Err(ConfigError::Unavailable(_)) if base_override.is_some() => Ok(()),
            result => result,
        }
    }

    /// Base weight of the configured barbell
    ///
    /// # Errors
    ///
    /// Returns an error if the barbell is not stocked in the configured unit
    pub fn barbell_weight(&self) -> AppResult<f64> {
        Ok(self.barbell.in_unit(self.unit)?.weight)
    }

    /// Plate table: `custom` if given, else the configured stock, else the unit's standard set
    ///
    /// # Errors
    ///
    /// Returns an error with `ConfigInvalid` if the plate list fails table validation
    pub fn denomination_table(&self, custom: Option<&[f64]>) -> AppResult<DenominationTable> {
        match custom.or(self.plates.as_deref()) {
            Some(plates) => Ok(DenominationTable::new(plates.iter().copied())?),
            None => Ok(DenominationTable::standard(self.unit)),
        }
    }

    /// Build a request for `target` on the configured bar (or `base_override`)
    ///
    /// The request is not validated here; the resolver validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the configured barbell is
    /// not stocked in the configured unit
    pub fn request_for(&self, target: f64, base_override: Option<f64>) -> AppResult<LoadRequest> {
        let base = match base_override {
            Some(base) => base,
            None => self.barbell_weight()?,
        };
        Ok(LoadRequest::new(target, base)
            .with_attachment_points(self.attachment_points)
            .with_tolerance(self.tolerance))
    }
}

/// Parse a comma-separated plate list (`"25, 20, 2.5"`)
///
/// # Errors
///
/// Returns `ConfigError::Parse` if any entry is not a number or the list is empty
pub fn parse_plate_list(value: &str) -> Result<Vec<f64>, ConfigError> {
    let plates = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<f64>()
                .map_err(|e| ConfigError::Parse(format!("plate '{entry}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if plates.is_empty() {
        return Err(ConfigError::Parse("plate list is empty".to_owned()));
    }
    Ok(plates)
}

fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!(key, value = %value, error = %e, default = %default, "Invalid configuration value, using default");
            default
        }),
        Err(_) => default,
    }
}
