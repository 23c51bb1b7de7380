// ABOUTME: Configuration error types for calculator settings validation
// ABOUTME: Defines error variants for out-of-range and unavailable configuration values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use plate_core::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Selected equipment is not stocked in the configured unit
    #[error("Unavailable equipment: {0}")]
    Unavailable(String),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::Unavailable(_) => ErrorCode::ConfigInvalid,
            ConfigError::Parse(_) => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
