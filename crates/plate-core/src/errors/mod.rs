// ABOUTME: Unified error handling for the plate calculator workspace
// ABOUTME: Defines resolver errors, application error codes, and serializable error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Two layers:
//!
//! - [`LoadError`] is what the resolver returns. It only ever describes a
//!   validation failure, raised before computation begins.
//! - [`AppError`] is what callers (the CLI, or any embedding service) carry
//!   around. It attaches a stable [`ErrorCode`] so front ends can map a
//!   failure to a user-facing message without string matching.

mod load;

pub use load::LoadError;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request input was rejected
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A value could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric value is outside its acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration is invalid (includes bad denomination tables)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Output serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Process exit code for command-line front ends
    ///
    /// Follows the BSD `sysexits.h` convention: usage/data errors versus
    /// configuration and internal software errors.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput | Self::InvalidFormat | Self::ValueOutOfRange => 65,
            Self::ConfigInvalid => 78,
            Self::SerializationError => 70,
        }
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured details
    pub details: serde_json::Value,
    /// Source error for error chaining
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Value outside the acceptable range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<LoadError> for AppError {
    fn from(error: LoadError) -> Self {
        let (code, kind) = match &error {
            LoadError::InvalidRequest { .. } => (ErrorCode::InvalidInput, "invalid_request"),
            LoadError::InvalidTable { .. } => (ErrorCode::ConfigInvalid, "invalid_table"),
        };
        Self::new(code, error.reason().to_owned())
            .with_details(serde_json::json!({ "kind": kind }))
            .with_source(error)
    }
}

/// Serializable error payload for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Error body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
                details: error.details.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_maps_to_error_code() {
        let request: AppError = LoadError::invalid_request("target below base").into();
        assert_eq!(request.code, ErrorCode::InvalidInput);
        assert_eq!(request.message, "target below base");
        assert!(request.source().is_some());

        assert_eq!(request.details["kind"], "invalid_request");

        let table: AppError = LoadError::invalid_table("empty").into();
        assert_eq!(table.code, ErrorCode::ConfigInvalid);
        assert_eq!(table.details["kind"], "invalid_table");
    }

    #[test]
    fn test_error_response_serialization() {
        let error: AppError = LoadError::invalid_request("bad weight").into();
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap_or_default();

        assert!(json.contains("INVALID_INPUT"));
        assert!(json.contains("\"kind\":\"invalid_request\""));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let error = AppError::out_of_range("tolerance -1");
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap_or_default();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_exit_codes_distinguish_user_and_config_errors() {
        assert_eq!(ErrorCode::InvalidInput.exit_code(), 65);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::SerializationError.exit_code(), 70);
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::out_of_range("tolerance -1");
        assert_eq!(
            error.to_string(),
            "The provided value is outside the acceptable range: tolerance -1"
        );
    }
}
