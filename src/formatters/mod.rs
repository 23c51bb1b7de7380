// ABOUTME: Output format abstraction for rendering calculator reports and errors
// ABOUTME: Supports plain text (default), JSON, and TOON (compact tabular text)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Every report the CLI prints is `Serialize` (for JSON/TOON) and
//! [`PlainText`] (for terminals). Errors render through [`format_error`], as
//! an [`ErrorResponse`] body in the machine formats.
//!
//! ## Supported Formats
//!
//! - **Text**: Default, human-readable
//! - **JSON**: Machine-readable, stable field names
//! - **TOON**: indentation-based text with one row per plate, requires the
//!   `toon` feature

/// Report types rendered by the formatters
pub mod reports;

pub use reports::{BarbellCatalogReport, PlateCatalogReport, QuickPickReport, SolveReport};

use plate_core::errors::ErrorResponse;
use plate_core::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON, for scripts and other tools
    Json,
    /// TOON, a compact line-oriented rendering of the same fields as JSON
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "toon" => Self::Toon,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable rendering for terminal output
pub trait PlainText {
    /// Render as multi-line text (no trailing newline)
    fn to_plain_text(&self) -> String;
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Format a report in the requested output format
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails (for JSON format)
/// - TOON encoding fails, or the `toon` feature is disabled (for TOON format)
pub fn format_output<T: Serialize + PlainText>(
    data: &T,
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(data.to_plain_text()),
        OutputFormat::Json => encode_json(data),
        OutputFormat::Toon => encode_toon(data),
    }
}

/// Render an error for stderr
///
/// Text is `error: <message>`. JSON and TOON wrap the code, message, and
/// details in an [`ErrorResponse`]; if that encoding fails the text form is
/// used instead.
#[must_use]
pub fn format_error(error: &AppError, format: OutputFormat) -> String {
    let plain = format!("error: {error}");
    let response = ErrorResponse::from(error);
    let encoded = match format {
        OutputFormat::Text => return plain,
        OutputFormat::Json => encode_json(&response),
        OutputFormat::Toon => encode_toon(&response),
    };
    encoded.unwrap_or(plain)
}

fn encode_json<T: Serialize>(data: &T) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Json,
    })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON output requires the `toon` feature".to_owned(),
        format: OutputFormat::Toon,
    })
}
