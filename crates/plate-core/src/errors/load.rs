// ABOUTME: Resolver validation errors raised before any load computation starts
// ABOUTME: Separates bad user requests from misconfigured denomination tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Validation failures for the weight-loading resolver.
///
/// The resolver is a pure function, so these are the only failure modes.
/// Both are raised before computation; callers never receive a partial or
/// zero-filled solution in their place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request cannot be solved (target below base, zero attachment
    /// points, negative tolerance, non-finite weights)
    #[error("Invalid load request: {reason}")]
    InvalidRequest {
        /// What was wrong with the request
        reason: String,
    },

    /// The denomination table is unusable (empty, non-positive, duplicate,
    /// or sub-resolution entries)
    #[error("Invalid denomination table: {reason}")]
    InvalidTable {
        /// What was wrong with the table
        reason: String,
    },
}

impl LoadError {
    /// Create an `InvalidRequest` error
    #[must_use]
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidTable` error
    #[must_use]
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            reason: reason.into(),
        }
    }

    /// True when the caller's request (user input) was rejected
    #[must_use]
    pub const fn is_request_error(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }

    /// True when the denomination table (configuration) was rejected
    #[must_use]
    pub const fn is_table_error(&self) -> bool {
        matches!(self, Self::InvalidTable { .. })
    }

    /// The human-readable reason without the error kind prefix
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidRequest { reason } | Self::InvalidTable { reason } => reason,
        }
    }
}
