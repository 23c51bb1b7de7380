// ABOUTME: Error handling re-exports for the plate calculator library and binary
// ABOUTME: Keeps one error vocabulary across the workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error types live in `plate-core` so the solver crate can use them
//! without depending on this crate. See [`plate_core::errors`].

pub use plate_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, LoadError,
};
