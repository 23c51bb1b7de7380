// ABOUTME: Core types and constants for the plate calculator workspace
// ABOUTME: Foundation crate with error handling, catalogs, and numeric constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Plate Core
//!
//! Foundation crate providing shared types and constants for the plate
//! calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `LoadError` for resolver validation, `AppError`/`ErrorCode` for callers
//! - **constants**: Standard plate sets, barbell weights, tolerance and resolution
//! - **models**: Weight units, barbell catalog, and IWF plate colour coding

/// Unified error handling with resolver errors and application error codes
pub mod errors;

/// Catalog and numeric constants organized by domain
pub mod constants;

/// Catalog models (`WeightUnit`, `BarbellType`, `PlateColor`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, LoadError};
pub use models::{Barbell, BarbellType, PlateColor, WeightUnit};
