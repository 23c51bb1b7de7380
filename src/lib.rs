// ABOUTME: Main library entry point for the plate calculator
// ABOUTME: Re-exports the resolver and adds configuration, logging, and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Plate Calculator
//!
//! Works out which plates go on each side of a bar to reach a target load.
//!
//! ## Architecture
//!
//! - **`plate-core`**: error types, plate and barbell catalogs, constants
//! - **`plate-solver`**: the greedy weight-loading resolver
//! - **this crate**: environment configuration, logging setup, output
//!   formatting, and the `plate-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use plate_calculator::config::CalculatorConfig;
//! use plate_calculator::errors::AppResult;
//! use plate_calculator::solver::{LoadResolver, LoadSummary};
//!
//! fn main() -> AppResult<()> {
//!     let config = CalculatorConfig::default();
//!     let table = config.denomination_table(None)?;
//!     let request = config.request_for(100.0, None)?;
//!
//!     let solution = LoadResolver::solve(&table, &request)?;
//!     let summary = LoadSummary::from_solution(&solution, config.unit);
//!     assert_eq!(summary.description, "25 kg × 1, 15 kg × 1 per side (100 kg total)");
//!     Ok(())
//! }
//! ```

/// Unified error handling re-exported from `plate-core`
pub mod errors;

/// Catalog and numeric constants re-exported from `plate-core`
pub mod constants;

/// Catalog models re-exported from `plate-core`
pub mod models {
    pub use plate_core::models::*;
}

/// Weight-loading resolver re-exported from `plate-solver`
pub mod solver {
    pub use plate_solver::*;
}

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Output format abstraction (text, JSON, TOON)
pub mod formatters;

/// Operations behind each CLI command
pub mod calculator;
