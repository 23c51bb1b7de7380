// ABOUTME: Weight-loading resolver crate: denomination tables, requests, and greedy solving
// ABOUTME: Computes plates per attachment point for a target total load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Plate Solver
//!
//! Given a target total load, a fixed base (bar) weight, and a table of
//! available plate denominations, compute how many of each plate goes on every
//! attachment point (sleeve) to reach, or best approximate, the target.
//!
//! ```rust
//! use plate_core::WeightUnit;
//! use plate_solver::{DenominationTable, LoadRequest, LoadResolver};
//!
//! # fn main() -> Result<(), plate_core::LoadError> {
//! let table = DenominationTable::standard(WeightUnit::Kilograms);
//! let request = LoadRequest::new(100.0, 20.0);
//! let solution = LoadResolver::solve(&table, &request)?;
//!
//! assert!(solution.is_exact());
//! assert_eq!(solution.count_for(25.0), 1);
//! assert_eq!(solution.count_for(15.0), 1);
//! # Ok(())
//! # }
//! ```
//!
//! The solver is pure and allocation-light; it is safe to call on every
//! keystroke of a weight input.

/// Resolution grid shared by the table and the resolver
mod grid;

/// Validated, descending denomination catalog
pub mod table;

/// Load request input
pub mod request;

/// Solver output
pub mod solution;

/// Greedy resolver
pub mod resolver;

/// Pure projections of a solution for presentation layers
pub mod summary;

pub use request::LoadRequest;
pub use resolver::LoadResolver;
pub use solution::{LoadSolution, PlateCount};
pub use summary::{format_weight, LoadSummary};
pub use table::DenominationTable;
