// ABOUTME: Constants re-exported from plate-core for library consumers
// ABOUTME: Plate sets, barbell weights, resolver defaults, and quick-pick targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded catalog values live in `plate-core`; environment overrides are
//! handled by [`crate::config`].

pub use plate_core::constants::*;
