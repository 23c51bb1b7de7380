// ABOUTME: Configuration management module for calculator defaults
// ABOUTME: Environment-only configuration with validation and AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the plate calculator
//!
//! Configuration is read from environment variables only (no config files):
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PLATE_CALC_UNIT` | `kg` | Weight unit (`kg`, `lbs`) |
//! | `PLATE_CALC_BARBELL` | `olympic` | Default bar (`olympic`, `women`, `ez`, `hex`) |
//! | `PLATE_CALC_ATTACHMENT_POINTS` | `2` | Sides the plates are split across |
//! | `PLATE_CALC_TOLERANCE` | `0.01` | Per-side leftover still treated as exact |
//! | `PLATE_CALC_OUTPUT_FORMAT` | `text` | `text`, `json`, or `toon` |
//! | `PLATE_CALC_PLATES` | unit standard | Comma-separated plate stock |

/// Calculator configuration loaded from the environment
pub mod environment;

/// Configuration error types
pub mod error;

pub use environment::CalculatorConfig;
pub use error::ConfigError;
