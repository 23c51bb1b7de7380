// ABOUTME: Catalog models for weight units, barbells, and plate colours
// ABOUTME: Static equipment data consumed by the resolver and its front ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weight unit (kilograms or pounds) and its standard plate set
mod unit;

/// Barbell catalog
mod barbell;

/// IWF plate colour coding
mod plate_color;

pub use barbell::{Barbell, BarbellType};
pub use plate_color::PlateColor;
pub use unit::WeightUnit;
