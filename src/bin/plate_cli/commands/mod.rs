// ABOUTME: Command modules for plate-cli
// ABOUTME: Each command builds a report and returns it rendered in the configured format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod quick;
pub mod solve;
