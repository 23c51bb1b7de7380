// ABOUTME: Integration tests for calculator configuration loaded from environment variables
// ABOUTME: Tests run serially because they mutate process-wide PLATE_CALC_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use plate_calculator::config::environment::{
    parse_plate_list, ENV_ATTACHMENT_POINTS, ENV_BARBELL, ENV_OUTPUT_FORMAT, ENV_PLATES,
    ENV_TOLERANCE, ENV_UNIT,
};
use plate_calculator::config::{CalculatorConfig, ConfigError};
use plate_calculator::errors::{AppError, ErrorCode};
use plate_calculator::formatters::OutputFormat;
use plate_calculator::models::{BarbellType, WeightUnit};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 6] = [
    ENV_UNIT,
    ENV_BARBELL,
    ENV_ATTACHMENT_POINTS,
    ENV_TOLERANCE,
    ENV_OUTPUT_FORMAT,
    ENV_PLATES,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = CalculatorConfig::from_env();

    assert_eq!(config, CalculatorConfig::default());
    assert_eq!(config.unit, WeightUnit::Kilograms);
    assert_eq!(config.barbell, BarbellType::Olympic);
    assert_eq!(config.attachment_points, 2);
    assert!((config.tolerance - 0.01).abs() < f64::EPSILON);
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.plates.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(ENV_UNIT, "LBS");
    env::set_var(ENV_BARBELL, "ez");
    env::set_var(ENV_ATTACHMENT_POINTS, "1");
    env::set_var(ENV_TOLERANCE, "0.25");
    env::set_var(ENV_OUTPUT_FORMAT, "json");
    env::set_var(ENV_PLATES, "45, 25, 10, 5");

    let config = CalculatorConfig::from_env();
    clear_env();

    assert_eq!(config.unit, WeightUnit::Pounds);
    assert_eq!(config.barbell, BarbellType::Ez);
    assert_eq!(config.attachment_points, 1);
    assert!((config.tolerance - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.plates, Some(vec![45.0, 25.0, 10.0, 5.0]));
    assert!((config.barbell_weight().unwrap() - 20.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_invalid_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(ENV_UNIT, "stone");
    env::set_var(ENV_BARBELL, "safety-squat");
    env::set_var(ENV_ATTACHMENT_POINTS, "two");
    env::set_var(ENV_TOLERANCE, "tiny");
    env::set_var(ENV_PLATES, "25,heavy");

    let config = CalculatorConfig::from_env();
    clear_env();

    assert_eq!(config, CalculatorConfig::default());
}

#[test]
fn test_validate_rejects_out_of_range_values() {
    let zero_points = CalculatorConfig {
        attachment_points: 0,
        ..CalculatorConfig::default()
    };
    assert!(matches!(
        zero_points.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let negative_tolerance = CalculatorConfig {
        tolerance: -1.0,
        ..CalculatorConfig::default()
    };
    assert!(matches!(
        negative_tolerance.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_hex_bar_unavailable_in_pounds() {
    let config = CalculatorConfig {
        unit: WeightUnit::Pounds,
        barbell: BarbellType::Hex,
        ..CalculatorConfig::default()
    };

    let error = config.validate().unwrap_err();
    assert!(matches!(error, ConfigError::Unavailable(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
    assert!(config.barbell_weight().is_err());

    // An explicit base weight does not need the catalog bar
    let request = config.request_for(135.0, Some(45.0)).unwrap();
    assert!((request.base_weight - 45.0).abs() < f64::EPSILON);
}

#[test]
fn test_validate_for_base_override() {
    let hex_in_pounds = CalculatorConfig {
        unit: WeightUnit::Pounds,
        barbell: BarbellType::Hex,
        ..CalculatorConfig::default()
    };
    assert!(matches!(
        hex_in_pounds.validate_for(None),
        Err(ConfigError::Unavailable(_))
    ));
    assert!(hex_in_pounds.validate_for(Some(45.0)).is_ok());

    let zero_points = CalculatorConfig {
        attachment_points: 0,
        ..hex_in_pounds
    };
    assert!(matches!(
        zero_points.validate_for(Some(45.0)),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_request_uses_configured_bar_and_points() {
    let config = CalculatorConfig {
        barbell: BarbellType::Women,
        attachment_points: 4,
        tolerance: 0.1,
        ..CalculatorConfig::default()
    };
    let request = config.request_for(55.0, None).unwrap();

    assert!((request.target_total_weight - 55.0).abs() < f64::EPSILON);
    assert!((request.base_weight - 15.0).abs() < f64::EPSILON);
    assert_eq!(request.attachment_points, 4);
    assert!((request.tolerance - 0.1).abs() < f64::EPSILON);
}

#[test]
fn test_denomination_table_precedence() {
    let config = CalculatorConfig {
        plates: Some(vec![20.0, 10.0]),
        ..CalculatorConfig::default()
    };

    assert_eq!(config.denomination_table(None).unwrap().units(), &[20.0, 10.0]);
    assert_eq!(
        config.denomination_table(Some(&[5.0, 2.5])).unwrap().units(),
        &[5.0, 2.5]
    );
    assert_eq!(
        CalculatorConfig::default()
            .denomination_table(None)
            .unwrap()
            .len(),
        8
    );

    let error = config.denomination_table(Some(&[10.0, 0.0])).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_parse_plate_list() {
    assert_eq!(
        parse_plate_list(" 25,20 ,2.5,").unwrap(),
        vec![25.0, 20.0, 2.5]
    );
    assert!(matches!(parse_plate_list(""), Err(ConfigError::Parse(_))));
    assert!(matches!(
        parse_plate_list("25,x"),
        Err(ConfigError::Parse(_))
    ));
}
