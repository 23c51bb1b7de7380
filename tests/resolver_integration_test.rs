// ABOUTME: Integration tests for the plate-loading resolver through the public crate API
// ABOUTME: Covers the worked loading scenarios and the invariants every solution must hold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use plate_calculator::errors::{AppError, ErrorCode, LoadError};
use plate_calculator::models::WeightUnit;
use plate_calculator::solver::summary::{
    describe, items_per_point, loaded_weight_total, total_item_count,
};
use plate_calculator::solver::{DenominationTable, LoadRequest, LoadResolver, LoadSolution};

const EPS: f64 = 1e-9;

fn kg_table() -> DenominationTable {
    DenominationTable::standard(WeightUnit::Kilograms)
}

fn kg_table_without_half() -> DenominationTable {
    DenominationTable::new([25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25]).unwrap()
}

fn counts(solution: &LoadSolution) -> Vec<(f64, u32)> {
    solution
        .per_point()
        .iter()
        .map(|plate| (plate.denomination, plate.count))
        .collect()
}

fn assert_invariants(table: &DenominationTable, request: &LoadRequest, solution: &LoadSolution) {
    let per_point: f64 = solution.per_point().iter().map(|p| p.weight()).sum();
    let reconstructed = f64::from(solution.attachment_points()).mul_add(per_point, request.base_weight);

    assert!((solution.achieved_total_weight() - reconstructed).abs() < 1e-6);
    assert!(solution.achieved_total_weight() >= request.base_weight - EPS);
    assert!(solution.achieved_total_weight() <= request.target_total_weight + 1e-6);
    assert!(solution.delta() >= 0.0);
    assert!(
        (solution.delta() - (request.target_total_weight - solution.achieved_total_weight())).abs()
            < 1e-6
    );
    assert!(solution.shortfall_per_point() < table.smallest() + EPS);
    for plate in solution.per_point() {
        assert!(plate.count > 0);
        assert!(table.contains(plate.denomination));
    }
}

// === Worked scenarios ===

#[test]
fn test_scenario_olympic_bar_100kg() {
    let request = LoadRequest::new(100.0, 20.0);
    let solution = LoadResolver::solve(&kg_table(), &request).unwrap();

    assert_eq!(counts(&solution), vec![(25.0, 1), (15.0, 1)]);
    assert!((solution.achieved_total_weight() - 100.0).abs() < EPS);
    assert!(solution.is_exact());
    assert!(solution.delta().abs() < EPS);
}

#[test]
fn test_scenario_full_table_scan_picks_smallest_plate() {
    let request = LoadRequest::new(101.0, 20.0);
    let solution = LoadResolver::solve(&kg_table(), &request).unwrap();

    assert_eq!(counts(&solution), vec![(25.0, 1), (15.0, 1), (0.5, 1)]);
    assert!(solution.is_exact());
    assert!(solution.delta().abs() < EPS);
}

#[test]
fn test_scenario_unreachable_without_half_kilo_plates() {
    let request = LoadRequest::new(101.0, 20.0);
    let solution = LoadResolver::solve(&kg_table_without_half(), &request).unwrap();

    // 40.5 per side: 25 + 15 leaves 0.5, below the 1.25 plate
    assert_eq!(counts(&solution), vec![(25.0, 1), (15.0, 1)]);
    assert!(!solution.is_exact());
    assert!((solution.shortfall_per_point() - 0.5).abs() < EPS);
    assert!((solution.delta() - 1.0).abs() < EPS);
    assert!((solution.achieved_total_weight() - 100.0).abs() < EPS);
}

#[test]
fn test_scenario_single_point_no_base() {
    let table = DenominationTable::new([10.0, 5.0, 2.0, 1.0]).unwrap();
    let request = LoadRequest::new(17.0, 0.0).with_attachment_points(1);
    let solution = LoadResolver::solve(&table, &request).unwrap();

    assert_eq!(counts(&solution), vec![(10.0, 1), (5.0, 1), (2.0, 1)]);
    assert!(solution.shortfall_per_point().abs() < EPS);
    assert!(solution.is_exact());
}

// === Properties ===

#[test]
fn test_invariants_hold_across_kilogram_targets() {
    let table = kg_table();
    // 20.0 to 300.0 in 0.25 steps
    for step in 0..=1120_u32 {
        let target = 20.0 + f64::from(step) * 0.25;
        let request = LoadRequest::new(target, 20.0);
        let solution = LoadResolver::solve(&table, &request).unwrap();
        assert_invariants(&table, &request, &solution);
    }
}

#[test]
fn test_invariants_hold_for_pounds_and_odd_point_counts() {
    let table = DenominationTable::standard(WeightUnit::Pounds);
    for points in 1..=4_u32 {
        for step in 0..=200_u32 {
            let target = 45.0 + f64::from(step) * 2.5;
            let request = LoadRequest::new(target, 45.0).with_attachment_points(points);
            let solution = LoadResolver::solve(&table, &request).unwrap();
            assert_invariants(&table, &request, &solution);
        }
    }
}

#[test]
fn test_every_half_kilo_step_is_exact_with_standard_plates() {
    let table = kg_table();
    for step in 0..=560_u32 {
        let target = 20.0 + f64::from(step);
        let solution = LoadResolver::solve(&table, &LoadRequest::new(target, 20.0)).unwrap();
        assert!(solution.is_exact(), "{target} kg should load exactly");
    }
}

#[test]
fn test_pound_plates_weighed_in_kilograms() {
    // 45, 25, 10, 5, 2.5 lb plates in kg; none sit on the thousandths grid
    let table = DenominationTable::new([20.4117, 11.3398, 4.53592, 2.26796, 1.13398]).unwrap();
    let bar = 20.4117;

    // 45 + 25 + 5 lb per side
    let target = 2.0f64.mul_add(20.4117 + 11.3398 + 2.26796, bar);
    let request = LoadRequest::new(target, bar);
    let solution = LoadResolver::solve(&table, &request).unwrap();
    assert_eq!(
        counts(&solution),
        vec![(20.4117, 1), (11.3398, 1), (2.26796, 1)]
    );
    assert!(solution.is_exact());

    for step in 0..=400_u32 {
        let request = LoadRequest::new(bar + f64::from(step) * 0.5, bar);
        let solution = LoadResolver::solve(&table, &request).unwrap();
        assert_invariants(&table, &request, &solution);
    }
}

#[test]
fn test_solve_is_idempotent() {
    let table = kg_table();
    let request = LoadRequest::new(187.5, 20.0);
    let first = LoadResolver::solve(&table, &request).unwrap();
    let second = LoadResolver::solve(&table, &request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_target_equal_to_base_needs_no_plates() {
    let solution = LoadResolver::solve(&kg_table(), &LoadRequest::new(20.0, 20.0)).unwrap();

    assert!(solution.is_unloaded());
    assert!(solution.is_exact());
    assert!(solution.delta().abs() < EPS);
    assert!((solution.achieved_total_weight() - 20.0).abs() < EPS);
    assert_eq!(describe(&solution, WeightUnit::Kilograms), "bar only (20 kg total)");
}

#[test]
fn test_target_below_base_is_rejected() {
    let error = LoadResolver::solve(&kg_table(), &LoadRequest::new(15.0, 20.0)).unwrap_err();
    assert!(error.is_request_error());

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_invalid_requests_are_rejected() {
    let table = kg_table();
    let bad = [
        LoadRequest::new(100.0, 20.0).with_attachment_points(0),
        LoadRequest::new(100.0, 20.0).with_tolerance(-0.1),
        LoadRequest::new(f64::NAN, 20.0),
        LoadRequest::new(100.0, f64::INFINITY),
        LoadRequest::new(100.0, -5.0),
    ];
    for request in bad {
        let result = LoadResolver::solve(&table, &request);
        assert!(
            matches!(result, Err(LoadError::InvalidRequest { .. })),
            "{request:?} should be rejected"
        );
    }
}

#[test]
fn test_invalid_tables_are_rejected() {
    let inputs: [&[f64]; 5] = [&[], &[25.0, 0.0], &[25.0, -5.0], &[25.0, f64::NAN], &[25.0, 25.0]];
    for input in inputs {
        let error = DenominationTable::new(input.iter().copied()).unwrap_err();
        assert!(error.is_table_error(), "{input:?} should be rejected");
        assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
    }
}

#[test]
fn test_unsorted_table_is_walked_largest_first() {
    let table = DenominationTable::new([1.25, 25.0, 5.0, 20.0]).unwrap();
    assert_eq!(table.units(), &[25.0, 20.0, 5.0, 1.25]);

    let solution = LoadResolver::solve(&table, &LoadRequest::new(122.5, 20.0)).unwrap();
    assert_eq!(counts(&solution), vec![(25.0, 2), (1.25, 1)]);
    assert!(solution.is_exact());
}

#[test]
fn test_tolerance_controls_exactness() {
    let table = kg_table_without_half();
    let strict = LoadRequest::new(101.0, 20.0);
    let relaxed = strict.with_tolerance(0.5);

    assert!(!LoadResolver::solve(&table, &strict).unwrap().is_exact());
    assert!(LoadResolver::solve(&table, &relaxed).unwrap().is_exact());
}

#[test]
fn test_summary_counts_for_heavy_load() {
    // 180 per side: 7 × 25 + 5
    let request = LoadRequest::new(380.0, 20.0);
    let solution = LoadResolver::solve(&kg_table(), &request).unwrap();

    assert_eq!(counts(&solution), vec![(25.0, 7), (5.0, 1)]);
    assert_eq!(items_per_point(&solution), 8);
    assert_eq!(total_item_count(&solution), 16);
    assert!((loaded_weight_total(&solution) - 360.0).abs() < EPS);
    assert_eq!(
        describe(&solution, WeightUnit::Kilograms),
        "25 kg × 7, 5 kg × 1 per side (380 kg total)"
    );
}

#[test]
fn test_approximate_description_reports_shortfall() {
    let solution =
        LoadResolver::solve(&kg_table_without_half(), &LoadRequest::new(101.0, 20.0)).unwrap();
    assert_eq!(
        describe(&solution, WeightUnit::Kilograms),
        "25 kg × 1, 15 kg × 1 per side (100 kg total, 1 kg short)"
    );
}
