//! End-to-end checks against hand-computed reference values.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use isobar_core::calculations::{blend, boussinesq, depth_check, westergaard};
use isobar_core::input::{parse_list, parse_number};
use isobar_core::{calculate, BlendWeights, DepthGrid, PointLoad, SoilProfile, StressAnalysisInput};

fn reference_input() -> StressAnalysisInput {
    StressAnalysisInput::new(
        "Reference",
        PointLoad::centred(100.0),
        10.0,
        SoilProfile::uniform(0.3).unwrap(),
        100.0,
        1.0,
    )
}

#[test]
fn boussinesq_and_westergaard_at_one_metre() {
    let boussinesq = boussinesq::profile(100.0, &[1.0], 0.0);
    assert_relative_eq!(boussinesq[0], 47.75, epsilon = 1e-2);

    let soil = SoilProfile::uniform(0.3).unwrap();
    let westergaard = westergaard::profile(100.0, &[1.0], 0.0, &soil);
    // η² = 0.4 / 1.4, I5 = 1 / (2π η²) ≈ 0.557
    let i5 = 1.0 / (2.0 * PI * (0.4 / 1.4));
    assert_relative_eq!(i5, 0.557, epsilon = 1e-3);
    assert_relative_eq!(westergaard[0], 100.0 * i5, max_relative = 1e-12);
}

#[test]
fn layered_lookup_follows_boundaries() {
    let soil = SoilProfile::from_parallel(&[0.0, 2.0, 5.0], &[0.3, 0.35, 0.4]).unwrap();
    assert_eq!(soil.poisson_ratio_at(1.0), 0.3);
    assert_eq!(soil.poisson_ratio_at(3.0), 0.35);
    assert_eq!(soil.poisson_ratio_at(6.0), 0.4);
}

#[test]
fn verdict_flips_at_interpolated_stress() {
    let result = calculate(&reference_input()).unwrap();
    let stress = result.check.stress_kpa;

    let mut at_threshold = reference_input();
    at_threshold.bearing_capacity_kpa = stress;
    assert!(!calculate(&at_threshold).unwrap().check.exceeds_capacity);

    let mut below = reference_input();
    below.bearing_capacity_kpa = stress - 1e-6;
    assert!(calculate(&below).unwrap().check.exceeds_capacity);
}

#[test]
fn manual_pipeline_matches_calculate() {
    let input = reference_input().with_weighted(BlendWeights::new(0.4, 0.6));
    let result = calculate(&input).unwrap();

    let grid = DepthGrid::from_max_depth(10.0).unwrap();
    let b = boussinesq::profile(100.0, grid.as_slice(), 0.0);
    let w = westergaard::profile(100.0, grid.as_slice(), 0.0, &input.layers);
    let blended = blend::weighted(&b, &w, 0.4, 0.6).unwrap();
    let check = depth_check::check(&blended, grid.as_slice(), 1.0, 100.0).unwrap();

    assert_eq!(result.depths_m, grid.as_slice());
    assert_eq!(result.boussinesq_kpa, b);
    assert_eq!(result.westergaard_kpa, w);
    assert_eq!(result.weighted_kpa.as_deref(), Some(blended.as_slice()));
    assert_eq!(result.check, check);
}

#[test]
fn text_fields_feed_an_analysis() {
    let boundaries = parse_list("layers", "0, 2, 5").unwrap();
    let ratios = parse_list("poisson", "0.3 0.35 0.4").unwrap();
    let load = parse_number("load", "250").unwrap();

    let layers = SoilProfile::from_parallel(&boundaries, &ratios).unwrap();
    let input = StressAnalysisInput::new("Form", PointLoad::new(load, 1.0, 1.0), 8.0, layers, 80.0, 2.0);
    let result = calculate(&input).unwrap();

    assert_eq!(result.depths_m.len(), 100);
    assert_relative_eq!(result.radial_offset_m, 2.0_f64.sqrt());
}

#[test]
fn mismatched_layer_lists_fail_once() {
    let boundaries = parse_list("layers", "0 2").unwrap();
    let ratios = parse_list("poisson", "0.3").unwrap();
    let err = SoilProfile::from_parallel(&boundaries, &ratios).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn repeated_runs_are_identical() {
    let input = reference_input().with_weighted(BlendWeights::default());
    let first = calculate(&input).unwrap();
    for _ in 0..3 {
        assert_eq!(calculate(&input).unwrap(), first);
    }
}
