//! End-to-end scenarios through the public API.

use std::f64::consts::PI;

use pontoon_core::calculations::DerivationStage;
use pontoon_core::{evaluate, optimize, CalcError, DesignInput, DesignStatus};

fn literal_scenario() -> DesignInput {
    DesignInput {
        payload_lb: 100.0,
        safety_factor: 1.8,
        submersion_pct: 60.0,
        diameter_in: 12.0,
        length_ft: 6.0,
        cone_pct: 25.0,
        foam_density_pcf: 1.0,
        coating_weight_psf: 0.03,
        water_density_pcf: 64.0,
        cross_beam_length_ft: 4.0,
        num_cross_beams: 4,
        tube_weight_plf: 0.78,
    }
}

#[test]
fn literal_scenario_geometry() {
    let result = evaluate(&literal_scenario()).unwrap();

    assert_eq!(result.diameter_ft, 1.0);
    assert_eq!(result.radius_ft, 0.5);
    assert!((result.cone_length_ft - 1.5).abs() < 1e-12);
    assert!((result.cylinder_length_ft - 4.5).abs() < 1e-12);

    let cylinder = PI * 0.25 * 4.5;
    let cone = PI * 0.25 * 1.5 / 3.0;
    assert!((result.cylinder_volume_cuft - cylinder).abs() < 1e-12);
    assert!((result.cone_volume_cuft - cone).abs() < 1e-12);
    assert!((result.cylinder_volume_cuft - 3.534).abs() < 0.0005);
    assert!((result.cone_volume_cuft - 0.393).abs() < 0.0005);
    assert!((result.volume_per_pontoon_cuft - 3.927).abs() < 0.0005);
    assert!((result.total_volume_both_cuft - 2.0 * result.volume_per_pontoon_cuft).abs() < 1e-12);
}

#[test]
fn literal_scenario_matches_default_record() {
    assert_eq!(literal_scenario(), DesignInput::default());
}

#[test]
fn literal_scenario_trace_has_four_stages() {
    let result = evaluate(&literal_scenario()).unwrap();
    assert_eq!(result.explanation.len(), 4);
    assert_eq!(result.explanation[0].stage, DerivationStage::Geometry);
    assert!(result.explanation[0].text.contains("3.93 ft³"));
    assert!(result.explanation[3].text.contains("Actual Safety Factor = Buoyant Force / Total Weight"));
}

#[test]
fn optimizer_round_trip_clears_its_target() {
    // The optimizer sizes a cone-less pontoon; evaluate the same shape.
    let held = DesignInput {
        cone_pct: 0.0,
        ..literal_scenario()
    };
    let size = optimize(&held).unwrap();
    assert_eq!(size.diameter_in, 12);
    assert_eq!(size.length_ft, 4.06);

    let result = evaluate(&size.apply_to(&held)).unwrap();
    assert_eq!(result.status, DesignStatus::Viable);
    assert!(result.total_buoyant_force_lb >= result.total_boat_weight_lb * held.safety_factor);
}

#[test]
fn zero_weight_design_reports_division_by_zero() {
    let input = DesignInput {
        payload_lb: 0.0,
        foam_density_pcf: 0.0,
        coating_weight_psf: 0.0,
        tube_weight_plf: 0.0,
        cross_beam_length_ft: 0.0,
        num_cross_beams: 0,
        ..literal_scenario()
    };
    match evaluate(&input) {
        Err(CalcError::DivisionByZero { divisor, .. }) => assert_eq!(divisor, "total_boat_weight"),
        other => panic!("expected DivisionByZero, got {:?}", other),
    }
}

#[test]
fn all_zero_design_reports_division_by_zero() {
    let input = DesignInput {
        payload_lb: 0.0,
        safety_factor: 0.0,
        submersion_pct: 0.0,
        diameter_in: 0.0,
        length_ft: 0.0,
        cone_pct: 0.0,
        foam_density_pcf: 0.0,
        coating_weight_psf: 0.0,
        water_density_pcf: 0.0,
        cross_beam_length_ft: 0.0,
        num_cross_beams: 0,
        tube_weight_plf: 0.0,
    };
    assert_eq!(evaluate(&input).unwrap_err().error_code(), "DIVISION_BY_ZERO");
}

#[test]
fn evaluate_is_idempotent() {
    let input = literal_scenario();
    assert_eq!(evaluate(&input).unwrap(), evaluate(&input).unwrap());
}

#[test]
fn design_file_round_trip() {
    let json = serde_json::to_string(&literal_scenario()).unwrap();
    let parsed = DesignInput::from_json(&json).unwrap();
    assert_eq!(parsed, literal_scenario());
}
