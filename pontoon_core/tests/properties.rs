//! Property-based tests for design evaluation using proptest.

use pontoon_core::{evaluate, DesignInput, DesignStatus};
use proptest::prelude::*;

fn design_strategy() -> impl Strategy<Value = DesignInput> {
    (
        (1.0..2000.0f64, 0.5..4.0f64, 5.0..100.0f64),
        (2.0..60.0f64, 1.0..40.0f64, 0.0..=100.0f64),
        (0.5..4.0f64, 0.0..0.2f64, 60.0..66.0f64),
        (0.0..12.0f64, 0u32..12, 0.0..3.0f64),
    )
        .prop_map(
            |(
                (payload_lb, safety_factor, submersion_pct),
                (diameter_in, length_ft, cone_pct),
                (foam_density_pcf, coating_weight_psf, water_density_pcf),
                (cross_beam_length_ft, num_cross_beams, tube_weight_plf),
            )| DesignInput {
                payload_lb,
                safety_factor,
                submersion_pct,
                diameter_in,
                length_ft,
                cone_pct,
                foam_density_pcf,
                coating_weight_psf,
                water_density_pcf,
                cross_beam_length_ft,
                num_cross_beams,
                tube_weight_plf,
            },
        )
}

fn rel_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1e-12)
}

proptest! {
    /// Per-pontoon volume is cylinder + cone, and both pontoons double it.
    #[test]
    fn volume_additivity(input in design_strategy()) {
        let r = evaluate(&input).unwrap();
        prop_assert!(rel_close(r.volume_per_pontoon_cuft, r.cylinder_volume_cuft + r.cone_volume_cuft));
        prop_assert!(rel_close(r.total_volume_both_cuft, 2.0 * r.volume_per_pontoon_cuft));
        prop_assert!(rel_close(r.total_surface_area_both_sqft, 2.0 * r.surface_area_per_pontoon_sqft));
    }

    /// Status is VIABLE exactly when buoyancy covers weight × safety factor.
    #[test]
    fn status_consistency(input in design_strategy()) {
        let r = evaluate(&input).unwrap();
        let clears = r.total_buoyant_force_lb >= r.total_boat_weight_lb * input.safety_factor;
        prop_assert_eq!(r.status == DesignStatus::Viable, clears);
    }

    /// A larger diameter, all else fixed, means more volume, buoyancy and margin.
    #[test]
    fn diameter_monotonicity(input in design_strategy(), extra in 0.5..24.0f64) {
        let larger = DesignInput { diameter_in: input.diameter_in + extra, ..input };
        let a = evaluate(&input).unwrap();
        let b = evaluate(&larger).unwrap();
        prop_assert!(b.volume_per_pontoon_cuft > a.volume_per_pontoon_cuft);
        prop_assert!(b.total_buoyant_force_lb > a.total_buoyant_force_lb);
        prop_assert!(b.actual_safety_factor > a.actual_safety_factor);
    }

    /// Actual safety factor and reserve buoyancy are both derived from the same totals.
    #[test]
    fn safety_measures_agree(input in design_strategy()) {
        let r = evaluate(&input).unwrap();
        prop_assert!(rel_close(r.actual_safety_factor * r.total_boat_weight_lb, r.total_buoyant_force_lb));
        prop_assert!(rel_close(r.reserve_buoyancy_lb + r.total_boat_weight_lb, r.total_buoyant_force_lb));
    }
}
