//! # Hydrostatics & Sizing Formulas
//!
//! Buoyancy, displacement and draft relations for a twin-pontoon hull, plus
//! the cube-root sizing relation used by the optimizer.
//!
//! ## Notation
//!
//! - `V_sub` = Submerged volume of one pontoon, ft³
//! - `ρ_w` = Water density, lb/ft³
//! - `f` = Submersion fraction (0..1)
//! - `W` = Total boat weight, lb
//! - `SF` = Safety factor
//!
//! Divisor-bearing relations return `None` for a zero divisor so callers can
//! turn it into a typed error.

use std::f64::consts::PI;

/// Number of pontoons in the hull
pub const PONTOON_COUNT: f64 = 2.0;

/// Length-to-diameter ratio assumed by the sizing heuristic
pub const SIZING_LD_RATIO: f64 = 4.0;

/// Total buoyant force of both pontoons
///
/// # Formula
/// F_b = 2 × V_sub × ρ_w
///
/// # Example
/// ```rust
/// use pontoon_core::equations::hydrostatics::buoyant_force;
///
/// // 2 ft³ submerged per pontoon in 64 pcf sea water
/// assert_eq!(buoyant_force(2.0, 64.0), 256.0);
/// ```
#[inline]
pub fn buoyant_force(submerged_volume_per_pontoon: f64, water_density: f64) -> f64 {
    PONTOON_COUNT * submerged_volume_per_pontoon * water_density
}

/// Displacement the hull must provide to carry `weight` with margin
///
/// # Formula
/// D_req = W × SF
#[inline]
pub fn required_displacement(weight: f64, safety_factor: f64) -> f64 {
    weight * safety_factor
}

/// Draft as a linear fraction of the pontoon diameter
///
/// # Formula
/// T = d × f
///
/// This is a linear approximation, not a solve of the true submerged
/// circular-segment area.
#[inline]
pub fn linear_draft(diameter_ft: f64, submersion_fraction: f64) -> f64 {
    diameter_ft * submersion_fraction
}

/// Realized safety factor, buoyant force over raw weight
///
/// # Formula
/// SF_actual = F_b / W
///
/// Returns `None` when `weight` is zero.
#[inline]
pub fn safety_factor_ratio(buoyant_force: f64, weight: f64) -> Option<f64> {
    if weight == 0.0 {
        None
    } else {
        Some(buoyant_force / weight)
    }
}

/// Buoyant force in excess of the boat's weight
///
/// # Formula
/// R = F_b − W
#[inline]
pub fn reserve_buoyancy(buoyant_force: f64, weight: f64) -> f64 {
    buoyant_force - weight
}

/// Submerged volume one pontoon needs to carry its half of `displacement`
///
/// # Formula
/// V = (D / 2) / (ρ_w × f)
///
/// Returns `None` when `ρ_w × f` is zero.
#[inline]
pub fn required_volume_per_pontoon(displacement: f64, water_density: f64, submersion_fraction: f64) -> Option<f64> {
    let divisor = water_density * submersion_fraction;
    if divisor == 0.0 {
        None
    } else {
        Some((displacement / PONTOON_COUNT) / divisor)
    }
}

/// Diameter of a cone-less pontoon with L = 4D holding `volume`
///
/// # Derivation
/// π (D/2)² × 4D = π D³ = V  →  D = (V / π)^(1/3)
///
/// # Example
/// ```rust
/// use pontoon_core::equations::hydrostatics::sizing_diameter;
/// use std::f64::consts::PI;
///
/// assert!((sizing_diameter(PI) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn sizing_diameter(volume: f64) -> f64 {
    (volume / PI).cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_factor_zero_weight() {
        assert_eq!(safety_factor_ratio(100.0, 0.0), None);
        assert_eq!(safety_factor_ratio(300.0, 150.0), Some(2.0));
    }

    #[test]
    fn test_required_volume_zero_divisor() {
        assert_eq!(required_volume_per_pontoon(100.0, 0.0, 0.6), None);
        assert_eq!(required_volume_per_pontoon(100.0, 64.0, 0.0), None);
    }

    #[test]
    fn test_required_volume() {
        // (252 / 2) / (64 × 0.6) = 3.28125
        let v = required_volume_per_pontoon(252.0, 64.0, 0.6).unwrap();
        assert!((v - 3.28125).abs() < 1e-12);
    }

    #[test]
    fn test_sizing_cylinder_holds_volume() {
        let d = sizing_diameter(3.28125);
        let l = d * SIZING_LD_RATIO;
        let v = PI * (d / 2.0).powi(2) * l;
        assert!((v - 3.28125).abs() < 1e-9);
    }

    #[test]
    fn test_linear_draft() {
        assert!((linear_draft(1.0, 0.6) - 0.6).abs() < 1e-12);
    }
}
