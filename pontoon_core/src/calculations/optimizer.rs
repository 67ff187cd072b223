//! # Diameter/Length Sizing
//!
//! Coarse inverse heuristic: from payload, safety factor, submersion and
//! water density, guess a starting pontoon diameter and length.
//!
//! ## Assumptions
//!
//! - Total weight ≈ payload × 1.4 (pontoons and frame not yet known)
//! - Load shared equally by the two pontoons
//! - Pure cylinder (no cone) with a 4:1 length-to-diameter ratio
//!
//! Geometry and material fields of the input are ignored.
//!
//! ## Example
//!
//! ```rust
//! use pontoon_core::calculations::design::{evaluate, DesignInput};
//! use pontoon_core::calculations::optimizer::optimize;
//!
//! let input = DesignInput::default();
//! let size = optimize(&input).unwrap();
//! assert_eq!(size.diameter_in, 12);
//! assert_eq!(size.length_ft, 4.06);
//!
//! // Caller merges the suggestion into its own record before re-evaluating
//! let revised = size.apply_to(&input);
//! let result = evaluate(&revised).unwrap();
//! println!("{}", result.status);
//! ```

use serde::{Deserialize, Serialize};

use super::design::DesignInput;
use crate::equations::{required_displacement, required_volume_per_pontoon, sizing_diameter, SIZING_LD_RATIO};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Feet, Inches};

/// Multiplier from payload to estimated all-up weight
pub const ESTIMATED_WEIGHT_FACTOR: f64 = 1.4;

/// Suggested pontoon size.
///
/// ## JSON Example
///
/// ```json
/// { "diameter_in": 12, "length_ft": 4.06 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizedSize {
    /// Diameter rounded to the nearest whole inch
    pub diameter_in: i64,

    /// Length rounded to 2 decimal places (ft)
    pub length_ft: f64,
}

impl OptimizedSize {
    /// Copy of `input` with diameter and length replaced by this size.
    pub fn apply_to(&self, input: &DesignInput) -> DesignInput {
        DesignInput {
            diameter_in: self.diameter_in as f64,
            length_ft: self.length_ft,
            ..*input
        }
    }
}

/// Suggest a pontoon diameter and length.
///
/// # Returns
///
/// * `Ok(OptimizedSize)` - Rounded diameter (in) and length (ft)
/// * `Err(CalcError::DivisionByZero)` - Water density or submersion is zero
/// * `Err(CalcError::InvalidInput)` - Payload, safety factor, submersion or
///   water density is negative, non-finite, or (payload/safety factor) zero
/// * `Err(CalcError::CalculationFailed)` - The sizing overflows (non-finite
///   volume or length, or a diameter with no whole-inch `i64` value)
pub fn optimize(input: &DesignInput) -> CalcResult<OptimizedSize> {
    let submersion = input.submersion_pct / 100.0;

    if input.water_density_pcf == 0.0 {
        return Err(CalcError::division_by_zero("required_volume_per_pontoon", "water_density_pcf"));
    }
    if submersion == 0.0 {
        return Err(CalcError::division_by_zero("required_volume_per_pontoon", "submersion_pct"));
    }

    let positive = [
        ("payload_lb", input.payload_lb, "Payload must be positive"),
        ("safety_factor", input.safety_factor, "Safety factor must be positive"),
        ("submersion_pct", input.submersion_pct, "Submersion must be positive"),
        ("water_density_pcf", input.water_density_pcf, "Water density must be positive"),
    ];
    for (field, value, reason) in positive {
        // NaN fails the comparison and is rejected here too
        if !(value > 0.0 && value.is_finite()) {
            return Err(CalcError::invalid_input(field, value.to_string(), reason));
        }
    }

    let estimated_weight = input.payload_lb * ESTIMATED_WEIGHT_FACTOR;
    let displacement = required_displacement(estimated_weight, input.safety_factor);
    let volume = required_volume_per_pontoon(displacement, input.water_density_pcf, submersion)
        .ok_or_else(|| CalcError::division_by_zero("required_volume_per_pontoon", "water_density_pcf × submersion"))?;

    // A subnormal submersion fraction overflows the volume
    if !volume.is_finite() {
        return Err(CalcError::calculation_failed(
            "optimize",
            format!("required volume per pontoon is not finite ({})", volume),
        ));
    }

    let diameter = Feet(sizing_diameter(volume));
    let length = diameter * SIZING_LD_RATIO;

    let diameter_in = Inches::from(diameter).value().round();
    let length_ft = round_to(length.value(), 2);
    if !length_ft.is_finite() {
        return Err(CalcError::calculation_failed(
            "optimize",
            format!("suggested length is not finite ({})", length_ft),
        ));
    }

    let size = OptimizedSize {
        diameter_in: whole_inches(diameter_in)?,
        length_ft,
    };

    log::debug!(
        "sized pontoons for {:.1} lb payload: required volume {:.3} ft³ → {}\" x {:.2} ft",
        input.payload_lb,
        volume,
        size.diameter_in,
        size.length_ft
    );

    Ok(size)
}

/// Range-checked conversion of an already rounded diameter.
fn whole_inches(rounded: f64) -> CalcResult<i64> {
    // i64::MAX as f64 is 2^63, which is itself out of range
    if rounded.is_finite() && rounded.abs() < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(CalcError::calculation_failed(
            "optimize",
            format!("suggested diameter of {} in does not fit a whole-inch size", rounded),
        ))
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
