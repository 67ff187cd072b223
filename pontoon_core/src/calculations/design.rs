//! # Pontoon Design Evaluation
//!
//! Forward calculation for a twin-pontoon hull: geometry → weights →
//! buoyancy → pass/fail status, with a derivation trace.
//!
//! ## Model
//!
//! - Each pontoon is a cylinder with one flat end cap, continued by a cone
//!   occupying `cone_pct` of the total length
//! - Pontoons are solid foam with a surface coating
//! - Frame is two full-length rails plus `num_cross_beams` cross beams
//! - Draft is a linear fraction of the diameter
//!
//! ## Example
//!
//! ```rust
//! use pontoon_core::calculations::design::{evaluate, DesignInput, DesignStatus};
//!
//! let input = DesignInput {
//!     payload_lb: 250.0,
//!     diameter_in: 16.0,
//!     length_ft: 10.0,
//!     ..DesignInput::default()
//! };
//!
//! let result = evaluate(&input).unwrap();
//! println!("Buoyant force: {:.1} lb", result.total_buoyant_force_lb);
//! println!("Status: {}", result.status);
//! assert_eq!(result.status, DesignStatus::Viable);
//! ```

use serde::{Deserialize, Serialize};

use super::explanation::{build_explanation, ExplanationBlock};
use crate::equations::{
    buoyant_force, circle_area, cone_lateral_area, cone_slant_height, cone_volume, cylinder_lateral_area,
    cylinder_volume, linear_draft, required_displacement, reserve_buoyancy, safety_factor_ratio, Equation,
    EquationTracker, PONTOON_COUNT,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{WaterBody, ALUMINUM_TUBE_WEIGHT_PLF, COATING_WEIGHT_PSF, EPS_FOAM_DENSITY_PCF};
use crate::units::{CuFt, Feet, Inches, Pcf, Plf, Pounds, Psf, SqFt};

/// Input parameters for a twin-pontoon design.
///
/// A flat record of twelve numbers; nothing is derived at construction.
/// Missing fields in JSON fall back to [`DesignInput::default`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "payload_lb": 100.0,
///   "safety_factor": 1.8,
///   "submersion_pct": 60.0,
///   "diameter_in": 12.0,
///   "length_ft": 6.0,
///   "cone_pct": 25.0,
///   "foam_density_pcf": 1.0,
///   "coating_weight_psf": 0.03,
///   "water_density_pcf": 64.0,
///   "cross_beam_length_ft": 4.0,
///   "num_cross_beams": 4,
///   "tube_weight_plf": 0.78
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignInput {
    /// Payload carried by the boat (lb)
    pub payload_lb: f64,

    /// Target ratio of buoyant capacity to weight
    pub safety_factor: f64,

    /// Fraction of pontoon volume below the waterline, in percent
    pub submersion_pct: f64,

    /// Pontoon diameter (in)
    pub diameter_in: f64,

    /// Overall pontoon length including the cone (ft)
    pub length_ft: f64,

    /// Share of the length that is conical, in percent
    pub cone_pct: f64,

    /// Foam core density (lb/ft³)
    pub foam_density_pcf: f64,

    /// Coating weight per unit surface area (lb/ft²)
    pub coating_weight_psf: f64,

    /// Water density (lb/ft³)
    pub water_density_pcf: f64,

    /// Length of each cross beam (ft)
    pub cross_beam_length_ft: f64,

    /// Number of cross beams
    pub num_cross_beams: u32,

    /// Frame tubing weight per linear foot (lb/ft)
    pub tube_weight_plf: f64,
}

impl Default for DesignInput {
    fn default() -> Self {
        DesignInput {
            payload_lb: 100.0,
            safety_factor: 1.8,
            submersion_pct: 60.0,
            diameter_in: 12.0,
            length_ft: 6.0,
            cone_pct: 25.0,
            foam_density_pcf: EPS_FOAM_DENSITY_PCF,
            coating_weight_psf: COATING_WEIGHT_PSF,
            water_density_pcf: WaterBody::Salt.density_pcf(),
            cross_beam_length_ft: 4.0,
            num_cross_beams: 4,
            tube_weight_plf: ALUMINUM_TUBE_WEIGHT_PLF,
        }
    }
}

impl DesignInput {
    /// Parse a design from JSON. Fields not present take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy of this input floating in the given body of water.
    pub fn in_water(self, water: WaterBody) -> Self {
        DesignInput {
            water_density_pcf: water.density_pcf(),
            ..self
        }
    }

    /// Validate input parameters.
    ///
    /// Rejects non-finite values, negative dimensions and material weights,
    /// and a cone percentage outside 0..=100. Zero dimensions are allowed.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("payload_lb", self.payload_lb),
            ("safety_factor", self.safety_factor),
            ("submersion_pct", self.submersion_pct),
            ("diameter_in", self.diameter_in),
            ("length_ft", self.length_ft),
            ("cone_pct", self.cone_pct),
            ("foam_density_pcf", self.foam_density_pcf),
            ("coating_weight_psf", self.coating_weight_psf),
            ("water_density_pcf", self.water_density_pcf),
            ("cross_beam_length_ft", self.cross_beam_length_ft),
            ("tube_weight_plf", self.tube_weight_plf),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
            }
        }

        let non_negative = [
            ("payload_lb", self.payload_lb, "Payload cannot be negative"),
            ("diameter_in", self.diameter_in, "Diameter cannot be negative"),
            ("length_ft", self.length_ft, "Length cannot be negative"),
            ("cross_beam_length_ft", self.cross_beam_length_ft, "Cross beam length cannot be negative"),
            ("foam_density_pcf", self.foam_density_pcf, "Foam density cannot be negative"),
            ("coating_weight_psf", self.coating_weight_psf, "Coating weight cannot be negative"),
            ("water_density_pcf", self.water_density_pcf, "Water density cannot be negative"),
            ("tube_weight_plf", self.tube_weight_plf, "Tube weight cannot be negative"),
        ];
        for (field, value, reason) in non_negative {
            if value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
        }

        if !(0.0..=100.0).contains(&self.cone_pct) {
            return Err(CalcError::invalid_input(
                "cone_pct",
                self.cone_pct.to_string(),
                "Cone percentage must be between 0 and 100",
            ));
        }
        Ok(())
    }

    /// Pontoon diameter converted to feet
    pub fn diameter_ft(&self) -> Feet {
        Inches(self.diameter_in).into()
    }
}

/// Outcome of the buoyancy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DesignStatus {
    /// Buoyant force meets the required displacement
    Viable,
    /// Buoyant force falls short of weight × safety factor
    InsufficientBuoyancy,
}

impl DesignStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            DesignStatus::Viable => "VIABLE",
            DesignStatus::InsufficientBuoyancy => "INSUFFICIENT BUOYANCY",
        }
    }
}

impl std::fmt::Display for DesignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Every intermediate and final quantity of an evaluation.
///
/// `actual_safety_factor` (buoyant force ÷ raw weight) and `status`
/// (buoyant force vs. weight × safety factor) are separate measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    // Geometry
    pub diameter_ft: f64,
    pub radius_ft: f64,
    pub cone_length_ft: f64,
    pub cylinder_length_ft: f64,
    pub cylinder_volume_cuft: f64,
    pub cone_volume_cuft: f64,
    pub volume_per_pontoon_cuft: f64,
    pub total_volume_both_cuft: f64,

    // Surface areas
    pub cylinder_surface_area_sqft: f64,
    pub slant_height_ft: f64,
    pub cone_surface_area_sqft: f64,
    pub end_cap_area_sqft: f64,
    pub surface_area_per_pontoon_sqft: f64,
    pub total_surface_area_both_sqft: f64,

    // Weights
    pub foam_weight_per_pontoon_lb: f64,
    pub coating_weight_per_pontoon_lb: f64,
    /// Both pontoons, foam plus coating
    pub pontoon_weight_lb: f64,
    pub total_tube_length_ft: f64,
    pub frame_weight_lb: f64,
    /// Payload + pontoons + frame
    pub total_boat_weight_lb: f64,

    // Buoyancy
    pub submerged_volume_per_pontoon_cuft: f64,
    pub total_buoyant_force_lb: f64,
    /// Total weight × safety factor
    pub required_displacement_lb: f64,
    pub draft_ft: f64,
    pub draft_in: f64,
    /// Buoyant force ÷ total weight
    pub actual_safety_factor: f64,
    /// Buoyant force − total weight
    pub reserve_buoyancy_lb: f64,
    pub status: DesignStatus,

    /// Derivation trace, one block per stage
    pub explanation: Vec<ExplanationBlock>,

    /// Equations applied, in order of first use
    pub equations: Vec<Equation>,
}

impl DesignResult {
    /// Check if the design floats with the required margin
    pub fn passes(&self) -> bool {
        self.status == DesignStatus::Viable
    }

    /// Explanation blocks joined by blank lines
    pub fn explanation_text(&self) -> String {
        self.explanation
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Evaluate a pontoon design.
///
/// # Returns
///
/// * `Ok(DesignResult)` - All computed quantities and the derivation trace
/// * `Err(CalcError::InvalidInput)` - If [`DesignInput::validate`] fails
/// * `Err(CalcError::DivisionByZero)` - If the total boat weight is zero
pub fn evaluate(input: &DesignInput) -> CalcResult<DesignResult> {
    input.validate()?;

    let mut tracker = EquationTracker::new();
    let submersion = input.submersion_pct / 100.0;
    let cone_fraction = input.cone_pct / 100.0;

    // Geometry (per pontoon)
    let diameter = input.diameter_ft();
    let radius = diameter / 2.0;
    let r = radius.value();
    let cone_length = Feet(input.length_ft * cone_fraction);
    let cylinder_length = Feet(input.length_ft * (1.0 - cone_fraction));

    let cylinder_vol = CuFt(cylinder_volume(r, cylinder_length.value()));
    tracker.record(Equation::CylinderVolume, "Pontoon geometry");
    let cone_vol = CuFt(cone_volume(r, cone_length.value()));
    tracker.record(Equation::ConeVolume, "Pontoon geometry");
    let volume_per_pontoon = cylinder_vol + cone_vol;

    // Surface areas (per pontoon)
    let cylinder_area = SqFt(cylinder_lateral_area(r, cylinder_length.value()));
    tracker.record(Equation::CylinderLateralArea, "Surface areas");
    let slant_height = Feet(cone_slant_height(r, cone_length.value()));
    tracker.record(Equation::ConeSlantHeight, "Surface areas");
    let cone_area = SqFt(cone_lateral_area(r, slant_height.value()));
    tracker.record(Equation::ConeLateralArea, "Surface areas");
    let end_cap_area = SqFt(circle_area(r));
    tracker.record(Equation::EndCapArea, "Surface areas");
    let surface_area_per_pontoon = cylinder_area + cone_area + end_cap_area;

    // Weights
    let foam_weight = volume_per_pontoon * Pcf(input.foam_density_pcf);
    tracker.record(Equation::FoamWeight, "Weights");
    let coating_weight = surface_area_per_pontoon * Psf(input.coating_weight_psf);
    tracker.record(Equation::CoatingWeight, "Weights");
    let pontoon_weight = (foam_weight + coating_weight) * PONTOON_COUNT;
    tracker.record(Equation::PontoonWeight, "Weights");

    let total_tube_length =
        Feet(f64::from(input.num_cross_beams) * input.cross_beam_length_ft) + Feet(input.length_ft) * 2.0;
    tracker.record(Equation::TubeLength, "Weights");
    let frame_weight = total_tube_length * Plf(input.tube_weight_plf);
    tracker.record(Equation::FrameWeight, "Weights");
    let total_weight = Pounds(input.payload_lb) + pontoon_weight + frame_weight;
    tracker.record(Equation::TotalBoatWeight, "Weights");

    // Buoyancy & status
    let submerged_volume = volume_per_pontoon * submersion;
    tracker.record(Equation::SubmergedVolume, "Buoyancy");
    let buoyancy = buoyant_force(submerged_volume.value(), input.water_density_pcf);
    tracker.record(Equation::BuoyantForce, "Buoyancy");
    let required = required_displacement(total_weight.value(), input.safety_factor);
    tracker.record(Equation::RequiredDisplacement, "Buoyancy");
    let draft = Feet(linear_draft(diameter.value(), submersion));
    tracker.record(Equation::Draft, "Buoyancy");
    let actual_safety_factor = safety_factor_ratio(buoyancy, total_weight.value())
        .ok_or_else(|| CalcError::division_by_zero("actual_safety_factor", "total_boat_weight"))?;
    tracker.record(Equation::ActualSafetyFactor, "Buoyancy");
    let reserve = reserve_buoyancy(buoyancy, total_weight.value());
    tracker.record(Equation::ReserveBuoyancy, "Buoyancy");

    let status = if buoyancy < required {
        DesignStatus::InsufficientBuoyancy
    } else {
        DesignStatus::Viable
    };

    let mut result = DesignResult {
        diameter_ft: diameter.value(),
        radius_ft: r,
        cone_length_ft: cone_length.value(),
        cylinder_length_ft: cylinder_length.value(),
        cylinder_volume_cuft: cylinder_vol.value(),
        cone_volume_cuft: cone_vol.value(),
        volume_per_pontoon_cuft: volume_per_pontoon.value(),
        total_volume_both_cuft: (volume_per_pontoon * PONTOON_COUNT).value(),
        cylinder_surface_area_sqft: cylinder_area.value(),
        slant_height_ft: slant_height.value(),
        cone_surface_area_sqft: cone_area.value(),
        end_cap_area_sqft: end_cap_area.value(),
        surface_area_per_pontoon_sqft: surface_area_per_pontoon.value(),
        total_surface_area_both_sqft: (surface_area_per_pontoon * PONTOON_COUNT).value(),
        foam_weight_per_pontoon_lb: foam_weight.value(),
        coating_weight_per_pontoon_lb: coating_weight.value(),
        pontoon_weight_lb: pontoon_weight.value(),
        total_tube_length_ft: total_tube_length.value(),
        frame_weight_lb: frame_weight.value(),
        total_boat_weight_lb: total_weight.value(),
        submerged_volume_per_pontoon_cuft: submerged_volume.value(),
        total_buoyant_force_lb: buoyancy,
        required_displacement_lb: required,
        draft_ft: draft.value(),
        draft_in: Inches::from(draft).value(),
        actual_safety_factor,
        reserve_buoyancy_lb: reserve,
        status,
        explanation: Vec::new(),
        equations: tracker.unique_equations(),
    };
    result.explanation = build_explanation(input, &result);

    log::debug!(
        "evaluated {:.1}\" x {:.2} ft pontoons: weight={:.2} lb buoyancy={:.2} lb sf={:.2} status={}",
        input.diameter_in,
        input.length_ft,
        result.total_boat_weight_lb,
        result.total_buoyant_force_lb,
        result.actual_safety_factor,
        result.status
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::explanation::DerivationStage;
    use std::f64::consts::PI;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_reference_geometry() {
        let result = evaluate(&DesignInput::default()).unwrap();

        assert_eq!(result.diameter_ft, 1.0);
        assert_eq!(result.radius_ft, 0.5);
        assert!(approx(result.cone_length_ft, 1.5, 1e-12));
        assert!(approx(result.cylinder_length_ft, 4.5, 1e-12));
        assert!(approx(result.cylinder_volume_cuft, PI * 0.25 * 4.5, 1e-12));
        assert!(approx(result.cone_volume_cuft, PI * 0.25 * 1.5 / 3.0, 1e-12));
        assert!(approx(result.volume_per_pontoon_cuft, 3.927, 0.0005));
    }

    #[test]
    fn test_reference_weights() {
        let result = evaluate(&DesignInput::default()).unwrap();

        // 4 cross beams × 4 ft + 2 × 6 ft rails = 28 ft of tube
        assert!(approx(result.total_tube_length_ft, 28.0, 1e-12));
        assert!(approx(result.frame_weight_lb, 28.0 * 0.78, 1e-9));

        // Surface: 2π(0.5)(4.5) + π(0.5)√2.5 + π(0.25)
        let area = PI * 4.5 + PI * 0.5 * 2.5_f64.sqrt() + PI * 0.25;
        assert!(approx(result.surface_area_per_pontoon_sqft, area, 1e-9));

        let pontoons = 2.0 * (result.volume_per_pontoon_cuft * 1.0 + area * 0.03);
        assert!(approx(result.pontoon_weight_lb, pontoons, 1e-9));
        assert!(approx(result.total_boat_weight_lb, 100.0 + pontoons + 21.84, 1e-9));
    }

    #[test]
    fn test_reference_buoyancy() {
        let result = evaluate(&DesignInput::default()).unwrap();

        let buoyancy = 2.0 * result.volume_per_pontoon_cuft * 0.6 * 64.0;
        assert!(approx(result.total_buoyant_force_lb, buoyancy, 1e-9));
        assert!(approx(result.draft_ft, 0.6, 1e-12));
        assert!(approx(result.draft_in, 7.2, 1e-9));
        assert!(approx(
            result.actual_safety_factor,
            buoyancy / result.total_boat_weight_lb,
            1e-12
        ));
        assert!(approx(
            result.required_displacement_lb,
            result.total_boat_weight_lb * 1.8,
            1e-9
        ));
        // ~301.6 lb of buoyancy against ~235.3 lb required
        assert_eq!(result.status, DesignStatus::Viable);
        assert!(result.passes());
    }

    #[test]
    fn test_heavy_payload_is_insufficient() {
        let input = DesignInput {
            payload_lb: 400.0,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.status, DesignStatus::InsufficientBuoyancy);
        assert!(result.reserve_buoyancy_lb < 0.0);
        assert!(!result.passes());
    }

    #[test]
    fn test_zero_cone_is_closed_cylinder() {
        let input = DesignInput {
            cone_pct: 0.0,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();

        assert_eq!(result.cone_volume_cuft, 0.0);
        assert_eq!(result.slant_height_ft, result.radius_ft);
        // Flat "cone" counts as a second end cap
        assert!(approx(result.cone_surface_area_sqft, result.end_cap_area_sqft, 1e-12));
        let closed_cylinder = 2.0 * PI * 0.5 * 6.0 + 2.0 * PI * 0.25;
        assert!(approx(result.surface_area_per_pontoon_sqft, closed_cylinder, 1e-9));
    }

    #[test]
    fn test_full_cone_has_no_cylinder() {
        let input = DesignInput {
            cone_pct: 100.0,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();

        assert_eq!(result.cylinder_length_ft, 0.0);
        assert_eq!(result.cylinder_volume_cuft, 0.0);
        assert_eq!(result.cylinder_surface_area_sqft, 0.0);
        assert!(approx(result.volume_per_pontoon_cuft, PI * 0.25 * 6.0 / 3.0, 1e-12));
    }

    #[test]
    fn test_zero_weight_is_division_by_zero() {
        let input = DesignInput {
            payload_lb: 0.0,
            foam_density_pcf: 0.0,
            coating_weight_psf: 0.0,
            tube_weight_plf: 0.0,
            cross_beam_length_ft: 0.0,
            num_cross_beams: 0,
            ..DesignInput::default()
        };
        let err = evaluate(&input).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_negative_geometry_rejected() {
        for input in [
            DesignInput { diameter_in: -12.0, ..DesignInput::default() },
            DesignInput { length_ft: -1.0, ..DesignInput::default() },
            DesignInput { cone_pct: 120.0, ..DesignInput::default() },
            DesignInput { payload_lb: -5.0, ..DesignInput::default() },
        ] {
            let err = evaluate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "{:?}", input);
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let input = DesignInput {
            water_density_pcf: f64::NAN,
            ..DesignInput::default()
        };
        match evaluate(&input) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "water_density_pcf"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_explanation_stages_and_values() {
        let result = evaluate(&DesignInput::default()).unwrap();
        let stages: Vec<_> = result.explanation.iter().map(|b| b.stage).collect();
        assert_eq!(
            stages,
            vec![
                DerivationStage::Geometry,
                DerivationStage::SurfaceAreas,
                DerivationStage::Weights,
                DerivationStage::BuoyancyAndSafety,
            ]
        );

        let text = result.explanation_text();
        assert!(text.contains("Diameter = 12.0\" (1.00 ft) → Radius = 0.50 ft."));
        assert!(text.contains("25.0% is cone (1.50 ft) and 75.0% is cylinder (4.50 ft)"));
        assert!(text.contains("Cylinder Volume = π r² h = 3.53 ft³."));
        assert!(text.contains("Cone Volume = (1/3)π r² h = 0.39 ft³."));
        assert!(text.contains("Total Volume per Pontoon = 3.93 ft³."));
        assert!(text.contains("Total Tube Length (28.00 ft) × Tube Weight (0.78 lb/ft) = 21.84 lb."));
        assert!(text.contains("× 60.0% ="));
        assert!(text.contains("(7.2 in)"));
        assert!(text.contains("Status = VIABLE."));
    }

    #[test]
    fn test_equations_recorded() {
        let result = evaluate(&DesignInput::default()).unwrap();
        assert_eq!(result.equations.first(), Some(&Equation::CylinderVolume));
        assert!(result.equations.contains(&Equation::ActualSafetyFactor));
        assert!(!result.equations.contains(&Equation::SizingDiameter));
    }

    #[test]
    fn test_input_json_defaults() {
        let input = DesignInput::from_json(r#"{ "payload_lb": 220.0, "num_cross_beams": 6 }"#).unwrap();
        assert_eq!(input.payload_lb, 220.0);
        assert_eq!(input.num_cross_beams, 6);
        assert_eq!(input.diameter_in, 12.0);

        let err = DesignInput::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&DesignStatus::InsufficientBuoyancy).unwrap();
        assert_eq!(json, "\"INSUFFICIENT_BUOYANCY\"");
        assert_eq!(DesignStatus::InsufficientBuoyancy.to_string(), "INSUFFICIENT BUOYANCY");
    }

    #[test]
    fn test_fresh_water_reduces_buoyancy() {
        let salt = evaluate(&DesignInput::default()).unwrap();
        let fresh = evaluate(&DesignInput::default().in_water(WaterBody::Fresh)).unwrap();
        assert!(fresh.total_buoyant_force_lb < salt.total_buoyant_force_lb);
        assert_eq!(fresh.total_boat_weight_lb, salt.total_boat_weight_lb);
    }

    #[test]
    fn test_submersion_unclamped_and_zero_safety_factor() {
        let input = DesignInput {
            submersion_pct: 150.0,
            safety_factor: 0.0,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();

        // Draft scales linearly past the full diameter
        assert!(approx(result.draft_ft, 1.5, 1e-12));
        assert!(approx(result.draft_in, 18.0, 1e-9));

        // V = 1.25π per pontoon, 150% submerged, both pontoons at 64 lb/ft³
        assert!(approx(result.submerged_volume_per_pontoon_cuft, 1.875 * PI, 1e-9));
        assert!(approx(result.total_buoyant_force_lb, 240.0 * PI, 1e-9));

        assert_eq!(result.required_displacement_lb, 0.0);
        assert_eq!(result.status, DesignStatus::Viable);

        // Status follows buoyancy >= weight × sf on either side of the threshold
        for sf in [5.0, 6.0] {
            let r = evaluate(&DesignInput {
                safety_factor: sf,
                ..input
            })
            .unwrap();
            let expected = if r.total_buoyant_force_lb >= r.total_boat_weight_lb * sf {
                DesignStatus::Viable
            } else {
                DesignStatus::InsufficientBuoyancy
            };
            assert_eq!(r.status, expected, "sf = {}", sf);
        }
    }
}
