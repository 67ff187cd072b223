//! # Derivation Trace
//!
//! Human-readable explanation of how a [`DesignResult`] was derived: one text
//! block per stage, each restating the formula, the substituted values and
//! the outcome.
//!
//! Precision follows a fixed convention: lengths, areas, volumes and weights
//! to 2 decimals; inches and percentages to 1 decimal.

use serde::{Deserialize, Serialize};

use super::design::{DesignInput, DesignResult};
use crate::equations::Equation;

/// Stage of the derivation an explanation block covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivationStage {
    /// Dimensions and volumes
    Geometry,
    /// Lateral, cone and end-cap areas
    SurfaceAreas,
    /// Foam, coating, frame and total weights
    Weights,
    /// Buoyant force, displacement, safety factor, draft, status
    BuoyancyAndSafety,
}

impl DerivationStage {
    /// Heading used as the first line of the block
    pub fn heading(&self) -> &'static str {
        match self {
            DerivationStage::Geometry => "1) Pontoon Geometry:",
            DerivationStage::SurfaceAreas => "2) Surface Areas:",
            DerivationStage::Weights => "3) Weight Calculations:",
            DerivationStage::BuoyancyAndSafety => "4) Buoyancy & Safety:",
        }
    }
}

/// One block of the derivation trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationBlock {
    /// Which stage this block explains
    pub stage: DerivationStage,
    /// Multi-line text, heading first
    pub text: String,
}

impl ExplanationBlock {
    fn new(stage: DerivationStage, lines: Vec<String>) -> Self {
        let mut text = String::from(stage.heading());
        for line in lines {
            text.push('\n');
            text.push_str(&line);
        }
        ExplanationBlock { stage, text }
    }
}

/// Build the four explanation blocks for an evaluated design.
pub(crate) fn build_explanation(input: &DesignInput, r: &DesignResult) -> Vec<ExplanationBlock> {
    vec![
        geometry_block(input, r),
        surface_area_block(r),
        weight_block(input, r),
        buoyancy_block(input, r),
    ]
}

fn geometry_block(input: &DesignInput, r: &DesignResult) -> ExplanationBlock {
    let cone_pct = input.cone_pct;
    ExplanationBlock::new(
        DerivationStage::Geometry,
        vec![
            format!(
                "   - Diameter = {:.1}\" ({:.2} ft) → Radius = {:.2} ft.",
                input.diameter_in, r.diameter_ft, r.radius_ft
            ),
            format!(
                "   - Length = {:.2} ft, of which {:.1}% is cone ({:.2} ft) and {:.1}% is cylinder ({:.2} ft).",
                input.length_ft,
                cone_pct,
                r.cone_length_ft,
                100.0 - cone_pct,
                r.cylinder_length_ft
            ),
            format!(
                "   - {} = {} = {:.2} ft³.",
                Equation::CylinderVolume.name(),
                Equation::CylinderVolume.formula(),
                r.cylinder_volume_cuft
            ),
            format!(
                "   - {} = {} = {:.2} ft³.",
                Equation::ConeVolume.name(),
                Equation::ConeVolume.formula(),
                r.cone_volume_cuft
            ),
            format!(
                "   - Total Volume per Pontoon = {:.2} ft³. → Both Pontoons = {:.2} ft³.",
                r.volume_per_pontoon_cuft, r.total_volume_both_cuft
            ),
        ],
    )
}

fn surface_area_block(r: &DesignResult) -> ExplanationBlock {
    ExplanationBlock::new(
        DerivationStage::SurfaceAreas,
        vec![
            format!(
                "   - {} = {} = {:.2} ft².",
                Equation::CylinderLateralArea.name(),
                Equation::CylinderLateralArea.formula(),
                r.cylinder_surface_area_sqft
            ),
            format!(
                "   - {} = {} (slant = {:.2} ft) = {:.2} ft².",
                Equation::ConeLateralArea.name(),
                Equation::ConeLateralArea.formula(),
                r.slant_height_ft,
                r.cone_surface_area_sqft
            ),
            format!(
                "   - {} = {} = {:.2} ft².",
                Equation::EndCapArea.name(),
                Equation::EndCapArea.formula(),
                r.end_cap_area_sqft
            ),
            format!(
                "   - Total Surface Area per Pontoon = {:.2} ft². → Both Pontoons = {:.2} ft².",
                r.surface_area_per_pontoon_sqft, r.total_surface_area_both_sqft
            ),
        ],
    )
}

fn weight_block(input: &DesignInput, r: &DesignResult) -> ExplanationBlock {
    ExplanationBlock::new(
        DerivationStage::Weights,
        vec![
            format!(
                "   - {} = {} = {:.2} ft³ × {:.2} lb/ft³ = {:.2} lb.",
                Equation::FoamWeight.name(),
                Equation::FoamWeight.formula(),
                r.volume_per_pontoon_cuft,
                input.foam_density_pcf,
                r.foam_weight_per_pontoon_lb
            ),
            format!(
                "   - {} = {} = {:.2} ft² × {:.2} lb/ft² = {:.2} lb.",
                Equation::CoatingWeight.name(),
                Equation::CoatingWeight.formula(),
                r.surface_area_per_pontoon_sqft,
                input.coating_weight_psf,
                r.coating_weight_per_pontoon_lb
            ),
            format!(
                "   - {} = 2 × ({:.2} + {:.2}) = {:.2} lb.",
                Equation::PontoonWeight.name(),
                r.foam_weight_per_pontoon_lb,
                r.coating_weight_per_pontoon_lb,
                r.pontoon_weight_lb
            ),
            format!(
                "   - {} = Total Tube Length ({:.2} ft) × Tube Weight ({:.2} lb/ft) = {:.2} lb.",
                Equation::FrameWeight.name(),
                r.total_tube_length_ft,
                input.tube_weight_plf,
                r.frame_weight_lb
            ),
            format!("   - Payload = {:.2} lb.", input.payload_lb),
            format!(
                "   - → {} = {:.2} + {:.2} + {:.2} = {:.2} lb.",
                Equation::TotalBoatWeight.name(),
                input.payload_lb,
                r.pontoon_weight_lb,
                r.frame_weight_lb,
                r.total_boat_weight_lb
            ),
        ],
    )
}

fn buoyancy_block(input: &DesignInput, r: &DesignResult) -> ExplanationBlock {
    let fraction = input.submersion_pct / 100.0;
    ExplanationBlock::new(
        DerivationStage::BuoyancyAndSafety,
        vec![
            format!(
                "   - {} = {:.2} ft³ × {:.1}% = {:.2} ft³.",
                Equation::SubmergedVolume.name(),
                r.volume_per_pontoon_cuft,
                input.submersion_pct,
                r.submerged_volume_per_pontoon_cuft
            ),
            format!(
                "   - {} = 2 × {:.2} ft³ × Water Density ({:.2} lb/ft³) = {:.2} lb.",
                Equation::BuoyantForce.name(),
                r.submerged_volume_per_pontoon_cuft,
                input.water_density_pcf,
                r.total_buoyant_force_lb
            ),
            format!(
                "   - {} (with Safety Factor {:.2}×) = {:.2} × {:.2} = {:.2} lb.",
                Equation::RequiredDisplacement.name(),
                input.safety_factor,
                r.total_boat_weight_lb,
                input.safety_factor,
                r.required_displacement_lb
            ),
            format!(
                "   - {} = {} = {:.2} ÷ {:.2} = {:.2}×.",
                Equation::ActualSafetyFactor.name(),
                Equation::ActualSafetyFactor.formula(),
                r.total_buoyant_force_lb,
                r.total_boat_weight_lb,
                r.actual_safety_factor
            ),
            format!(
                "   - {} = {:.2} − {:.2} = {:.2} lb.",
                Equation::ReserveBuoyancy.name(),
                r.total_buoyant_force_lb,
                r.total_boat_weight_lb,
                r.reserve_buoyancy_lb
            ),
            format!(
                "   - {} = Diameter ({:.2} ft) × Submersion Fraction ({:.2}) = {:.2} ft ({:.1} in).",
                Equation::Draft.name(),
                r.diameter_ft,
                fraction,
                r.draft_ft,
                r.draft_in
            ),
            format!("   - Status = {}.", r.status),
        ],
    )
}
