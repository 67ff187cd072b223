//! # Equation Registry
//!
//! Central registry of every formula the evaluator and optimizer apply. Each
//! equation carries its display name and plain-text formula (which the
//! explanation trace quotes verbatim), its variables, assumptions and the
//! function implementing it.
//!
//! ## Usage
//!
//! ```rust
//! use pontoon_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::CylinderVolume, "Pontoon geometry");
//!
//! let meta = Equation::CylinderVolume.metadata();
//! assert_eq!(meta.formula_plain, "π r² h");
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Where an equation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationSource {
    /// Solid geometry of cylinders, cones and discs
    Mensuration,
    /// Archimedes' principle: buoyant force equals weight of displaced water
    Archimedes,
    /// Linear weight takeoff (quantity × unit weight)
    WeightTakeoff,
    /// Empirical rule of thumb used for first-guess sizing
    SizingHeuristic,
}

impl EquationSource {
    /// Format the source for display
    pub fn citation(&self) -> &'static str {
        match self {
            EquationSource::Mensuration => "Solid geometry (mensuration)",
            EquationSource::Archimedes => "Archimedes' principle",
            EquationSource::WeightTakeoff => "Weight takeoff",
            EquationSource::SizingHeuristic => "Sizing heuristic (L/D = 4, no cone)",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Volumes and section lengths
    Geometry,
    /// Lateral and end-cap areas
    SurfaceAreas,
    /// Foam, coating and frame weights
    Weights,
    /// Buoyancy, displacement, draft and safety
    Buoyancy,
    /// Inverse sizing (optimizer)
    Sizing,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Geometry => "Geometry",
            EquationCategory::SurfaceAreas => "Surface Areas",
            EquationCategory::Weights => "Weights",
            EquationCategory::Buoyancy => "Buoyancy & Safety",
            EquationCategory::Sizing => "Sizing",
        }
    }

    /// All categories in document order
    pub fn all() -> [EquationCategory; 5] {
        [
            EquationCategory::Geometry,
            EquationCategory::SurfaceAreas,
            EquationCategory::Weights,
            EquationCategory::Buoyancy,
            EquationCategory::Sizing,
        ]
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "r", "h", "ρ_w")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "ft", "lb/ft³")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name, also used as the label in explanation text
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula as quoted in explanation text
    pub formula_plain: &'static str,
    /// Where the relation comes from
    pub source: EquationSource,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation used by the pontoon calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Geometry
    /// V = π r² h
    CylinderVolume,
    /// V = (1/3) π r² h
    ConeVolume,
    /// s = √(r² + h²)
    ConeSlantHeight,

    // Surface areas
    /// A = 2π r h
    CylinderLateralArea,
    /// A = π r s
    ConeLateralArea,
    /// A = π r²
    EndCapArea,

    // Weights
    /// W_foam = V × ρ_foam
    FoamWeight,
    /// W_coat = A × w_coat
    CoatingWeight,
    /// W_pontoons = 2 × (W_foam + W_coat)
    PontoonWeight,
    /// L_tube = N × L_beam + 2 × L
    TubeLength,
    /// W_frame = L_tube × w_tube
    FrameWeight,
    /// W = payload + W_pontoons + W_frame
    TotalBoatWeight,

    // Buoyancy
    /// V_sub = V × f
    SubmergedVolume,
    /// F_b = 2 × V_sub × ρ_w
    BuoyantForce,
    /// D_req = W × SF
    RequiredDisplacement,
    /// SF_actual = F_b / W
    ActualSafetyFactor,
    /// R = F_b − W
    ReserveBuoyancy,
    /// T = d × f
    Draft,

    // Sizing
    /// W_est = payload × 1.4
    EstimatedWeight,
    /// V_req = (D_req / 2) / (ρ_w × f)
    RequiredVolume,
    /// D = (V_req / π)^(1/3), L = 4D
    SizingDiameter,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::CylinderVolume => EquationMetadata {
                name: self.name(),
                description: "Volume of the cylindrical section of one pontoon",
                formula_plain: self.formula(),
                source: EquationSource::Mensuration,
                variables: vec![
                    Variable::new("r", "Pontoon radius", "ft"),
                    Variable::new("h", "Cylinder section length", "ft"),
                ],
                assumptions: vec!["Right circular cylinder"],
                category: EquationCategory::Geometry,
                source_module: "equations/geometry.rs",
                source_function: "cylinder_volume",
            },

            Equation::ConeVolume => EquationMetadata {
                name: self.name(),
                description: "Volume of the conical nose of one pontoon",
                formula_plain: self.formula(),
                source: EquationSource::Mensuration,
                variables: vec![
                    Variable::new("r", "Pontoon radius", "ft"),
                    Variable::new("h", "Cone section length", "ft"),
                ],
                assumptions: vec!["Right circular cone sharing the cylinder radius"],
                category: EquationCategory::Geometry,
                source_module: "equations/geometry.rs",
                source_function: "cone_volume",
            },

            Equation::ConeSlantHeight => EquationMetadata {
                name: self.name(),
                description: "Distance from cone base edge to tip along the surface",
                formula_plain: self.formula(),
                source: EquationSource::Mensuration,
                variables: vec![
                    Variable::new("r", "Pontoon radius", "ft"),
                    Variable::new("h", "Cone section length", "ft"),
                ],
                assumptions: vec!["Collapses to r when the cone length is zero"],
                category: EquationCategory::Geometry,
                source_module: "equations/geometry.rs",
                source_function: "cone_slant_height",
            },

            Equation::CylinderLateralArea => EquationMetadata {
                name: self.name(),
                description: "Side area of the cylindrical section, end caps excluded",
                formula_plain: self.formula(),
                source: EquationSource::Mensuration,
                variables: vec![
                    Variable::new("r", "Pontoon radius", "ft"),
                    Variable::new("h", "Cylinder section length", "ft"),
                ],
                assumptions: vec!["Lateral area only"],
                category: EquationCategory::SurfaceAreas,
                source_module: "equations/geometry.rs",
                source_function: "cylinder_lateral_area",
            },

            Equation::ConeLateralArea => EquationMetadata {
                name: self.name(),
                description: "Side area of the conical nose, base excluded",
                formula_plain: self.formula(),
                source: EquationSource::Mensuration,
                variables: vec![
                    Variable::new("r", "Pontoon radius", "ft"),
                    Variable::new("s", "Cone slant height", "ft"),
                ],
                assumptions: vec!["A zero-length cone counts as a flat disc of area π r²"],
                category: EquationCategory::SurfaceAreas,
                source_module: "equations/geometry.rs",
                source_function: "cone_lateral_area",
            },

            Equation::EndCapArea => EquationMetadata {
                name: self.name(),
                description: "Flat disc closing the far end of the cylinder",
                formula_plain: self.formula(),
                source: EquationSource::Mensuration,
                variables: vec![Variable::new("r", "Pontoon radius", "ft")],
                assumptions: vec!["Exactly one flat end cap per pontoon"],
                category: EquationCategory::SurfaceAreas,
                source_module: "equations/geometry.rs",
                source_function: "circle_area",
            },

            Equation::FoamWeight => EquationMetadata {
                name: self.name(),
                description: "Weight of the foam core filling one pontoon",
                formula_plain: self.formula(),
                source: EquationSource::WeightTakeoff,
                variables: vec![
                    Variable::new("V", "Pontoon volume", "ft³"),
                    Variable::new("ρ_foam", "Foam density", "lb/ft³"),
                ],
                assumptions: vec!["Pontoon is solid foam"],
                category: EquationCategory::Weights,
                source_module: "calculations/design.rs",
                source_function: "evaluate",
            },

            Equation::CoatingWeight => EquationMetadata {
                name: self.name(),
                description: "Weight of the skin coating over the pontoon surface",
                formula_plain: self.formula(),
                source: EquationSource::WeightTakeoff,
                variables: vec![
                    Variable::new("A", "Pontoon surface area", "ft²"),
                    Variable::new("w_coat", "Coating weight", "lb/ft²"),
                ],
                assumptions: vec!["Uniform coating thickness"],
                category: EquationCategory::Weights,
                source_module: "calculations/design.rs",
                source_function: "evaluate",
            },

            Equation::PontoonWeight => EquationMetadata {
                name: self.name(),
                description: "Combined weight of both finished pontoons",
                formula_plain: self.formula(),
                source: EquationSource::WeightTakeoff,
                variables: vec![
                    Variable::new("W_foam", "Foam weight per pontoon", "lb"),
                    Variable::new("W_coat", "Coating weight per pontoon", "lb"),
                ],
                assumptions: vec!["Identical pontoons"],
                category: EquationCategory::Weights,
                source_module: "calculations/design.rs",
                source_function: "evaluate",
            },

            Equation::TubeLength => EquationMetadata {
                name: self.name(),
                description: "Frame tubing: cross beams plus two full-length rails",
                formula_plain: self.formula(),
                source: EquationSource::WeightTakeoff,
                variables: vec![
                    Variable::new("N", "Number of cross beams", "-"),
                    Variable::new("L_beam", "Cross beam length", "ft"),
                    Variable::new("L", "Pontoon length", "ft"),
                ],
                assumptions: vec!["Longitudinal rails span the full pontoon length"],
                category: EquationCategory::Weights,
                source_module: "calculations/design.rs",
                source_function: "evaluate",
            },

            Equation::FrameWeight => EquationMetadata {
                name: self.name(),
                description: "Weight of all frame tubing",
                formula_plain: self.formula(),
                source: EquationSource::WeightTakeoff,
                variables: vec![
                    Variable::new("L_tube", "Total tube length", "ft"),
                    Variable::new("w_tube", "Tube weight", "lb/ft"),
                ],
                assumptions: vec!["Fasteners and joints neglected"],
                category: EquationCategory::Weights,
                source_module: "calculations/design.rs",
                source_function: "evaluate",
            },

            Equation::TotalBoatWeight => EquationMetadata {
                name: self.name(),
                description: "Payload plus pontoons plus frame",
                formula_plain: self.formula(),
                source: EquationSource::WeightTakeoff,
                variables: vec![Variable::new("W", "Total boat weight", "lb")],
                assumptions: vec!["Linear weight sum, no structural allowance"],
                category: EquationCategory::Weights,
                source_module: "calculations/design.rs",
                source_function: "evaluate",
            },

            Equation::SubmergedVolume => EquationMetadata {
                name: self.name(),
                description: "Portion of pontoon volume below the waterline",
                formula_plain: self.formula(),
                source: EquationSource::Archimedes,
                variables: vec![
                    Variable::new("V", "Pontoon volume", "ft³"),
                    Variable::new("f", "Submersion fraction", "-"),
                ],
                assumptions: vec!["Submerged volume is a linear fraction of total volume"],
                category: EquationCategory::Buoyancy,
                source_module: "calculations/design.rs",
                source_function: "evaluate",
            },

            Equation::BuoyantForce => EquationMetadata {
                name: self.name(),
                description: "Weight of water displaced by both pontoons",
                formula_plain: self.formula(),
                source: EquationSource::Archimedes,
                variables: vec![
                    Variable::new("V_sub", "Submerged volume per pontoon", "ft³"),
                    Variable::new("ρ_w", "Water density", "lb/ft³"),
                ],
                assumptions: vec!["Static water"],
                category: EquationCategory::Buoyancy,
                source_module: "equations/hydrostatics.rs",
                source_function: "buoyant_force",
            },

            Equation::RequiredDisplacement => EquationMetadata {
                name: self.name(),
                description: "Buoyant force needed to carry the boat with margin",
                formula_plain: self.formula(),
                source: EquationSource::Archimedes,
                variables: vec![
                    Variable::new("W", "Total boat weight", "lb"),
                    Variable::new("SF", "Safety factor", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::Buoyancy,
                source_module: "equations/hydrostatics.rs",
                source_function: "required_displacement",
            },

            Equation::ActualSafetyFactor => EquationMetadata {
                name: self.name(),
                description: "Realized ratio of buoyant force to raw boat weight",
                formula_plain: self.formula(),
                source: EquationSource::Archimedes,
                variables: vec![
                    Variable::new("F_b", "Total buoyant force", "lb"),
                    Variable::new("W", "Total boat weight", "lb"),
                ],
                assumptions: vec!["Undefined for zero weight"],
                category: EquationCategory::Buoyancy,
                source_module: "equations/hydrostatics.rs",
                source_function: "safety_factor_ratio",
            },

            Equation::ReserveBuoyancy => EquationMetadata {
                name: self.name(),
                description: "Excess buoyant force beyond the boat's weight",
                formula_plain: self.formula(),
                source: EquationSource::Archimedes,
                variables: vec![
                    Variable::new("F_b", "Total buoyant force", "lb"),
                    Variable::new("W", "Total boat weight", "lb"),
                ],
                assumptions: vec![],
                category: EquationCategory::Buoyancy,
                source_module: "equations/hydrostatics.rs",
                source_function: "reserve_buoyancy",
            },

            Equation::Draft => EquationMetadata {
                name: self.name(),
                description: "Depth the pontoons sit below the waterline",
                formula_plain: self.formula(),
                source: EquationSource::Archimedes,
                variables: vec![
                    Variable::new("d", "Pontoon diameter", "ft"),
                    Variable::new("f", "Submersion fraction", "-"),
                ],
                assumptions: vec!["Linear approximation, not a circular-segment solve"],
                category: EquationCategory::Buoyancy,
                source_module: "equations/hydrostatics.rs",
                source_function: "linear_draft",
            },

            Equation::EstimatedWeight => EquationMetadata {
                name: self.name(),
                description: "First guess at total weight before the hull is sized",
                formula_plain: self.formula(),
                source: EquationSource::SizingHeuristic,
                variables: vec![Variable::new("payload", "Payload weight", "lb")],
                assumptions: vec!["Pontoons and frame add roughly 40% to the payload"],
                category: EquationCategory::Sizing,
                source_module: "calculations/optimizer.rs",
                source_function: "optimize",
            },

            Equation::RequiredVolume => EquationMetadata {
                name: self.name(),
                description: "Volume each pontoon needs at the target submersion",
                formula_plain: self.formula(),
                source: EquationSource::SizingHeuristic,
                variables: vec![
                    Variable::new("D_req", "Required displacement", "lb"),
                    Variable::new("ρ_w", "Water density", "lb/ft³"),
                    Variable::new("f", "Submersion fraction", "-"),
                ],
                assumptions: vec!["Load shared equally by both pontoons"],
                category: EquationCategory::Sizing,
                source_module: "equations/hydrostatics.rs",
                source_function: "required_volume_per_pontoon",
            },

            Equation::SizingDiameter => EquationMetadata {
                name: self.name(),
                description: "Diameter of a cone-less pontoon with L = 4D holding the required volume",
                formula_plain: self.formula(),
                source: EquationSource::SizingHeuristic,
                variables: vec![
                    Variable::new("V", "Required volume per pontoon", "ft³"),
                    Variable::new("D", "Pontoon diameter", "ft"),
                    Variable::new("L", "Pontoon length", "ft"),
                ],
                assumptions: vec!["No cone section", "Length-to-diameter ratio of 4:1"],
                category: EquationCategory::Sizing,
                source_module: "equations/hydrostatics.rs",
                source_function: "sizing_diameter",
            },
        }
    }

    /// Display name, as used in explanation text
    pub fn name(&self) -> &'static str {
        match self {
            Equation::CylinderVolume => "Cylinder Volume",
            Equation::ConeVolume => "Cone Volume",
            Equation::ConeSlantHeight => "Cone Slant Height",
            Equation::CylinderLateralArea => "Cylinder Surface Area",
            Equation::ConeLateralArea => "Cone Lateral Area",
            Equation::EndCapArea => "End Cap Area",
            Equation::FoamWeight => "Foam Weight per Pontoon",
            Equation::CoatingWeight => "Coating Weight per Pontoon",
            Equation::PontoonWeight => "Pontoon Weight (both)",
            Equation::TubeLength => "Total Tube Length",
            Equation::FrameWeight => "Frame Weight",
            Equation::TotalBoatWeight => "Total Boat Weight",
            Equation::SubmergedVolume => "Submerged Volume per Pontoon",
            Equation::BuoyantForce => "Total Buoyant Force",
            Equation::RequiredDisplacement => "Required Displacement",
            Equation::ActualSafetyFactor => "Actual Safety Factor",
            Equation::ReserveBuoyancy => "Reserve Buoyancy",
            Equation::Draft => "Draft",
            Equation::EstimatedWeight => "Estimated Weight",
            Equation::RequiredVolume => "Required Volume per Pontoon",
            Equation::SizingDiameter => "Sizing Diameter",
        }
    }

    /// Plain formula, as quoted in explanation text
    pub fn formula(&self) -> &'static str {
        match self {
            Equation::CylinderVolume => "π r² h",
            Equation::ConeVolume => "(1/3)π r² h",
            Equation::ConeSlantHeight => "√(r² + h²)",
            Equation::CylinderLateralArea => "2π r h",
            Equation::ConeLateralArea => "π r × slant height",
            Equation::EndCapArea => "π r²",
            Equation::FoamWeight => "Volume × Foam Density",
            Equation::CoatingWeight => "Surface Area × Coating Weight",
            Equation::PontoonWeight => "2 × (Foam + Coating)",
            Equation::TubeLength => "N × L_beam + 2 × L",
            Equation::FrameWeight => "Total Tube Length × Tube Weight",
            Equation::TotalBoatWeight => "Payload + Pontoons + Frame",
            Equation::SubmergedVolume => "Volume × Submersion %",
            Equation::BuoyantForce => "2 × V_sub × Water Density",
            Equation::RequiredDisplacement => "Total Weight × Safety Factor",
            Equation::ActualSafetyFactor => "Buoyant Force / Total Weight",
            Equation::ReserveBuoyancy => "Buoyant Force − Total Weight",
            Equation::Draft => "Diameter × Submersion Fraction",
            Equation::EstimatedWeight => "Payload × 1.4",
            Equation::RequiredVolume => "(Required Displacement / 2) / (Water Density × Submersion Fraction)",
            Equation::SizingDiameter => "D = (V / π)^(1/3), L = 4D",
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::CylinderVolume,
    Equation::ConeVolume,
    Equation::ConeSlantHeight,
    Equation::CylinderLateralArea,
    Equation::ConeLateralArea,
    Equation::EndCapArea,
    Equation::FoamWeight,
    Equation::CoatingWeight,
    Equation::PontoonWeight,
    Equation::TubeLength,
    Equation::FrameWeight,
    Equation::TotalBoatWeight,
    Equation::SubmergedVolume,
    Equation::BuoyantForce,
    Equation::RequiredDisplacement,
    Equation::ActualSafetyFactor,
    Equation::ReserveBuoyancy,
    Equation::Draft,
    Equation::EstimatedWeight,
    Equation::RequiredVolume,
    Equation::SizingDiameter,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where it was used (e.g., "Pontoon geometry")
    pub context: String,
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage {
            equation,
            context: context.into(),
        });
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the equations reference document as markdown.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Pontoon Calculator Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used to evaluate or size a twin-pontoon hull. Units are US
customary throughout: feet, inches, pounds.

---

"#,
    );

    let categories = EquationCategory::all();
    for category in categories {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Source:** {}\n\n", meta.source.citation()));
            output.push_str(&format!(
                "**Implementation:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
