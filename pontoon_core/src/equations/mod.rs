//! # Pontoon Equations
//!
//! All geometric and hydrostatic formulas live here so they can be verified
//! in one place and documented from a single registry.
//!
//! ## Modules
//!
//! - [`geometry`] - Cylinder/cone volumes, lateral areas, end caps
//! - [`hydrostatics`] - Buoyancy, displacement, draft, sizing relation
//! - [`registry`] - Equation metadata for explanation text and documentation
//!
//! ## Conventions
//!
//! - All lengths in feet, weights in pounds
//! - Percentages enter these functions as fractions (0..1)
//! - Quantities "per pontoon" unless the name says otherwise

pub mod geometry;
pub mod hydrostatics;
pub mod registry;

pub use geometry::{circle_area, cone_lateral_area, cone_slant_height, cone_volume, cylinder_lateral_area, cylinder_volume};

pub use hydrostatics::{
    buoyant_force,
    linear_draft,
    required_displacement,
    required_volume_per_pontoon,
    reserve_buoyancy,
    safety_factor_ratio,
    sizing_diameter,
    PONTOON_COUNT,
    SIZING_LD_RATIO,
};

pub use registry::{
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationSource,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
