//! # pontoon_core - Twin-Pontoon Hull Calculation Engine
//!
//! `pontoon_core` computes geometry, weight and buoyancy of a twin-pontoon
//! boat from its dimensions and materials, and suggests a starting
//! diameter/length from payload and safety requirements. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take an input record and return a result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Typed Errors**: Invalid input and zero divisors come back as [`CalcError`]
//! - **Traceable**: Every result carries a step-by-step derivation
//!
//! ## Quick Start
//!
//! ```rust
//! use pontoon_core::{evaluate, optimize, DesignInput};
//!
//! let input = DesignInput::default();
//! let result = evaluate(&input).unwrap();
//! println!("{} ({:.2}×)", result.status, result.actual_safety_factor);
//!
//! // Ask for a starting size, merge it, evaluate again
//! let revised = optimize(&input).unwrap().apply_to(&input);
//! let again = evaluate(&revised).unwrap();
//! println!("{}", again.explanation_text());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Design evaluation, sizing optimizer, derivation trace
//! - [`equations`] - Geometry and hydrostatic formulas with a metadata registry
//! - [`materials`] - Reference densities and unit weights
//! - [`report`] - Text, JSON and chart renderers for results
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, optimize, DesignInput, DesignResult, DesignStatus, OptimizedSize};
pub use errors::{CalcError, CalcResult};
pub use materials::WaterBody;
pub use report::{ChartData, JsonReport, ReportRenderer, TextReport};
