//! # Pontoon Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function `fn(&Input) -> CalcResult<Output>`
//!
//! Both operations share the same input record and are independent of each
//! other. Neither holds state between calls.
//!
//! ## Available Calculations
//!
//! - [`design`] - Forward evaluation: geometry, weights, buoyancy, status
//! - [`optimizer`] - Inverse sizing: suggested diameter and length
//! - [`explanation`] - Derivation trace attached to every design result

pub mod design;
pub mod explanation;
pub mod optimizer;

// Re-export commonly used types
pub use design::{evaluate, DesignInput, DesignResult, DesignStatus};
pub use explanation::{DerivationStage, ExplanationBlock};
pub use optimizer::{optimize, OptimizedSize};
