//! # Error Types
//!
//! Structured error types for pontoon_core. Every failure is returned to the
//! caller as a typed value; nothing in the core panics or logs on bad input.
//!
//! ## Example
//!
//! ```rust
//! use pontoon_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(diameter_in: f64) -> CalcResult<()> {
//!     if diameter_in < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "diameter_in",
//!             diameter_in.to_string(),
//!             "Diameter cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_diameter(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pontoon_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Serializes as `{"type": "...", "details": {...}}` so front ends can show
/// the failure inline in place of results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A derived quantity used as a divisor came out as zero
    #[error("Division by zero computing {quantity}: {divisor} is zero")]
    DivisionByZero { quantity: String, divisor: String },

    /// Calculation could not produce a usable answer
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (design files read by front ends)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(quantity: impl Into<String>, divisor: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            quantity: quantity.into(),
            divisor: divisor.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
