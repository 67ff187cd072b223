//! # Unit Types
//!
//! Type-safe wrappers for the US customary units a pontoon design is
//! specified in. They are plain `f64` newtypes so JSON stays clean (just
//! numbers) and there is no runtime overhead.
//!
//! ## Units
//!
//! - Length: feet (ft), inches (in)
//! - Weight / force: pounds (lb)
//! - Area: square feet (ft²)
//! - Volume: cubic feet (ft³)
//! - Densities: lb/ft³ (pcf), lb/ft² (psf), lb/ft (plf)
//!
//! Multiplying a quantity by its matching density yields [`Pounds`]:
//!
//! ```rust
//! use pontoon_core::units::{CuFt, Feet, Inches, Pcf, Plf, Pounds};
//!
//! let diameter: Feet = Inches(18.0).into();
//! assert_eq!(diameter.0, 1.5);
//!
//! let foam: Pounds = CuFt(4.0) * Pcf(1.25);
//! assert_eq!(foam.0, 5.0);
//!
//! let tubing: Pounds = Feet(10.0) * Plf(0.78);
//! assert!((tubing.0 - 7.8).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

// ============================================================================
// Weight, Area, Volume
// ============================================================================

/// Weight (force) in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuFt(pub f64);

// ============================================================================
// Densities
// ============================================================================

/// Volumetric density in pounds per cubic foot (foam, water)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pcf(pub f64);

/// Areal density in pounds per square foot (coatings)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Linear density in pounds per linear foot (frame tubing)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plf(pub f64);

impl Mul<Pcf> for CuFt {
    type Output = Pounds;
    fn mul(self, rhs: Pcf) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

impl Mul<Psf> for SqFt {
    type Output = Pounds;
    fn mul(self, rhs: Psf) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

impl Mul<Plf> for Feet {
    type Output = Pounds;
    fn mul(self, rhs: Plf) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Pounds);
impl_arithmetic!(SqFt);
impl_arithmetic!(CuFt);
impl_arithmetic!(Pcf);
impl_arithmetic!(Psf);
impl_arithmetic!(Plf);
