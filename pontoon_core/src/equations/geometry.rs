//! # Pontoon Geometry Formulas
//!
//! Volumes and surface areas of the solid of revolution each pontoon is
//! modelled as: a cylinder with a single flat end cap, continued by a cone
//! whose tip points forward.
//!
//! ```text
//!   ┌──────────────────────────┐
//!   │                          │ ╲
//! d │        cylinder          │  ╲ cone
//!   │                          │  ╱
//!   │                          │ ╱
//!   └──────────────────────────┘
//!   ↑ end cap  ←── h_cyl ──→   ← h_cone →
//! ```
//!
//! ## Notation
//!
//! - `r` = Radius (d/2), feet
//! - `h` = Section length along the axis, feet
//! - `s` = Cone slant height, feet
//!
//! All functions take and return plain feet-based `f64` values; unit
//! conversion happens in the evaluator.

use std::f64::consts::PI;

// =============================================================================
// VOLUMES
// =============================================================================

/// Volume of a right circular cylinder
///
/// # Formula
/// V = π r² h
///
/// # Example
/// ```rust
/// use pontoon_core::equations::geometry::cylinder_volume;
///
/// // 12" pontoon, 4.5 ft cylindrical section
/// let v = cylinder_volume(0.5, 4.5);
/// assert!((v - 3.534).abs() < 0.001);
/// ```
#[inline]
pub fn cylinder_volume(r: f64, h: f64) -> f64 {
    PI * r.powi(2) * h
}

/// Volume of a right circular cone
///
/// # Formula
/// V = (1/3) π r² h
///
/// # Example
/// ```rust
/// use pontoon_core::equations::geometry::cone_volume;
///
/// let v = cone_volume(0.5, 1.5);
/// assert!((v - 0.3927).abs() < 0.0001);
/// ```
#[inline]
pub fn cone_volume(r: f64, h: f64) -> f64 {
    (1.0 / 3.0) * PI * r.powi(2) * h
}

// =============================================================================
// SURFACE AREAS
// =============================================================================

/// Lateral (side) area of a cylinder, end caps excluded
///
/// # Formula
/// A = 2π r h
#[inline]
pub fn cylinder_lateral_area(r: f64, h: f64) -> f64 {
    2.0 * PI * r * h
}

/// Slant height of a right circular cone
///
/// # Formula
/// s = √(r² + h²)
///
/// With `h = 0` the slant height collapses to the radius, so the cone
/// lateral area becomes a flat disc of area π r².
#[inline]
pub fn cone_slant_height(r: f64, h: f64) -> f64 {
    (r.powi(2) + h.powi(2)).sqrt()
}

/// Lateral area of a right circular cone, base excluded
///
/// # Formula
/// A = π r s
///
/// # Example
/// ```rust
/// use pontoon_core::equations::geometry::{cone_lateral_area, cone_slant_height};
///
/// let s = cone_slant_height(0.5, 1.5);
/// let a = cone_lateral_area(0.5, s);
/// assert!((a - 2.4836).abs() < 0.0001);
/// ```
#[inline]
pub fn cone_lateral_area(r: f64, s: f64) -> f64 {
    PI * r * s
}

/// Area of a circle (the pontoon's flat end cap)
///
/// # Formula
/// A = π r²
#[inline]
pub fn circle_area(r: f64) -> f64 {
    PI * r.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_is_third_of_cylinder() {
        let cyl = cylinder_volume(0.75, 2.0);
        let cone = cone_volume(0.75, 2.0);
        assert!((cyl / cone - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_cone_is_disc() {
        let s = cone_slant_height(0.5, 0.0);
        assert_eq!(s, 0.5);
        assert!((cone_lateral_area(0.5, s) - circle_area(0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_lateral_area() {
        // Unit radius, unit height: 2π
        assert!((cylinder_lateral_area(1.0, 1.0) - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_slant_height_3_4_5() {
        assert!((cone_slant_height(3.0, 4.0) - 5.0).abs() < 1e-12);
    }
}
