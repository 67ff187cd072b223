//! # Material Presets
//!
//! Reference densities and unit weights for pontoon construction. These
//! only seed [`DesignInput::default`](crate::calculations::DesignInput) and
//! the CLI's `--water` option; the calculation itself takes every value from
//! the input record.
//!
//! ## Example
//!
//! ```rust
//! use pontoon_core::materials::WaterBody;
//!
//! let water = WaterBody::from_str_flexible("fresh").unwrap();
//! assert_eq!(water.density_pcf(), 62.4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Expanded polystyrene (EPS) foam core density, lb/ft³
pub const EPS_FOAM_DENSITY_PCF: f64 = 1.0;

/// Typical skin coating weight, lb/ft²
pub const COATING_WEIGHT_PSF: f64 = 0.03;

/// Aluminum frame tube weight, lb/ft
pub const ALUMINUM_TUBE_WEIGHT_PLF: f64 = 0.78;

/// Body of water the boat floats in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WaterBody {
    /// Fresh water (lakes, rivers)
    Fresh,
    /// Sea water
    #[default]
    Salt,
}

impl WaterBody {
    /// Water density in lb/ft³
    pub fn density_pcf(&self) -> f64 {
        match self {
            WaterBody::Fresh => 62.4,
            WaterBody::Salt => 64.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fresh" | "freshwater" | "fresh-water" | "lake" => Ok(WaterBody::Fresh),
            "salt" | "saltwater" | "salt-water" | "sea" | "seawater" => Ok(WaterBody::Salt),
            _ => Err(CalcError::invalid_input("water", s, "Expected 'fresh' or 'salt'")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WaterBody::Fresh => "Fresh Water",
            WaterBody::Salt => "Salt Water",
        }
    }
}

impl std::fmt::Display for WaterBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_densities() {
        assert_eq!(WaterBody::Fresh.density_pcf(), 62.4);
        assert_eq!(WaterBody::Salt.density_pcf(), 64.0);
        assert_eq!(WaterBody::default(), WaterBody::Salt);
    }

    #[test]
    fn test_parse_water_body() {
        assert_eq!(WaterBody::from_str_flexible("Sea").unwrap(), WaterBody::Salt);
        assert_eq!(WaterBody::from_str_flexible(" lake ").unwrap(), WaterBody::Fresh);
        let err = WaterBody::from_str_flexible("brackish").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&WaterBody::Fresh).unwrap();
        assert_eq!(json, "\"Fresh\"");
    }
}
