//! # Point Load
//!
//! A concentrated vertical load applied at the ground surface. Stresses are
//! evaluated on a vertical line at plan offset (x, y) from the load.

use serde::{Deserialize, Serialize};

use crate::equations::radial_offset;
use crate::errors::{CalcError, CalcResult};

/// Concentrated surface load and the plan offset of the point of interest.
///
/// ## JSON Example
///
/// ```json
/// { "magnitude_kn": 100.0, "x_m": 1.0, "y_m": 0.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude P (kN), positive downward
    pub magnitude_kn: f64,
    /// Plan offset along x (m)
    #[serde(default)]
    pub x_m: f64,
    /// Plan offset along y (m)
    #[serde(default)]
    pub y_m: f64,
}

impl PointLoad {
    pub fn new(magnitude_kn: f64, x_m: f64, y_m: f64) -> Self {
        PointLoad { magnitude_kn, x_m, y_m }
    }

    /// Load acting directly above the point of interest
    pub fn centred(magnitude_kn: f64) -> Self {
        Self::new(magnitude_kn, 0.0, 0.0)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !self.magnitude_kn.is_finite() || self.magnitude_kn <= 0.0 {
            return Err(CalcError::domain_violation(
                "magnitude_kn",
                self.magnitude_kn.to_string(),
                "Point load must be positive",
            ));
        }
        if !self.x_m.is_finite() {
            return Err(CalcError::invalid_input("x_m", self.x_m.to_string(), "Offset must be finite"));
        }
        if !self.y_m.is_finite() {
            return Err(CalcError::invalid_input("y_m", self.y_m.to_string(), "Offset must be finite"));
        }
        Ok(())
    }

    /// Radial offset r = √(x² + y²) (m)
    pub fn radial_offset_m(&self) -> f64 {
        radial_offset(self.x_m, self.y_m)
    }
}
