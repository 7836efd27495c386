//! # Foundation Depth Check
//!
//! Interpolates a stress profile at the foundation (desplante) depth and
//! compares it with the soil's bearing capacity. The depth is insufficient
//! when the induced stress is strictly greater than the capacity.
//!
//! ## Example
//!
//! ```rust
//! use isobar_core::calculations::depth_check::check;
//!
//! let depths = [1.0, 2.0, 3.0];
//! let stress = [60.0, 30.0, 15.0];
//!
//! let result = check(&stress, &depths, 1.5, 40.0).unwrap();
//! assert_eq!(result.stress_kpa, 45.0);
//! assert!(result.exceeds_capacity);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::depth::interpolate;
use crate::errors::{CalcError, CalcResult};

/// Which stress profile the depth check is run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckedProfile {
    /// Westergaard layered profile
    Westergaard,
    /// Weighted Boussinesq/Westergaard blend
    Weighted,
}

impl CheckedProfile {
    /// The weighted blend when enabled, otherwise Westergaard
    pub fn select(weighted_enabled: bool) -> Self {
        if weighted_enabled {
            CheckedProfile::Weighted
        } else {
            CheckedProfile::Westergaard
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckedProfile::Westergaard => "Westergaard",
            CheckedProfile::Weighted => "Weighted",
        }
    }
}

/// Result of the foundation depth check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "target_depth_m": 1.5,
///   "stress_kpa": 24.3,
///   "capacity_kpa": 150.0,
///   "exceeds_capacity": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthCheckResult {
    /// Foundation depth checked (m)
    pub target_depth_m: f64,
    /// Interpolated stress at the foundation depth (kN/m²)
    pub stress_kpa: f64,
    /// Bearing capacity threshold (kN/m²)
    pub capacity_kpa: f64,
    /// True when stress > capacity
    pub exceeds_capacity: bool,
}

impl DepthCheckResult {
    /// The foundation depth keeps stress at or below capacity
    pub fn passes(&self) -> bool {
        !self.exceeds_capacity
    }

    /// Stress divided by capacity
    pub fn utilization(&self) -> f64 {
        self.stress_kpa / self.capacity_kpa
    }

    /// User-facing verdict
    pub fn message(&self) -> &'static str {
        if self.exceeds_capacity {
            "Insufficient foundation depth. Increasing the depth is recommended."
        } else {
            "The foundation depth is adequate."
        }
    }
}

/// Interpolate `profile_kpa` at `target_depth_m` and compare with `capacity_kpa`.
///
/// `depths_m` must be ascending. Targets outside the sampled range take the
/// nearest end sample.
///
/// # Errors
///
/// * `ShapeMismatch` if the profile and depth lengths differ
/// * `InvalidInput` if the profile is empty or a scalar input is not finite
pub fn check(
    profile_kpa: &[f64],
    depths_m: &[f64],
    target_depth_m: f64,
    capacity_kpa: f64,
) -> CalcResult<DepthCheckResult> {
    if profile_kpa.len() != depths_m.len() {
        return Err(CalcError::shape_mismatch("depth check", depths_m.len(), profile_kpa.len()));
    }
    if depths_m.is_empty() {
        return Err(CalcError::invalid_input("profile", "[]", "Stress profile is empty"));
    }
    if !target_depth_m.is_finite() {
        return Err(CalcError::invalid_input(
            "foundation_depth_m",
            target_depth_m.to_string(),
            "Foundation depth must be finite",
        ));
    }
    if !capacity_kpa.is_finite() {
        return Err(CalcError::invalid_input(
            "bearing_capacity_kpa",
            capacity_kpa.to_string(),
            "Bearing capacity must be finite",
        ));
    }

    let first = depths_m[0];
    let last = depths_m[depths_m.len() - 1];
    if target_depth_m < first || target_depth_m > last {
        warn!(
            target_depth_m,
            first, last, "foundation depth outside sampled range; using nearest sample"
        );
    }

    let stress_kpa = interpolate(target_depth_m, depths_m, profile_kpa);
    let exceeds_capacity = stress_kpa > capacity_kpa;
    debug!(target_depth_m, stress_kpa, capacity_kpa, exceeds_capacity, "depth check");

    Ok(DepthCheckResult {
        target_depth_m,
        stress_kpa,
        capacity_kpa,
        exceeds_capacity,
    })
}
