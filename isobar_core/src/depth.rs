//! # Depth Grid
//!
//! The depth grid is the independent variable shared by every stress profile.
//! A [`DepthGrid`] is always non-empty, strictly increasing and strictly
//! positive, so profile functions can divide by z² without checking.
//!
//! ## Example
//!
//! ```rust
//! use isobar_core::depth::DepthGrid;
//!
//! let grid = DepthGrid::from_max_depth(10.0).unwrap();
//! assert_eq!(grid.len(), 100);
//! assert_eq!(grid.first(), 0.1);
//! assert_eq!(grid.last(), 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default shallowest sample (m). Depth zero is singular for both models.
pub const DEFAULT_START_DEPTH_M: f64 = 0.1;

/// Default number of depth samples
pub const DEFAULT_SAMPLES: usize = 100;

/// Upper bound on the number of depth samples in a generated grid
pub const MAX_SAMPLES: usize = 100_000;

/// Validated, strictly increasing sequence of positive depths (m).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct DepthGrid {
    depths_m: Vec<f64>,
}

impl DepthGrid {
    /// Build `samples` evenly spaced depths from `start_m` to `stop_m` inclusive.
    ///
    /// The last sample is exactly `stop_m`.
    pub fn linspace(start_m: f64, stop_m: f64, samples: usize) -> CalcResult<Self> {
        if !start_m.is_finite() || start_m <= 0.0 {
            return Err(CalcError::domain_violation(
                "start_depth_m",
                start_m.to_string(),
                "Start depth must be positive; stress is singular at z = 0",
            ));
        }
        if !stop_m.is_finite() || stop_m <= start_m {
            return Err(CalcError::domain_violation(
                "max_depth_m",
                stop_m.to_string(),
                format!("Maximum depth must be greater than the start depth ({} m)", start_m),
            ));
        }
        if samples < 2 {
            return Err(CalcError::invalid_input(
                "samples",
                samples.to_string(),
                "At least two depth samples are required",
            ));
        }
        if samples > MAX_SAMPLES {
            return Err(CalcError::invalid_input(
                "samples",
                samples.to_string(),
                format!("At most {} depth samples are supported", MAX_SAMPLES),
            ));
        }

        let step = (stop_m - start_m) / (samples - 1) as f64;
        let depths_m: Vec<f64> = (0..samples)
            .map(|i| if i == samples - 1 { stop_m } else { start_m + i as f64 * step })
            .collect();

        // Spacing below f64 resolution collapses neighbouring samples
        if depths_m.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CalcError::domain_violation(
                "max_depth_m",
                stop_m.to_string(),
                format!(
                    "Depth range {} to {} m is too narrow for {} distinct samples",
                    start_m, stop_m, samples
                ),
            ));
        }

        Ok(DepthGrid { depths_m })
    }

    /// The default grid: 100 samples from 0.1 m to `max_depth_m`.
    pub fn from_max_depth(max_depth_m: f64) -> CalcResult<Self> {
        Self::linspace(DEFAULT_START_DEPTH_M, max_depth_m, DEFAULT_SAMPLES)
    }

    /// Wrap an explicit list of depths after validating it.
    pub fn from_depths(depths_m: Vec<f64>) -> CalcResult<Self> {
        if depths_m.is_empty() {
            return Err(CalcError::invalid_input("depths_m", "[]", "Depth list is empty"));
        }
        for (i, &z) in depths_m.iter().enumerate() {
            if !z.is_finite() || z <= 0.0 {
                return Err(CalcError::domain_violation(
                    format!("depths_m[{}]", i),
                    z.to_string(),
                    "Depths must be positive and finite",
                ));
            }
        }
        if let Some(i) = depths_m.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CalcError::domain_violation(
                format!("depths_m[{}]", i + 1),
                depths_m[i + 1].to_string(),
                "Depths must be strictly increasing",
            ));
        }
        Ok(DepthGrid { depths_m })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.depths_m
    }

    pub fn len(&self) -> usize {
        self.depths_m.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.depths_m.is_empty()
    }

    /// Shallowest sample
    pub fn first(&self) -> f64 {
        self.depths_m[0]
    }

    /// Deepest sample
    pub fn last(&self) -> f64 {
        self.depths_m[self.depths_m.len() - 1]
    }

    /// Whether `z` lies within [first, last]
    pub fn contains(&self, z: f64) -> bool {
        z >= self.first() && z <= self.last()
    }
}

impl TryFrom<Vec<f64>> for DepthGrid {
    type Error = CalcError;

    fn try_from(depths_m: Vec<f64>) -> CalcResult<Self> {
        DepthGrid::from_depths(depths_m)
    }
}

impl From<DepthGrid> for Vec<f64> {
    fn from(grid: DepthGrid) -> Self {
        grid.depths_m
    }
}

/// Piecewise-linear interpolation of `values` sampled at ascending `xs`.
///
/// Outside the sampled range the first/last value is returned. Callers
/// guarantee `xs` is ascending, non-empty and the same length as `values`.
pub fn interpolate(x: f64, xs: &[f64], values: &[f64]) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return values[0];
    }
    if x >= xs[last] {
        return values[last];
    }

    // First index with xs[i] > x; x is strictly inside so 1 <= hi <= last
    let hi = xs.partition_point(|&xi| xi <= x);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    values[lo] + t * (values[hi] - values[lo])
}
