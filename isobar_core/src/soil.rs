//! # Soil Profile
//!
//! A layered soil profile described by the depth of each layer's top and the
//! layer's Poisson ratio. Only the Westergaard model uses it.
//!
//! Layers occupy right-open intervals: layer `i` spans `[top_i, top_i+1)` and
//! the last layer extends without limit. A depth exactly on a boundary belongs
//! to the deeper layer.
//!
//! ## Example
//!
//! ```rust
//! use isobar_core::soil::SoilProfile;
//!
//! let profile = SoilProfile::from_parallel(&[0.0, 2.0, 5.0], &[0.3, 0.35, 0.4]).unwrap();
//! assert_eq!(profile.poisson_ratio_at(3.0), 0.35);
//! assert_eq!(profile.poisson_ratio_at(6.0), 0.4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single soil layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilLayer {
    /// Depth of the top of the layer (m)
    pub top_m: f64,
    /// Poisson's ratio, strictly between 0 and 0.5
    pub poisson_ratio: f64,
}

impl SoilLayer {
    pub fn new(top_m: f64, poisson_ratio: f64) -> Self {
        SoilLayer { top_m, poisson_ratio }
    }
}

/// Validated, ordered list of soil layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SoilLayer>", into = "Vec<SoilLayer>")]
pub struct SoilProfile {
    layers: Vec<SoilLayer>,
}

impl SoilProfile {
    /// Build a profile from layers, validating order and Poisson ratios.
    pub fn new(layers: Vec<SoilLayer>) -> CalcResult<Self> {
        if layers.is_empty() {
            return Err(CalcError::invalid_input("layers", "[]", "At least one soil layer is required"));
        }

        for (i, layer) in layers.iter().enumerate() {
            if !layer.top_m.is_finite() || layer.top_m < 0.0 {
                return Err(CalcError::domain_violation(
                    format!("layers[{}].top_m", i),
                    layer.top_m.to_string(),
                    "Layer boundary must be a finite depth at or below the surface",
                ));
            }
            let mu = layer.poisson_ratio;
            if !(mu > 0.0 && mu < 0.5) {
                return Err(CalcError::domain_violation(
                    format!("layers[{}].poisson_ratio", i),
                    mu.to_string(),
                    "Poisson's ratio must be strictly between 0 and 0.5",
                ));
            }
        }

        if let Some(i) = layers.windows(2).position(|w| w[1].top_m < w[0].top_m) {
            return Err(CalcError::domain_violation(
                format!("layers[{}].top_m", i + 1),
                layers[i + 1].top_m.to_string(),
                "Layer boundaries must be non-decreasing",
            ));
        }

        Ok(SoilProfile { layers })
    }

    /// Build a profile from parallel boundary and Poisson ratio lists.
    pub fn from_parallel(boundaries_m: &[f64], poisson_ratios: &[f64]) -> CalcResult<Self> {
        if boundaries_m.len() != poisson_ratios.len() {
            return Err(CalcError::invalid_input(
                "poisson_ratios",
                format!("{} values", poisson_ratios.len()),
                format!(
                    "Expected one Poisson ratio per layer boundary ({} boundaries)",
                    boundaries_m.len()
                ),
            ));
        }

        let layers = boundaries_m
            .iter()
            .zip(poisson_ratios)
            .map(|(&top_m, &poisson_ratio)| SoilLayer { top_m, poisson_ratio })
            .collect();
        Self::new(layers)
    }

    /// A single homogeneous layer from the surface down.
    pub fn uniform(poisson_ratio: f64) -> CalcResult<Self> {
        Self::new(vec![SoilLayer::new(0.0, poisson_ratio)])
    }

    pub fn layers(&self) -> &[SoilLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false for a validated profile.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Depth of the topmost boundary (m)
    pub fn top_m(&self) -> f64 {
        self.layers[0].top_m
    }

    /// Index of the layer containing depth `z`.
    ///
    /// This is the last layer whose top is <= z. A depth above the first
    /// boundary clamps to layer 0.
    pub fn layer_index_at(&self, z: f64) -> usize {
        self.layers
            .partition_point(|layer| layer.top_m <= z)
            .saturating_sub(1)
    }

    /// Poisson's ratio of the layer containing depth `z`.
    pub fn poisson_ratio_at(&self, z: f64) -> f64 {
        self.layers[self.layer_index_at(z)].poisson_ratio
    }

    /// Check that the profile starts at or above `z_min`, so every sample
    /// deeper than `z_min` falls in a declared layer.
    pub fn ensure_covers(&self, z_min: f64) -> CalcResult<()> {
        if self.top_m() > z_min {
            return Err(CalcError::domain_violation(
                "layers[0].top_m",
                self.top_m().to_string(),
                format!("Topmost layer must start at or above the shallowest depth sample ({} m)", z_min),
            ));
        }
        Ok(())
    }
}

impl TryFrom<Vec<SoilLayer>> for SoilProfile {
    type Error = CalcError;

    fn try_from(layers: Vec<SoilLayer>) -> CalcResult<Self> {
        SoilProfile::new(layers)
    }
}

impl From<SoilProfile> for Vec<SoilLayer> {
    fn from(profile: SoilProfile) -> Self {
        profile.layers
    }
}
