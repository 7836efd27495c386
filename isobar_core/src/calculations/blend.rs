//! # Weighted Blend
//!
//! Combines the Boussinesq and Westergaard profiles into a single weighted
//! estimate. Weights are applied as given; they are not normalized.

use serde::{Deserialize, Serialize};

use crate::equations::weighted_stress;
use crate::errors::{CalcError, CalcResult};

/// Weights applied to the two stress models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub boussinesq: f64,
    pub westergaard: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        BlendWeights {
            boussinesq: 0.5,
            westergaard: 0.5,
        }
    }
}

impl BlendWeights {
    pub fn new(boussinesq: f64, westergaard: f64) -> Self {
        BlendWeights { boussinesq, westergaard }
    }

    /// Sum of both weights
    pub fn total(&self) -> f64 {
        self.boussinesq + self.westergaard
    }

    /// Whether the weights form a convex combination
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-9 && self.boussinesq >= 0.0 && self.westergaard >= 0.0
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !self.boussinesq.is_finite() {
            return Err(CalcError::invalid_input(
                "weights.boussinesq",
                self.boussinesq.to_string(),
                "Weight must be finite",
            ));
        }
        if !self.westergaard.is_finite() {
            return Err(CalcError::invalid_input(
                "weights.westergaard",
                self.westergaard.to_string(),
                "Weight must be finite",
            ));
        }
        Ok(())
    }
}

/// Elementwise `w1·σ1 + w2·σ2`.
///
/// # Errors
///
/// `ShapeMismatch` if the profiles have different lengths.
///
/// ```rust
/// use isobar_core::calculations::blend::weighted;
///
/// let blended = weighted(&[10.0, 20.0], &[30.0, 40.0], 0.5, 0.5).unwrap();
/// assert_eq!(blended, vec![20.0, 30.0]);
/// assert!(weighted(&[1.0], &[1.0, 2.0], 0.5, 0.5).is_err());
/// ```
pub fn weighted(sigma_1: &[f64], sigma_2: &[f64], w1: f64, w2: f64) -> CalcResult<Vec<f64>> {
    if sigma_1.len() != sigma_2.len() {
        return Err(CalcError::shape_mismatch("weighted blend", sigma_1.len(), sigma_2.len()));
    }

    Ok(sigma_1
        .iter()
        .zip(sigma_2)
        .map(|(&s1, &s2)| weighted_stress(s1, w1, s2, w2))
        .collect())
}

/// [`weighted`] with a [`BlendWeights`] pair: Boussinesq first, Westergaard second.
pub fn blend(boussinesq: &[f64], westergaard: &[f64], weights: BlendWeights) -> CalcResult<Vec<f64>> {
    weighted(boussinesq, westergaard, weights.boussinesq, weights.westergaard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn test_default_weights() {
        let w = BlendWeights::default();
        assert_eq!(w.boussinesq, 0.5);
        assert_eq!(w.westergaard, 0.5);
        assert!(w.is_normalized());
        assert!(!BlendWeights::new(0.7, 0.7).is_normalized());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = weighted(&[1.0, 2.0, 3.0], &[1.0, 2.0], 0.5, 0.5).unwrap_err();
        assert_eq!(err, CalcError::shape_mismatch("weighted blend", 3, 2));
    }

    #[test]
    fn test_blend_orders_models() {
        let blended = blend(&[10.0], &[20.0], BlendWeights::new(1.0, 0.0)).unwrap();
        assert_eq!(blended, vec![10.0]);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        assert!(BlendWeights::new(f64::NAN, 0.5).validate().is_err());
        assert!(BlendWeights::new(0.3, 0.9).validate().is_ok());
    }

    proptest! {
        #[test]
        fn prop_equal_weights_average(pairs in vec((0.0f64..1.0e3, 0.0f64..1.0e3), 0..50)) {
            let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let blended = weighted(&a, &b, 0.5, 0.5).unwrap();
            for i in 0..a.len() {
                assert_relative_eq!(blended[i], (a[i] + b[i]) / 2.0, max_relative = 1e-12);
            }
        }

        #[test]
        fn prop_same_profile_is_linear(
            sigma in vec(0.0f64..1.0e3, 1..50),
            w1 in -2.0f64..2.0,
            w2 in -2.0f64..2.0,
        ) {
            let blended = weighted(&sigma, &sigma, w1, w2).unwrap();
            for (b, s) in blended.iter().zip(&sigma) {
                prop_assert!((b - (w1 + w2) * s).abs() <= 1e-9 * (1.0 + s.abs()));
            }
        }
    }
}
