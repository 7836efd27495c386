//! # Boussinesq Stress Profile
//!
//! Vertical stress increment under a point load on a homogeneous elastic
//! half-space, evaluated at every depth sample.
//!
//! ## Example
//!
//! ```rust
//! use isobar_core::calculations::boussinesq;
//!
//! let sigma = boussinesq::profile(100.0, &[1.0, 2.0], 0.0);
//! assert!((sigma[0] - 47.746).abs() < 1e-3);
//! assert!(sigma[1] < sigma[0]);
//! ```

use crate::equations::boussinesq_stress;

/// Stress profile (kN/m²) for load `p_kn` at radial offset `r_m`.
///
/// The output is co-indexed with `depths_m`. Every depth must be > 0;
/// a zero depth yields a non-finite sample rather than an error.
pub fn profile(p_kn: f64, depths_m: &[f64], r_m: f64) -> Vec<f64> {
    depths_m.iter().map(|&z| boussinesq_stress(p_kn, z, r_m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_centreline_reduces_to_closed_form() {
        let depths = [0.5, 1.0, 2.0, 4.0];
        let sigma = profile(100.0, &depths, 0.0);
        for (z, s) in depths.iter().zip(&sigma) {
            assert_relative_eq!(*s, 3.0 * 100.0 / (2.0 * PI * z * z), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_length_preserved() {
        assert_eq!(profile(10.0, &[], 0.0).len(), 0);
        assert_eq!(profile(10.0, &[1.0, 2.0, 3.0], 1.0).len(), 3);
    }

    #[test]
    fn test_zero_depth_is_non_finite() {
        let sigma = profile(10.0, &[0.0], 0.0);
        assert!(!sigma[0].is_finite());
    }

    proptest! {
        #[test]
        fn prop_positive(p in 0.1f64..1.0e4, z in 0.05f64..50.0, r in 0.0f64..20.0) {
            let sigma = profile(p, &[z], r);
            prop_assert!(sigma[0] > 0.0);
        }

        #[test]
        fn prop_centreline_decays_with_depth(p in 0.1f64..1.0e4, z in 0.05f64..50.0, dz in 0.01f64..10.0) {
            let sigma = profile(p, &[z, z + dz], 0.0);
            prop_assert!(sigma[1] < sigma[0]);
        }

        #[test]
        fn prop_scales_linearly_with_load(p in 0.1f64..1.0e3, z in 0.05f64..50.0, r in 0.0f64..20.0) {
            let single = profile(p, &[z], r)[0];
            let double = profile(2.0 * p, &[z], r)[0];
            prop_assert!((double - 2.0 * single).abs() <= 1e-9 * double.abs());
        }
    }
}
