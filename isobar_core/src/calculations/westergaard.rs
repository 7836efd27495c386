//! # Westergaard Stress Profile
//!
//! Vertical stress increment under a point load in a layered medium laterally
//! restrained by rigid sheets. Each depth sample uses the Poisson ratio of the
//! layer that contains it.

use tracing::trace;

use crate::equations::westergaard_stress;
use crate::soil::SoilProfile;

/// Stress profile (kN/m²) for load `p_kn` at radial offset `r_m`.
///
/// The output is co-indexed with `depths_m`. Every depth must be > 0.
pub fn profile(p_kn: f64, depths_m: &[f64], r_m: f64, soil: &SoilProfile) -> Vec<f64> {
    depths_m
        .iter()
        .map(|&z| {
            let mu = soil.poisson_ratio_at(z);
            let sigma = westergaard_stress(p_kn, z, r_m, mu);
            trace!(z, mu, sigma, "westergaard sample");
            sigma
        })
        .collect()
}
