//! # Point Load Stress Formulas
//!
//! Closed-form vertical stress increments beneath a concentrated surface load.
//! Every function here is a scalar formula; profile construction over a depth
//! grid lives in [`crate::calculations`].
//!
//! ## Notation
//!
//! - `P` = Point load magnitude (kN)
//! - `z` = Depth below the surface (m), must be > 0
//! - `r` = Horizontal (radial) distance from the load line (m)
//! - `μ` = Poisson's ratio of the soil layer at depth z
//! - `η` = Westergaard elastic parameter
//! - `Δσz` = Vertical stress increment (kN/m²)
//!
//! ## Sign Conventions
//!
//! - Load: Positive downward
//! - Depth: Positive downward from the ground surface
//! - Stress: Positive in compression
//!
//! ## References
//!
//! - Boussinesq, J. (1885). Application des potentiels à l'étude de l'équilibre
//! - Westergaard, H.M. (1938). A problem of elasticity suggested by a problem
//!   in soil mechanics: soft material reinforced by numerous strong horizontal sheets
//! - Das, B.M. Principles of Geotechnical Engineering, Chapter 10

use std::f64::consts::PI;

/// Horizontal distance from the load line to a point at plan offset (x, y).
///
/// r = √(x² + y²)
#[inline]
pub fn radial_offset(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

// =============================================================================
// BOUSSINESQ
// Homogeneous, isotropic, linear-elastic half-space
// =============================================================================

/// Boussinesq influence factor for a point load.
///
/// # Formula
/// ```text
/// I_B = (3 / 2π) · [1 / (1 + (r/z)²)]^(5/2)
/// ```
#[inline]
pub fn boussinesq_influence(r: f64, z: f64) -> f64 {
    let ratio = r / z;
    (3.0 / (2.0 * PI)) * (1.0 / (1.0 + ratio * ratio)).powf(2.5)
}

/// Vertical stress increment under a point load in an elastic half-space.
///
/// ```text
///          P
///          ↓
///   ───────●──────────── ground
///          │╲
///        z │ ╲
///          │  ● (r, z)
/// ```
///
/// # Formula
/// ```text
/// Δσz = (3P / 2πz²) · [1 / (1 + (r/z)²)]^(5/2)
/// ```
///
/// On the load line (r = 0) this reduces to Δσz = 3P / (2πz²).
///
/// # Arguments
/// * `p` - Point load (kN)
/// * `z` - Depth (m), caller guarantees z > 0
/// * `r` - Radial offset (m)
///
/// # Returns
/// Vertical stress increment (kN/m²)
#[inline]
pub fn boussinesq_stress(p: f64, z: f64, r: f64) -> f64 {
    (p / (z * z)) * boussinesq_influence(r, z)
}

// =============================================================================
// WESTERGAARD
// Elastic medium laterally restrained by thin rigid horizontal sheets
// =============================================================================

/// Westergaard elastic parameter.
///
/// # Formula
/// ```text
/// η = √[(1 - 2μ) / (2 - 2μ)]
/// ```
///
/// Real and non-zero only for 0 ≤ μ < 0.5.
#[inline]
pub fn westergaard_eta(mu: f64) -> f64 {
    ((1.0 - 2.0 * mu) / (2.0 - 2.0 * mu)).sqrt()
}

/// Westergaard influence factor I5.
///
/// # Formula
/// ```text
/// I5 = (1 / 2πη²) · [(r / ηz)² + 1]^(-3/2)
/// ```
#[inline]
pub fn westergaard_influence(r: f64, z: f64, eta: f64) -> f64 {
    let ratio = r / (eta * z);
    (1.0 / (2.0 * PI * eta * eta)) * (ratio * ratio + 1.0).powf(-1.5)
}

/// Vertical stress increment under a point load in a Westergaard medium.
///
/// # Formula
/// ```text
/// Δσz = (P / z²) · I5
/// ```
///
/// # Arguments
/// * `p` - Point load (kN)
/// * `z` - Depth (m), caller guarantees z > 0
/// * `r` - Radial offset (m)
/// * `mu` - Poisson's ratio of the layer containing z
#[inline]
pub fn westergaard_stress(p: f64, z: f64, r: f64, mu: f64) -> f64 {
    let eta = westergaard_eta(mu);
    (p / (z * z)) * westergaard_influence(r, z, eta)
}

// =============================================================================
// COMBINATION
// =============================================================================

/// Weighted combination of two stress estimates.
///
/// Δσz = w₁·σ₁ + w₂·σ₂
#[inline]
pub fn weighted_stress(sigma_1: f64, w1: f64, sigma_2: f64, w2: f64) -> f64 {
    w1 * sigma_1 + w2 * sigma_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radial_offset() {
        assert_relative_eq!(radial_offset(3.0, 4.0), 5.0);
        assert_relative_eq!(radial_offset(-3.0, 0.0), 3.0);
    }

    #[test]
    fn test_boussinesq_on_load_line() {
        // Δσz = 3P / (2πz²) = 300 / 2π = 47.746
        let sigma = boussinesq_stress(100.0, 1.0, 0.0);
        assert_relative_eq!(sigma, 3.0 * 100.0 / (2.0 * PI), epsilon = 1e-12);
        assert_relative_eq!(sigma, 47.746, epsilon = 1e-3);
    }

    #[test]
    fn test_boussinesq_offset_reduces_stress() {
        let centre = boussinesq_stress(100.0, 2.0, 0.0);
        let offset = boussinesq_stress(100.0, 2.0, 2.0);
        // r/z = 1 → factor (1/2)^(5/2) = 0.1768
        assert_relative_eq!(offset / centre, 0.5_f64.powf(2.5), epsilon = 1e-12);
    }

    #[test]
    fn test_westergaard_eta() {
        // μ = 0.3 → η = √(0.4 / 1.4) = 0.5345
        assert_relative_eq!(westergaard_eta(0.3), (0.4_f64 / 1.4).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(westergaard_eta(0.3), 0.5345, epsilon = 1e-4);
        assert_relative_eq!(westergaard_eta(0.0), 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_westergaard_on_load_line() {
        // I5 = 1 / (2π·0.2857) = 0.557, Δσz = 100·0.557 = 55.7
        let sigma = westergaard_stress(100.0, 1.0, 0.0, 0.3);
        assert_relative_eq!(sigma, 100.0 * 1.4 / (2.0 * PI * 0.4), epsilon = 1e-10);
        assert_relative_eq!(sigma, 55.70, epsilon = 1e-2);
    }

    #[test]
    fn test_westergaard_non_finite_at_unit_poisson() {
        assert!(!westergaard_stress(100.0, 1.0, 0.5, 1.0).is_finite());
    }

    #[test]
    fn test_weighted_stress() {
        assert_relative_eq!(weighted_stress(10.0, 0.5, 20.0, 0.5), 15.0);
        assert_relative_eq!(weighted_stress(10.0, 1.0, 20.0, 0.0), 10.0);
    }
}
