//! # Stress Distribution Equations
//!
//! All fundamental formulas used by the stress models live here, in one place,
//! so they can be checked against the literature independently of how the
//! profiles are assembled.
//!
//! ## Modules
//!
//! - [`stress`] - Boussinesq and Westergaard point load formulas
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Units
//!
//! - Loads in kN, lengths in m, stresses in kN/m² (kPa)

pub mod registry;
pub mod stress;

pub use stress::{
    boussinesq_influence,
    boussinesq_stress,
    radial_offset,
    weighted_stress,
    westergaard_eta,
    westergaard_influence,
    westergaard_stress,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
