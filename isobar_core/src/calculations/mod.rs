//! # Stress Calculations
//!
//! Profile-level operations over a depth grid, plus the orchestration that
//! ties them together. Each follows the same pattern:
//!
//! - plain slices and scalars in, `Vec<f64>` or a `*Result` out
//! - no hidden state; identical inputs give identical outputs
//! - validation failures reported as [`crate::errors::CalcError`]
//!
//! ## Available Calculations
//!
//! - [`boussinesq`] - Elastic half-space profile
//! - [`westergaard`] - Layered, laterally restrained profile
//! - [`blend`] - Weighted combination of the two
//! - [`depth_check`] - Stress at the foundation depth vs bearing capacity
//! - [`analysis`] - Full run from a single input struct

pub mod analysis;
pub mod blend;
pub mod boussinesq;
pub mod depth_check;
pub mod westergaard;

// Re-export commonly used types
pub use analysis::{calculate, StressAnalysisInput, StressAnalysisResult};
pub use blend::BlendWeights;
pub use depth_check::{CheckedProfile, DepthCheckResult};
