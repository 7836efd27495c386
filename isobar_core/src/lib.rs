//! # isobar_core - Point Load Stress Distribution Engine
//!
//! `isobar_core` computes the vertical stress increment beneath a surface
//! point load in a layered soil, using the Boussinesq and Westergaard
//! solutions. It optionally blends the two and checks whether a foundation
//! depth keeps the induced stress within the soil's bearing capacity.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Validated at the boundary**: Inputs are checked once; the formulas assume valid data
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use isobar_core::{calculate, PointLoad, SoilProfile, StressAnalysisInput};
//!
//! let layers = SoilProfile::from_parallel(&[0.0, 2.0, 5.0], &[0.3, 0.35, 0.4]).unwrap();
//! let input = StressAnalysisInput::new("F-1", PointLoad::new(100.0, 1.0, 0.0), 10.0, layers, 150.0, 1.5);
//!
//! let result = calculate(&input).unwrap();
//! println!("{} ({:.1} kN/m²)", result.check.message(), result.check.stress_kpa);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Stress profiles, weighted blend, depth check, full analysis
//! - [`equations`] - Scalar formulas and the equation registry
//! - [`depth`] - Depth grid construction and interpolation
//! - [`soil`] - Layered soil profile and layer lookup
//! - [`load`] - Point load and radial offset
//! - [`input`] - Text-to-number parsing for form fields and CLI arguments
//! - [`project`] - Project container holding several analyses
//! - [`file_io`] - Project save/load and CSV export
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod depth;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod input;
pub mod load;
pub mod project;
pub mod soil;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BlendWeights, StressAnalysisInput, StressAnalysisResult};
pub use depth::DepthGrid;
pub use errors::{CalcError, CalcResult};
pub use file_io::{export_profiles_csv, load_project, save_project, write_labeled_profiles_csv};
pub use load::PointLoad;
pub use project::{Project, ProjectMetadata};
pub use soil::{SoilLayer, SoilProfile};
