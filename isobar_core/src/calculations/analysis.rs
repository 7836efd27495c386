//! # Stress Analysis
//!
//! One full run: build the depth grid, evaluate both stress models, optionally
//! blend them, and check the foundation depth. All inputs arrive in a single
//! [`StressAnalysisInput`]; nothing is read from global state, so identical
//! inputs always produce identical results.
//!
//! ## Example
//!
//! ```rust
//! use isobar_core::calculations::analysis::{calculate, StressAnalysisInput};
//! use isobar_core::load::PointLoad;
//! use isobar_core::soil::SoilProfile;
//!
//! let input = StressAnalysisInput::new(
//!     "F-1",
//!     PointLoad::centred(100.0),
//!     10.0,
//!     SoilProfile::uniform(0.3).unwrap(),
//!     150.0,
//!     1.5,
//! );
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.depths_m.len(), 100);
//! assert!(result.check.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculations::blend::{self, BlendWeights};
use crate::calculations::depth_check::{self, CheckedProfile, DepthCheckResult};
use crate::calculations::{boussinesq, westergaard};
use crate::depth::{DepthGrid, DEFAULT_SAMPLES, DEFAULT_START_DEPTH_M};
use crate::equations::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::load::PointLoad;
use crate::soil::SoilProfile;

fn default_start_depth() -> f64 {
    DEFAULT_START_DEPTH_M
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

/// Input parameters for a point load stress analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "load": { "magnitude_kn": 100.0, "x_m": 0.0, "y_m": 0.0 },
///   "max_depth_m": 10.0,
///   "layers": [
///     { "top_m": 0.0, "poisson_ratio": 0.3 },
///     { "top_m": 2.0, "poisson_ratio": 0.35 }
///   ],
///   "bearing_capacity_kpa": 150.0,
///   "foundation_depth_m": 1.5,
///   "weighted": true
/// }
/// ```
///
/// `start_depth_m`, `samples` and `weights` are optional and default to
/// 0.1 m, 100 samples and 0.5/0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAnalysisInput {
    /// User label (e.g., "F-1", "Column C3 footing")
    pub label: String,

    pub load: PointLoad,

    /// Deepest depth sample (m)
    pub max_depth_m: f64,

    /// Shallowest depth sample (m)
    #[serde(default = "default_start_depth")]
    pub start_depth_m: f64,

    /// Number of evenly spaced depth samples
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Soil layers for the Westergaard model
    pub layers: SoilProfile,

    /// Bearing capacity (kN/m²)
    pub bearing_capacity_kpa: f64,

    /// Foundation (desplante) depth (m)
    pub foundation_depth_m: f64,

    /// Check against the weighted blend instead of Westergaard
    #[serde(default)]
    pub weighted: bool,

    #[serde(default)]
    pub weights: BlendWeights,
}

impl StressAnalysisInput {
    /// Input with the default grid (0.1 m, 100 samples) and the Westergaard check.
    pub fn new(
        label: impl Into<String>,
        load: PointLoad,
        max_depth_m: f64,
        layers: SoilProfile,
        bearing_capacity_kpa: f64,
        foundation_depth_m: f64,
    ) -> Self {
        StressAnalysisInput {
            label: label.into(),
            load,
            max_depth_m,
            start_depth_m: DEFAULT_START_DEPTH_M,
            samples: DEFAULT_SAMPLES,
            layers,
            bearing_capacity_kpa,
            foundation_depth_m,
            weighted: false,
            weights: BlendWeights::default(),
        }
    }

    /// Enable the weighted blend with the given weights.
    pub fn with_weighted(mut self, weights: BlendWeights) -> Self {
        self.weighted = true;
        self.weights = weights;
        self
    }

    /// Validate every input and build the depth grid.
    ///
    /// Layer validity is guaranteed by [`SoilProfile`]; here we additionally
    /// check that the layers cover the sampled range.
    pub fn validate(&self) -> CalcResult<DepthGrid> {
        self.load.validate()?;
        let grid = DepthGrid::linspace(self.start_depth_m, self.max_depth_m, self.samples)?;
        self.layers.ensure_covers(grid.first())?;

        if !self.bearing_capacity_kpa.is_finite() {
            return Err(CalcError::invalid_input(
                "bearing_capacity_kpa",
                self.bearing_capacity_kpa.to_string(),
                "Bearing capacity must be finite",
            ));
        }
        if !self.foundation_depth_m.is_finite() || self.foundation_depth_m < 0.0 {
            return Err(CalcError::domain_violation(
                "foundation_depth_m",
                self.foundation_depth_m.to_string(),
                "Foundation depth must be a finite depth at or below the surface",
            ));
        }
        if self.weighted {
            self.weights.validate()?;
        }

        Ok(grid)
    }

    pub fn checked_profile(&self) -> CheckedProfile {
        CheckedProfile::select(self.weighted)
    }
}

/// Results of a stress analysis. All profiles are co-indexed with `depths_m`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAnalysisResult {
    pub label: String,

    /// Radial offset r (m)
    pub radial_offset_m: f64,

    /// Depth samples (m)
    pub depths_m: Vec<f64>,

    /// Boussinesq stress (kN/m²)
    pub boussinesq_kpa: Vec<f64>,

    /// Westergaard stress (kN/m²)
    pub westergaard_kpa: Vec<f64>,

    /// Weighted stress (kN/m²), present only when the blend is enabled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weighted_kpa: Option<Vec<f64>>,

    /// Profile used for the depth check
    pub checked_profile: CheckedProfile,

    pub check: DepthCheckResult,

    /// Equations applied, for the report appendix
    pub equations: EquationTracker,
}

impl StressAnalysisResult {
    /// The profile the depth check was run against
    pub fn checked_stress(&self) -> &[f64] {
        match (self.checked_profile, &self.weighted_kpa) {
            (CheckedProfile::Weighted, Some(weighted)) => weighted,
            _ => &self.westergaard_kpa,
        }
    }

    pub fn passes(&self) -> bool {
        self.check.passes()
    }
}

/// Run a complete stress analysis.
///
/// # Errors
///
/// Returns the first validation failure; no partial result is produced.
pub fn calculate(input: &StressAnalysisInput) -> CalcResult<StressAnalysisResult> {
    let grid = input.validate()?;
    let depths = grid.as_slice();
    let mut equations = EquationTracker::new();

    let p = input.load.magnitude_kn;
    let r = input.load.radial_offset_m();
    equations.record(Equation::RadialOffset, "Load offset");
    debug!(label = %input.label, p, r, samples = depths.len(), "starting stress analysis");

    let boussinesq_kpa = boussinesq::profile(p, depths, r);
    equations.record(Equation::BoussinesqStress, "Boussinesq profile");

    let westergaard_kpa = westergaard::profile(p, depths, r, &input.layers);
    equations.record(Equation::WestergaardEta, "Westergaard profile");
    equations.record(Equation::WestergaardInfluence, "Westergaard profile");
    equations.record(Equation::WestergaardStress, "Westergaard profile");

    let weighted_kpa = if input.weighted {
        if !input.weights.is_normalized() {
            warn!(
                boussinesq = input.weights.boussinesq,
                westergaard = input.weights.westergaard,
                "blend weights do not form a convex combination"
            );
        }
        equations.record(Equation::WeightedStress, "Weighted profile");
        Some(blend::blend(&boussinesq_kpa, &westergaard_kpa, input.weights)?)
    } else {
        None
    };

    let checked_profile = input.checked_profile();
    let checked = match &weighted_kpa {
        Some(weighted) => weighted.as_slice(),
        None => westergaard_kpa.as_slice(),
    };
    let check = depth_check::check(checked, depths, input.foundation_depth_m, input.bearing_capacity_kpa)?;
    equations.record(Equation::LinearInterpolation, "Stress at foundation depth");
    equations.record(Equation::BearingCapacityCheck, "Foundation depth check");

    info!(
        label = %input.label,
        profile = checked_profile.display_name(),
        stress_kpa = check.stress_kpa,
        capacity_kpa = check.capacity_kpa,
        passes = check.passes(),
        "stress analysis complete"
    );

    Ok(StressAnalysisResult {
        label: input.label.clone(),
        radial_offset_m: r,
        depths_m: depths.to_vec(),
        boussinesq_kpa,
        westergaard_kpa,
        weighted_kpa,
        checked_profile,
        check,
        equations,
    })
}
