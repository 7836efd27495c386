//! Calc command implementation
//!
//! Runs a single analysis built from command-line values.

use isobar_core::input::parse_list;
use isobar_core::{calculate, BlendWeights, PointLoad, SoilProfile, StressAnalysisInput};
use tracing::info;

use crate::output::{print_result, OutputFormat};
use crate::Result;

/// Values for a single analysis, as entered on the command line.
///
/// Layer lists arrive as text so that malformed entries are reported with the
/// offending element, the same way a form field would be.
#[derive(Debug, Clone)]
pub struct CalcArgs {
    pub label: String,
    pub load_kn: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub max_depth_m: f64,
    pub capacity_kpa: f64,
    pub foundation_depth_m: f64,
    pub layers: String,
    pub poisson: String,
    pub weighted: bool,
    pub w_boussinesq: f64,
    pub w_westergaard: f64,
    pub samples: usize,
    pub start_depth_m: f64,
}

impl CalcArgs {
    /// Build and validate the analysis input.
    pub fn to_input(&self) -> Result<StressAnalysisInput> {
        let boundaries = parse_list("layers", &self.layers)?;
        let ratios = parse_list("poisson", &self.poisson)?;
        let layers = SoilProfile::from_parallel(&boundaries, &ratios)?;

        let mut input = StressAnalysisInput::new(
            self.label.clone(),
            PointLoad::new(self.load_kn, self.x_m, self.y_m),
            self.max_depth_m,
            layers,
            self.capacity_kpa,
            self.foundation_depth_m,
        );
        input.samples = self.samples;
        input.start_depth_m = self.start_depth_m;
        if self.weighted {
            input = input.with_weighted(BlendWeights::new(self.w_boussinesq, self.w_westergaard));
        }
        Ok(input)
    }
}

/// Run the calc command
pub fn run(args: &CalcArgs, format: OutputFormat, every: usize) -> Result<()> {
    let input = args.to_input()?;
    info!("Running analysis '{}'", input.label);
    let result = calculate(&input)?;
    print_result(&result, format, every)
}
