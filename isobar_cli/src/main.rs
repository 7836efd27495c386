//! # Isobar CLI
//!
//! Command-line shell for vertical stress distribution analysis beneath a
//! point load. All calculation lives in `isobar_core`; this binary only turns
//! arguments and project files into inputs and prints results.
//!
//! # Commands
//!
//! - `isobar calc ...` - Run one analysis from command-line values
//! - `isobar run <project>` - Run the analyses stored in a project file
//! - `isobar new <project>` - Write a template project
//! - `isobar export <project> --label L --output out.csv` - Export profiles as CSV
//! - `isobar equations` - Print the equation reference

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::calc::CalcArgs;
use output::OutputFormat;

/// Vertical stress under a point load: Boussinesq, Westergaard and foundation depth check
#[derive(Parser)]
#[command(name = "isobar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Rendering options shared by commands that print results
#[derive(Args)]
struct RenderArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Print every Nth depth sample in table output
    #[arg(long, default_value = "10")]
    every: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one analysis from command-line values
    Calc {
        /// Label for this analysis
        #[arg(long, default_value = "CLI")]
        label: String,

        /// Point load P [kN]
        #[arg(short = 'P', long = "load")]
        load_kn: f64,

        /// Plan offset X [m]
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        x: f64,

        /// Plan offset Y [m]
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        y: f64,

        /// Maximum depth z_max [m]
        #[arg(short = 'z', long = "max-depth")]
        max_depth_m: f64,

        /// Bearing capacity [kN/m²]
        #[arg(short, long = "capacity")]
        capacity_kpa: f64,

        /// Foundation depth [m]
        #[arg(short = 'd', long = "foundation-depth")]
        foundation_depth_m: f64,

        /// Layer top depths [m], e.g. "0,2,5"
        #[arg(long, default_value = "0")]
        layers: String,

        /// Poisson ratio per layer, e.g. "0.3,0.35,0.4"
        #[arg(long, default_value = "0.3")]
        poisson: String,

        /// Check against the weighted Boussinesq/Westergaard blend
        #[arg(long)]
        weighted: bool,

        /// Boussinesq weight in the blend
        #[arg(long, default_value = "0.5")]
        w_boussinesq: f64,

        /// Westergaard weight in the blend
        #[arg(long, default_value = "0.5")]
        w_westergaard: f64,

        /// Number of depth samples
        #[arg(long, default_value = "100")]
        samples: usize,

        /// Shallowest depth sample [m]
        #[arg(long, default_value = "0.1")]
        start_depth: f64,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Run the analyses stored in a project file
    Run {
        /// Path to project file
        project: PathBuf,

        /// Run only the analysis with this label
        #[arg(short, long)]
        label: Option<String>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Write a template project file
    New {
        /// Path of the project file to create
        project: PathBuf,

        #[arg(long, default_value = "")]
        engineer: String,

        #[arg(long, default_value = "")]
        job_id: String,

        #[arg(long, default_value = "")]
        client: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Export the depth/stress profiles of one analysis as CSV
    Export {
        /// Path to project file
        project: PathBuf,

        /// Label of the analysis to export
        #[arg(short, long)]
        label: String,

        /// CSV file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the equation reference as markdown
    Equations,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Calc {
            label,
            load_kn,
            x,
            y,
            max_depth_m,
            capacity_kpa,
            foundation_depth_m,
            layers,
            poisson,
            weighted,
            w_boussinesq,
            w_westergaard,
            samples,
            start_depth,
            render,
        } => {
            let args = CalcArgs {
                label,
                load_kn,
                x_m: x,
                y_m: y,
                max_depth_m,
                capacity_kpa,
                foundation_depth_m,
                layers,
                poisson,
                weighted,
                w_boussinesq,
                w_westergaard,
                samples,
                start_depth_m: start_depth,
            };
            commands::calc::run(&args, render.format, render.every)
        }
        Commands::Run { project, label, render } => {
            commands::run::run(&project, label.as_deref(), render.format, render.every)
        }
        Commands::New {
            project,
            engineer,
            job_id,
            client,
            force,
        } => commands::new::run(&project, &engineer, &job_id, &client, force),
        Commands::Export { project, label, output } => commands::export::run(&project, &label, &output),
        Commands::Equations => commands::equations::run(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if let Some(detail) = e.detail_json() {
                debug!("Error detail:\n{}", detail);
            }
            ExitCode::FAILURE
        }
    }
}
