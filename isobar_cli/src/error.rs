//! CLI error type.

use isobar_core::CalcError;
use thiserror::Error;

/// Errors surfaced by the `isobar` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// Any failure from the calculation engine
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Argument combination clap cannot express
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Structured JSON detail for engine errors
    pub fn detail_json(&self) -> Option<String> {
        match self {
            CliError::Calc(e) => serde_json::to_string_pretty(e).ok(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
