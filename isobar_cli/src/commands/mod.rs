//! Subcommand implementations.

pub mod calc;
pub mod equations;
pub mod export;
pub mod new;
pub mod run;
