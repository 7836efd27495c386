//! New command implementation
//!
//! Writes a template project containing one example analysis.

use std::path::Path;

use isobar_core::{save_project, Project};
use tracing::info;

use crate::{CliError, Result};

/// Run the new command
pub fn run(path: &Path, engineer: &str, job_id: &str, client: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let project = Project::template(engineer, job_id, client)?;
    save_project(&project, path)?;
    info!("Wrote template project to {}", path.display());
    Ok(())
}
