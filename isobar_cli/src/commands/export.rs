//! Export command implementation
//!
//! Writes the depth/stress profiles of one analysis to a CSV file.

use std::path::Path;

use isobar_core::{calculate, export_profiles_csv, load_project};
use tracing::info;

use crate::Result;

/// Run the export command
pub fn run(project_path: &Path, label: &str, output: &Path) -> Result<()> {
    let project = load_project(project_path)?;
    let input = project.require_item(label)?;
    let result = calculate(input)?;

    export_profiles_csv(&result, output)?;
    info!(
        "Exported {} depth samples for '{}' to {}",
        result.depths_m.len(),
        label,
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::new;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_export_template_analysis() {
        let project = temp_dir().join(format!("isobar_cli_export_{}.json", std::process::id()));
        let csv_path = temp_dir().join(format!("isobar_cli_export_{}.csv", std::process::id()));
        new::run(&project, "Eng", "J-1", "Client", false).unwrap();

        run(&project, "F-1", &csv_path).unwrap();
        let text = fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "depth_m,boussinesq_kpa,westergaard_kpa");
        assert_eq!(lines.len(), 101);

        assert!(run(&project, "F-99", &csv_path).is_err());

        let _ = fs::remove_file(&project);
        let _ = fs::remove_file(&csv_path);
    }
}
