//! Run command implementation
//!
//! Runs the analyses stored in a project file.

use std::path::Path;

use isobar_core::{calculate, load_project, CalcResult};
use tracing::{info, warn};

use crate::output::{print_labeled_csv, print_result, OutputFormat};
use crate::Result;

/// Run the run command: one labelled analysis, or all of them.
///
/// CSV output is a single table with a `label` column, so several analyses
/// still parse as one file.
pub fn run(project_path: &Path, label: Option<&str>, format: OutputFormat, every: usize) -> Result<()> {
    let project = load_project(project_path)?;
    info!(
        "Loaded project {} ({} analyses, engineer: {})",
        project.meta.job_id,
        project.item_count(),
        project.meta.engineer
    );

    let items = match label {
        Some(label) => vec![project.require_item(label)?],
        None => project.items.iter().collect(),
    };

    if items.is_empty() {
        warn!("Project {} contains no analyses", project_path.display());
    }

    let results = items.into_iter().map(calculate).collect::<CalcResult<Vec<_>>>()?;

    if format == OutputFormat::Csv {
        return print_labeled_csv(&results);
    }
    for result in &results {
        print_result(result, format, every)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::new;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;

    fn temp_project(name: &str) -> PathBuf {
        temp_dir().join(format!("isobar_cli_run_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_run_template_project() {
        let path = temp_project("template");
        new::run(&path, "Eng", "J-1", "Client", false).unwrap();

        run(&path, None, OutputFormat::Json, 10).unwrap();
        run(&path, Some("F-1"), OutputFormat::Table, 10).unwrap();
        run(&path, None, OutputFormat::Csv, 10).unwrap();

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_run_unknown_label() {
        let path = temp_project("unknown_label");
        new::run(&path, "Eng", "J-1", "Client", false).unwrap();

        let err = run(&path, Some("F-99"), OutputFormat::Json, 10).unwrap_err();
        assert!(err.to_string().contains("F-99"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_run_missing_project() {
        assert!(run(&temp_project("missing"), None, OutputFormat::Table, 10).is_err());
    }

    #[test]
    fn test_new_refuses_overwrite() {
        let path = temp_project("overwrite");
        new::run(&path, "Eng", "J-1", "Client", false).unwrap();

        assert!(matches!(
            new::run(&path, "Other", "J-2", "Client", false),
            Err(crate::CliError::InvalidArgument(_))
        ));
        new::run(&path, "Other", "J-2", "Client", true).unwrap();
        let project = isobar_core::load_project(&path).unwrap();
        assert_eq!(project.meta.job_id, "J-2");

        let _ = fs::remove_file(&path);
    }
}
