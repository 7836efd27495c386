//! # File I/O Module
//!
//! Project persistence and result export:
//! - **Atomic saves**: Write to a `.tmp` sibling, sync, rename to prevent corruption
//! - **Version validation**: Reject files written by an incompatible schema
//! - **CSV export**: Depth/stress table for plotting in external tools
//!
//! ## Example
//!
//! ```rust,no_run
//! use isobar_core::file_io::{save_project, load_project};
//! use isobar_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("footings.json");
//!
//! save_project(&project, path).unwrap();
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.meta.job_id, "25-001");
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::calculations::StressAnalysisResult;
use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Temp file used during an atomic save: `<name>.tmp` next to the target.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save a project with an atomic write.
///
/// # Returns
///
/// * `Err(CalcError::SerializationError)` - Project could not be serialized
/// * `Err(CalcError::FileError)` - I/O error
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), items = project.item_count(), "project saved");
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON or invalid analysis input
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid project in {}: {}", path.display(), e),
    })?;

    validate_version(&project.meta.version)?;

    debug!(path = %path.display(), items = project.item_count(), "project loaded");
    Ok(project)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

/// Write the depth/stress table of a result as CSV.
///
/// Columns: `depth_m, boussinesq_kpa, westergaard_kpa` and `weighted_kpa`
/// when the blend was computed.
pub fn write_profiles_csv<W: Write>(result: &StressAnalysisResult, writer: W) -> CalcResult<()> {
    let csv_error = |e: csv::Error| CalcError::SerializationError { reason: e.to_string() };
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["depth_m", "boussinesq_kpa", "westergaard_kpa"];
    if result.weighted_kpa.is_some() {
        header.push("weighted_kpa");
    }
    wtr.write_record(&header).map_err(csv_error)?;

    for (i, depth) in result.depths_m.iter().enumerate() {
        let mut row = vec![
            depth.to_string(),
            result.boussinesq_kpa[i].to_string(),
            result.westergaard_kpa[i].to_string(),
        ];
        if let Some(weighted) = &result.weighted_kpa {
            row.push(weighted[i].to_string());
        }
        wtr.write_record(&row).map_err(csv_error)?;
    }

    wtr.flush().map_err(|e| CalcError::SerializationError { reason: e.to_string() })?;
    Ok(())
}

/// Write the depth/stress tables of several results as one CSV.
///
/// Each row starts with the result's label. The header is written once;
/// `weighted_kpa` is included when any result has a blend, and left empty
/// for results without one.
pub fn write_labeled_profiles_csv<W: Write>(results: &[StressAnalysisResult], writer: W) -> CalcResult<()> {
    let csv_error = |e: csv::Error| CalcError::SerializationError { reason: e.to_string() };
    let mut wtr = csv::Writer::from_writer(writer);

    let any_weighted = results.iter().any(|r| r.weighted_kpa.is_some());
    let mut header = vec!["label", "depth_m", "boussinesq_kpa", "westergaard_kpa"];
    if any_weighted {
        header.push("weighted_kpa");
    }
    wtr.write_record(&header).map_err(csv_error)?;

    for result in results {
        for (i, depth) in result.depths_m.iter().enumerate() {
            let mut row = vec![
                result.label.clone(),
                depth.to_string(),
                result.boussinesq_kpa[i].to_string(),
                result.westergaard_kpa[i].to_string(),
            ];
            if any_weighted {
                row.push(result.weighted_kpa.as_ref().map(|w| w[i].to_string()).unwrap_or_default());
            }
            wtr.write_record(&row).map_err(csv_error)?;
        }
    }

    wtr.flush().map_err(|e| CalcError::SerializationError { reason: e.to_string() })?;
    Ok(())
}

/// Export the depth/stress table of a result to a CSV file.
pub fn export_profiles_csv(result: &StressAnalysisResult, path: &Path) -> CalcResult<()> {
    let file = File::create(path).map_err(|e| {
        CalcError::file_error("create", path.display().to_string(), e.to_string())
    })?;
    write_profiles_csv(result, file)?;
    debug!(path = %path.display(), rows = result.depths_m.len(), "profiles exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{calculate, BlendWeights, StressAnalysisInput};
    use crate::load::PointLoad;
    use crate::soil::SoilProfile;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("isobar_test_{}_{}.json", name, std::process::id()))
    }

    fn sample_result(weighted: bool) -> StressAnalysisResult {
        labeled_result("F-1", weighted)
    }

    fn labeled_result(label: &str, weighted: bool) -> StressAnalysisResult {
        let mut input = StressAnalysisInput::new(
            label,
            PointLoad::centred(100.0),
            2.0,
            SoilProfile::uniform(0.3).unwrap(),
            150.0,
            1.0,
        );
        input.samples = 5;
        if weighted {
            input = input.with_weighted(BlendWeights::default());
        }
        calculate(&input).unwrap()
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/path/to/project.json")),
            Path::new("/path/to/project.json.tmp")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");

        let project = Project::template("Test Engineer", "TEST-001", "Test Client").unwrap();
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.job_id, "TEST-001");
        assert_eq!(loaded.items, project.items);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");

        save_project(&Project::new("Test", "TEST", "Client"), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_project(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_rejects_invalid_layers() {
        let path = temp_path("invalid_layers");
        let project = Project::template("Test", "TEST", "Client").unwrap();
        let json = serde_json::to_string(&project)
            .unwrap()
            .replace("\"poisson_ratio\":0.3", "\"poisson_ratio\":0.7");
        fs::write(&path, json).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_csv_columns() {
        let mut buffer = Vec::new();
        write_profiles_csv(&sample_result(false), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "depth_m,boussinesq_kpa,westergaard_kpa");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("0.1,"));
    }

    #[test]
    fn test_csv_includes_weighted_column() {
        let mut buffer = Vec::new();
        write_profiles_csv(&sample_result(true), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("depth_m,boussinesq_kpa,westergaard_kpa,weighted_kpa\n"));
        assert_eq!(text.lines().nth(2).unwrap().split(',').count(), 4);
    }

    #[test]
    fn test_labeled_csv_single_header() {
        let results = vec![labeled_result("F-1", false), labeled_result("F-2", false)];
        let mut buffer = Vec::new();
        write_labeled_profiles_csv(&results, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "label,depth_m,boussinesq_kpa,westergaard_kpa");
        assert_eq!(lines.len(), 1 + 2 * 5);
        assert_eq!(lines.iter().filter(|l| l.starts_with("label,")).count(), 1);
        assert!(lines[1].starts_with("F-1,0.1,"));
        assert!(lines[6].starts_with("F-2,0.1,"));
    }

    #[test]
    fn test_labeled_csv_mixed_blend() {
        let results = vec![labeled_result("F-1", true), labeled_result("F-2", false)];
        let mut buffer = Vec::new();
        write_labeled_profiles_csv(&results, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "label,depth_m,boussinesq_kpa,westergaard_kpa,weighted_kpa");
        assert!(!lines[1].ends_with(','));
        assert!(lines[6].starts_with("F-2,") && lines[6].ends_with(','));
        assert!(lines.iter().all(|l| l.split(',').count() == 5));
    }

    #[test]
    fn test_export_to_file() {
        let path = temp_dir().join(format!("isobar_test_export_{}.csv", std::process::id()));
        export_profiles_csv(&sample_result(false), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 6);
        let _ = fs::remove_file(&path);
    }
}
