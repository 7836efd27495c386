//! # Project Data Structures
//!
//! A `Project` groups the stress analyses for one job. Projects serialize to
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! └── items: Vec<StressAnalysisInput> (analyses, unique by label)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use isobar_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("25-042"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::StressAnalysisInput;
use crate::errors::{CalcError, CalcResult};
use crate::load::PointLoad;
use crate::soil::{SoilLayer, SoilProfile};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    /// Analyses in insertion order; labels are unique
    #[serde(default)]
    pub items: Vec<StressAnalysisInput>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// ```rust
    /// use isobar_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert_eq!(project.item_count(), 0);
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            items: Vec::new(),
        }
    }

    /// A project pre-filled with one example analysis, used as a template.
    pub fn template(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> CalcResult<Self> {
        let mut project = Project::new(engineer, job_id, client);
        let layers = SoilProfile::new(vec![
            SoilLayer::new(0.0, 0.3),
            SoilLayer::new(2.0, 0.35),
            SoilLayer::new(5.0, 0.4),
        ])?;
        project.add_item(StressAnalysisInput::new(
            "F-1",
            PointLoad::new(100.0, 0.5, 0.5),
            10.0,
            layers,
            150.0,
            1.5,
        ))?;
        Ok(project)
    }

    /// Add an analysis. Fails if the label is already used.
    pub fn add_item(&mut self, item: StressAnalysisInput) -> CalcResult<()> {
        if self.get_item(&item.label).is_some() {
            return Err(CalcError::invalid_input(
                "label",
                item.label.clone(),
                "An analysis with this label already exists",
            ));
        }
        self.items.push(item);
        self.touch();
        Ok(())
    }

    /// Remove an analysis by label, returning it if it existed.
    pub fn remove_item(&mut self, label: &str) -> Option<StressAnalysisInput> {
        let index = self.items.iter().position(|item| item.label == label)?;
        self.touch();
        Some(self.items.remove(index))
    }

    pub fn get_item(&self, label: &str) -> Option<&StressAnalysisInput> {
        self.items.iter().find(|item| item.label == label)
    }

    /// Like [`Project::get_item`] but reports a missing label as an error.
    pub fn require_item(&self, label: &str) -> CalcResult<&StressAnalysisInput> {
        self.get_item(label).ok_or_else(|| CalcError::analysis_not_found(label))
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    pub client: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}
