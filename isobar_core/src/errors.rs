//! # Error Types
//!
//! Structured error types for isobar_core. Every failure an analysis can hit
//! is one of a small set of variants carrying enough context (field name,
//! offending value, reason) to be shown to an engineer or handled by a caller.
//!
//! ## Example
//!
//! ```rust
//! use isobar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_load(load_kn: f64) -> CalcResult<()> {
//!     if load_kn <= 0.0 {
//!         return Err(CalcError::domain_violation(
//!             "load_kn",
//!             load_kn.to_string(),
//!             "Point load must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_load(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for isobar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input is malformed: non-numeric text, mismatched list lengths, empty lists
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Input is well-formed but outside the physical domain of the models
    #[error("Domain violation for '{field}': {value} - {reason}")]
    DomainViolation {
        field: String,
        value: String,
        reason: String,
    },

    /// Two sequences that must be co-indexed have different lengths
    #[error("Shape mismatch in {context}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/CSV serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Requested analysis label is not present in a project
    #[error("Analysis not found: {label}")]
    AnalysisNotFound { label: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DomainViolation error
    pub fn domain_violation(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainViolation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ShapeMismatch error
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        CalcError::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an AnalysisNotFound error
    pub fn analysis_not_found(label: impl Into<String>) -> Self {
        CalcError::AnalysisNotFound { label: label.into() }
    }

    /// True for errors caused by the values the user typed, as opposed to I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::DomainViolation { .. } | CalcError::ShapeMismatch { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DomainViolation { .. } => "DOMAIN_VIOLATION",
            CalcError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::AnalysisNotFound { .. } => "ANALYSIS_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::domain_violation("poisson_ratio", "0.7", "Must be between 0 and 0.5");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"DomainViolation\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("P", "abc", "not a number").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::shape_mismatch("blend", 3, 2).error_code(), "SHAPE_MISMATCH");
        assert_eq!(CalcError::analysis_not_found("A-1").error_code(), "ANALYSIS_NOT_FOUND");
    }

    #[test]
    fn test_shape_mismatch_message() {
        let error = CalcError::shape_mismatch("weighted blend", 100, 99);
        assert_eq!(
            error.to_string(),
            "Shape mismatch in weighted blend: expected 100 values, got 99"
        );
        assert!(error.is_input_error());
        assert!(!CalcError::file_error("open", "x.json", "missing").is_input_error());
    }
}
