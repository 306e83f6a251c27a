//! Store error types.
//!
//! Read operations fold these into the store's `error` field; mutations
//! record them and also return them to the caller.

use std::path::PathBuf;

use rpt_model::ReportId;
use thiserror::Error;

/// Store and repository operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No report with the given id.
    #[error("Report not found: {id}")]
    ReportNotFound { id: ReportId },

    /// The backing repository failed.
    #[error("Repository failed to {operation}: {reason}")]
    Repository {
        operation: &'static str,
        reason: String,
    },

    /// A raw filter entry named a known criterion with an unusable value.
    #[error("Invalid value for filter '{key}': {reason}")]
    InvalidFilterValue { key: String, reason: String },

    /// Settings could not be read or written.
    #[error("Settings error at {}: {reason}", .path.display())]
    Settings { path: PathBuf, reason: String },
}

impl StoreError {
    /// Shorthand for a repository failure.
    pub fn repository(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Repository {
            operation,
            reason: reason.into(),
        }
    }

    /// Whether the error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReportNotFound { .. })
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
