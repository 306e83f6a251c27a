//! Report collection store.

use parking_lot::RwLock;
use rpt_model::{
    FilterUpdate, NewReport, Report, ReportFilterCriteria, ReportPatch, ReportStatus,
};
use serde_json::Value;

use super::Busy;
use crate::error::{Result, StoreError};
use crate::repository::ReportRepository;
use crate::state::ReportState;

/// Error recorded when listing reports fails.
pub const FETCH_REPORTS_FAILED: &str = "Failed to fetch reports";
/// Error recorded when creating a report fails.
pub const CREATE_REPORT_FAILED: &str = "Failed to create report";
/// Error recorded when updating a report fails.
pub const UPDATE_REPORT_FAILED: &str = "Failed to update report";
/// Error recorded when deleting a report fails.
pub const DELETE_REPORT_FAILED: &str = "Failed to delete report";

/// Holds the report collection and the criteria for viewing it.
///
/// Reads (`fetch_reports`, `fetch_report_by_id`) only record failures in
/// [`ReportStore::error`]. Mutations record them and also return them.
pub struct ReportStore<R> {
    repository: R,
    state: RwLock<ReportState>,
}

impl<R: ReportRepository> ReportStore<R> {
    /// Create an empty store backed by `repository`.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            state: RwLock::new(ReportState::default()),
        }
    }

    /// The backing repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    // ========================================================================
    // Repository operations
    // ========================================================================

    /// Replace the collection with the repository's records.
    pub async fn fetch_reports(&self) {
        let _busy = Busy::start(&self.state);

        match self.repository.list().await {
            Ok(reports) => {
                tracing::debug!(count = reports.len(), "Fetched reports");
                self.state.write().reports = reports;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch reports");
                self.state.write().error = Some(FETCH_REPORTS_FAILED.to_string());
            }
        }
    }

    /// Load one report into `current_report`.
    ///
    /// Only reports already in the collection can be loaded. A miss leaves
    /// `current_report` as it was and records the failure.
    pub async fn fetch_report_by_id(&self, id: &str) {
        let _busy = Busy::start(&self.state);

        let result = match self.repository.get(id).await {
            Ok(Some(report)) if self.holds(id) => Ok(report),
            Ok(_) => Err(not_found(id)),
            Err(err) => Err(err),
        };

        match result {
            Ok(report) => self.state.write().current_report = Some(report),
            Err(err) => {
                tracing::warn!(id, error = %err, "Failed to fetch report");
                self.state.write().error = Some(format!("Failed to fetch report: {err}"));
            }
        }
    }

    /// Create a report and append it to the collection.
    pub async fn create_report(&self, input: NewReport) -> Result<Report> {
        let _busy = Busy::start(&self.state);

        match self.repository.create(input).await {
            Ok(report) => {
                self.state.write().reports.push(report.clone());
                Ok(report)
            }
            Err(err) => Err(self.record_failure(CREATE_REPORT_FAILED, err)),
        }
    }

    /// Merge `patch` into the report with `id` and return the merged record.
    ///
    /// Fails with `ReportNotFound` unless the collection holds `id`; the
    /// repository is not touched in that case.
    pub async fn update_report(&self, id: &str, patch: ReportPatch) -> Result<Report> {
        let _busy = Busy::start(&self.state);

        if !self.holds(id) {
            return Err(self.record_failure(UPDATE_REPORT_FAILED, not_found(id)));
        }

        match self.repository.update(id, patch).await {
            Ok(report) => {
                // Removed from the collection while the update was in flight
                let replaced = self.state.write().replace_report(report.clone());
                if replaced {
                    Ok(report)
                } else {
                    Err(self.record_failure(UPDATE_REPORT_FAILED, not_found(id)))
                }
            }
            Err(err) => Err(self.record_failure(UPDATE_REPORT_FAILED, err)),
        }
    }

    /// Delete the report with `id`. Deleting an unknown id is not an error.
    pub async fn delete_report(&self, id: &str) -> Result<()> {
        let _busy = Busy::start(&self.state);

        match self.repository.delete(id).await {
            Ok(removed) => {
                if !removed {
                    tracing::debug!(id, "Delete matched no report");
                }
                self.state.write().remove_report(id);
                Ok(())
            }
            Err(err) => Err(self.record_failure(DELETE_REPORT_FAILED, err)),
        }
    }

    fn holds(&self, id: &str) -> bool {
        self.state.read().contains_report(id)
    }

    fn record_failure(&self, message: &str, err: StoreError) -> StoreError {
        tracing::error!(error = %err, "{message}");
        self.state.write().error = Some(message.to_string());
        err
    }

    // ========================================================================
    // Criteria
    // ========================================================================

    /// Change the status or date range criterion.
    pub fn set_filter(&self, update: FilterUpdate) {
        self.state.write().filters.update(update);
    }

    /// Apply a raw `(key, value)` criteria entry.
    ///
    /// Keys other than `status` and `dateRange` are ignored.
    pub fn set_filter_entry(&self, key: &str, value: Value) -> Result<()> {
        let update =
            FilterUpdate::from_entry(key, value).map_err(|e| StoreError::InvalidFilterValue {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        match update {
            Some(update) => self.set_filter(update),
            None => tracing::debug!(key, "Ignoring unknown report filter"),
        }
        Ok(())
    }

    /// Back to every status and no date bounds.
    pub fn clear_filters(&self) {
        self.state.write().filters = ReportFilterCriteria::default();
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    pub fn filtered_reports(&self) -> Vec<Report> {
        self.state.read().filtered_reports()
    }

    pub fn reports_by_status(&self, status: ReportStatus) -> Vec<Report> {
        self.state.read().reports_by_status(status)
    }

    pub fn total_reports(&self) -> usize {
        self.state.read().total_reports()
    }

    // ========================================================================
    // State access
    // ========================================================================

    pub fn reports(&self) -> Vec<Report> {
        self.state.read().reports.clone()
    }

    pub fn current_report(&self) -> Option<Report> {
        self.state.read().current_report.clone()
    }

    pub fn filters(&self) -> ReportFilterCriteria {
        self.state.read().filters
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// A copy of the whole state.
    pub fn snapshot(&self) -> ReportState {
        self.state.read().clone()
    }
}

fn not_found(id: &str) -> StoreError {
    StoreError::ReportNotFound { id: id.to_string() }
}

impl<R> std::fmt::Debug for ReportStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("ReportStore")
            .field("report_count", &state.reports.len())
            .field("has_current_report", &state.current_report.is_some())
            .field("loading", &state.loading)
            .field("error", &state.error)
            .field("filters", &state.filters)
            .finish()
    }
}
