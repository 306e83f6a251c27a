//! Report collection state.

use rpt_model::{Report, ReportFilterCriteria, ReportStatus};
use serde::Serialize;

use super::Tracked;

/// The report collection, the report being viewed, and the view criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportState {
    pub reports: Vec<Report>,
    pub current_report: Option<Report>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: ReportFilterCriteria,
}

impl ReportState {
    /// Reports passing the current criteria, in collection order.
    pub fn filtered_reports(&self) -> Vec<Report> {
        self.filters.apply(&self.reports)
    }

    /// Reports with exactly `status`, regardless of the criteria.
    pub fn reports_by_status(&self, status: ReportStatus) -> Vec<Report> {
        self.reports
            .iter()
            .filter(|report| report.status == status)
            .cloned()
            .collect()
    }

    /// Number of reports, regardless of the criteria.
    pub fn total_reports(&self) -> usize {
        self.reports.len()
    }

    /// Whether the collection holds a report with `id`.
    pub fn contains_report(&self, id: &str) -> bool {
        self.reports.iter().any(|report| report.id == id)
    }

    /// Swap in a new version of a report, keeping its position.
    ///
    /// Returns `false` if no report has that id.
    pub fn replace_report(&mut self, report: Report) -> bool {
        match self.reports.iter_mut().find(|r| r.id == report.id) {
            Some(slot) => {
                *slot = report;
                true
            }
            None => false,
        }
    }

    /// Drop every report with `id`. Returns how many were removed.
    pub fn remove_report(&mut self, id: &str) -> usize {
        let before = self.reports.len();
        self.reports.retain(|report| report.id != id);
        before - self.reports.len()
    }
}

impl Tracked for ReportState {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self) {
        self.loading = false;
    }
}
