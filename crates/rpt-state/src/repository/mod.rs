//! Report repository seam.
//!
//! The report store never touches records directly: it goes through a
//! [`ReportRepository`], so the simulated backend can be swapped for a
//! real one or for a test double.

mod ids;
mod latency;
mod memory;
mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use rpt_model::{NewReport, Report, ReportPatch};

use crate::error::Result;

pub use ids::IdGenerator;
pub use latency::LatencyProfile;
pub use memory::InMemoryReportRepository;
pub use seed::seed_reports;

/// Backend holding the report records.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// All records, in storage order.
    async fn list(&self) -> Result<Vec<Report>>;

    /// The record with `id`, if any.
    async fn get(&self, id: &str) -> Result<Option<Report>>;

    /// Store a new record with a fresh id and the current timestamp.
    async fn create(&self, input: NewReport) -> Result<Report>;

    /// Merge `patch` into the record with `id` and return the result.
    ///
    /// Fails with `ReportNotFound` if there is no such record.
    async fn update(&self, id: &str, patch: ReportPatch) -> Result<Report>;

    /// Remove the record with `id`. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

#[async_trait]
impl<T: ReportRepository + ?Sized> ReportRepository for Arc<T> {
    async fn list(&self) -> Result<Vec<Report>> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> Result<Option<Report>> {
        (**self).get(id).await
    }

    async fn create(&self, input: NewReport) -> Result<Report> {
        (**self).create(input).await
    }

    async fn update(&self, id: &str, patch: ReportPatch) -> Result<Report> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        (**self).delete(id).await
    }
}
