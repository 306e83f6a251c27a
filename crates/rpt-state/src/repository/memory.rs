//! Simulated backend keeping records in process memory.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rpt_model::{NewReport, Report, ReportPatch};

use super::ids::IdGenerator;
use super::latency::LatencyProfile;
use super::seed::seed_reports;
use super::ReportRepository;
use crate::error::{Result, StoreError};

/// In-memory report backend with artificial latency.
///
/// Records are lost when the repository is dropped.
#[derive(Debug)]
pub struct InMemoryReportRepository {
    records: RwLock<Vec<Report>>,
    latency: LatencyProfile,
    ids: IdGenerator,
}

impl InMemoryReportRepository {
    /// Empty repository.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Repository holding the three seed reports.
    pub fn seeded(latency: LatencyProfile) -> Self {
        Self::with_records(seed_reports(), latency)
    }

    /// Repository holding `records`.
    pub fn with_records(records: Vec<Report>, latency: LatencyProfile) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
            ids: IdGenerator::default(),
        }
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    /// Number of stored records, without any simulated delay.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    async fn round_trip(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for InMemoryReportRepository {
    fn default() -> Self {
        Self::seeded(LatencyProfile::default())
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn list(&self) -> Result<Vec<Report>> {
        self.round_trip(self.latency.list()).await;
        Ok(self.records.read().clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Report>> {
        self.round_trip(self.latency.get()).await;
        Ok(self.records.read().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, input: NewReport) -> Result<Report> {
        self.round_trip(self.latency.create()).await;

        let created_at = Utc::now();
        let report = Report::from_new(self.ids.next_id(created_at), created_at, input);
        self.records.write().push(report.clone());

        tracing::debug!(id = %report.id, "Created report");
        Ok(report)
    }

    async fn update(&self, id: &str, patch: ReportPatch) -> Result<Report> {
        self.round_trip(self.latency.update()).await;

        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::ReportNotFound { id: id.to_string() })?;
        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.round_trip(self.latency.delete()).await;

        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}
