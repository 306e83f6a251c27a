//! Report records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::criteria::UnknownStatus;

/// Report identifier.
pub type ReportId = String;

/// Publication status of a report.
///
/// Any status may move to any other; transitions are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Published,
    Archived,
}

impl ReportStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 3] = [Self::Draft, Self::Published, Self::Archived];

    /// Wire value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A report record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    /// Opaque report rows.
    pub data: Vec<Value>,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

impl Report {
    /// Materialize a new record from creation input.
    pub fn from_new(id: impl Into<ReportId>, created_at: DateTime<Utc>, input: NewReport) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            data: input.data,
            created_at,
            status: input.status,
        }
    }

    /// Merge a partial update into this record. Absent fields are left as-is.
    pub fn apply(&mut self, patch: ReportPatch) {
        let ReportPatch {
            title,
            data,
            created_at,
            status,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(data) = data {
            self.data = data;
        }
        if let Some(created_at) = created_at {
            self.created_at = created_at;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}

/// Creation input: a report without `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    pub title: String,
    #[serde(default)]
    pub data: Vec<Value>,
    pub status: ReportStatus,
}

impl NewReport {
    /// Create input with empty data.
    pub fn new(title: impl Into<String>, status: ReportStatus) -> Self {
        Self {
            title: title.into(),
            data: Vec::new(),
            status,
        }
    }
}

/// Partial update of a report. The id is never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
}

impl ReportPatch {
    /// Patch that only changes the status.
    pub fn status(status: ReportStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Patch that only changes the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.data.is_none()
            && self.created_at.is_none()
            && self.status.is_none()
    }
}
