//! Client-side report filtering criteria.
//!
//! Criteria only ever narrow a view of the report collection; they never
//! mutate records.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::report::{Report, ReportStatus};

/// Wire value selecting every status.
const ALL_STATUSES: &str = "all";

/// A status string that is neither `"all"` nor a known [`ReportStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report status: {0}")]
pub struct UnknownStatus(pub String);

/// Status narrowing: every status, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReportStatus),
}

impl StatusFilter {
    /// Whether a report with `status` passes this filter.
    pub fn admits(&self, status: ReportStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl From<ReportStatus> for StatusFilter {
    fn from(status: ReportStatus) -> Self {
        Self::Only(status)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == ALL_STATUSES {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_STATUSES),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

/// Inclusive creation-date bounds. Unset bounds are ignored.
///
/// Bounds deserialize from RFC 3339 timestamps or plain `YYYY-MM-DD` dates,
/// the latter taken as UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub end: Option<DateTime<Utc>>,
}

fn deserialize_bound<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_bound(&raw).map(Some).map_err(serde::de::Error::custom)
}

fn parse_bound(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.to_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
        .ok_or_else(|| format!("invalid date bound '{raw}', expected RFC 3339 or YYYY-MM-DD"))
}

impl DateRange {
    /// Range with both bounds set.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether `at` lies within the set bounds.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| at >= start) && self.end.is_none_or(|end| at <= end)
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Criteria narrowing the report collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilterCriteria {
    pub status: StatusFilter,
    pub date_range: DateRange,
}

impl ReportFilterCriteria {
    /// Whether `report` passes both the status and the date narrowing.
    pub fn matches(&self, report: &Report) -> bool {
        self.status.admits(report.status) && self.date_range.contains(report.created_at)
    }

    /// Matching reports, in their original order.
    pub fn apply(&self, reports: &[Report]) -> Vec<Report> {
        reports
            .iter()
            .filter(|report| self.matches(report))
            .cloned()
            .collect()
    }

    /// Apply a single criteria change.
    pub fn update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Status(status) => self.status = status,
            FilterUpdate::DateRange(range) => self.date_range = range,
        }
    }
}

/// One change to the report criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterUpdate {
    Status(StatusFilter),
    DateRange(DateRange),
}

impl FilterUpdate {
    /// Entry key for the status criterion.
    pub const STATUS_KEY: &'static str = "status";
    /// Entry key for the date range criterion.
    pub const DATE_RANGE_KEY: &'static str = "dateRange";

    /// Parse a raw `(key, value)` entry.
    ///
    /// Returns `Ok(None)` for keys that name no criterion.
    pub fn from_entry(key: &str, value: Value) -> Result<Option<Self>, serde_json::Error> {
        match key {
            Self::STATUS_KEY => serde_json::from_value(value).map(|s| Some(Self::Status(s))),
            Self::DATE_RANGE_KEY => {
                serde_json::from_value(value).map(|r| Some(Self::DateRange(r)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NewReport;
    use chrono::TimeZone;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn report(id: &str, at: DateTime<Utc>, status: ReportStatus) -> Report {
        Report::from_new(id, at, NewReport::new(format!("report {id}"), status))
    }

    #[test]
    fn test_status_filter_wire_values() {
        let all: StatusFilter = serde_json::from_value(json!("all")).unwrap();
        assert_eq!(all, StatusFilter::All);

        let draft: StatusFilter = serde_json::from_value(json!("draft")).unwrap();
        assert_eq!(draft, StatusFilter::Only(ReportStatus::Draft));

        assert!(serde_json::from_value::<StatusFilter>(json!("pending")).is_err());
        assert_eq!(serde_json::to_value(StatusFilter::All).unwrap(), json!("all"));
    }

    #[test]
    fn test_date_range_inclusive_bounds() {
        let range = DateRange::between(day(2024, 1, 1), day(2024, 3, 1));
        assert!(range.contains(day(2024, 1, 1)));
        assert!(range.contains(day(2024, 3, 1)));
        assert!(!range.contains(day(2024, 3, 10)));
        assert!(DateRange::default().contains(day(1999, 1, 1)));
    }

    #[test]
    fn test_half_open_range() {
        let range = DateRange {
            start: Some(day(2024, 2, 1)),
            end: None,
        };
        assert!(!range.contains(day(2024, 1, 15)));
        assert!(range.contains(day(2030, 1, 1)));
        assert!(!range.is_unbounded());
    }

    #[test]
    fn test_apply_preserves_order() {
        let reports = vec![
            report("1", day(2024, 1, 15), ReportStatus::Published),
            report("2", day(2024, 2, 20), ReportStatus::Draft),
            report("3", day(2024, 3, 10), ReportStatus::Published),
        ];
        let criteria = ReportFilterCriteria {
            status: ReportStatus::Published.into(),
            date_range: DateRange::default(),
        };
        let ids: Vec<String> = criteria.apply(&reports).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_from_entry() {
        let update = FilterUpdate::from_entry("status", json!("archived")).unwrap();
        assert_eq!(
            update,
            Some(FilterUpdate::Status(StatusFilter::Only(ReportStatus::Archived)))
        );

        let update = FilterUpdate::from_entry(
            "dateRange",
            json!({ "start": "2024-01-01T00:00:00Z", "end": null }),
        )
        .unwrap();
        assert_eq!(
            update,
            Some(FilterUpdate::DateRange(DateRange {
                start: Some(day(2024, 1, 1)),
                end: None,
            }))
        );

        assert_eq!(FilterUpdate::from_entry("owner", json!("me")).unwrap(), None);
        assert!(FilterUpdate::from_entry("dateRange", json!({ "start": "soon" })).is_err());
        assert!(FilterUpdate::from_entry("status", json!(42)).is_err());
    }

    #[test]
    fn test_date_only_bounds() {
        let range: DateRange = serde_json::from_value(json!({
            "start": "2024-01-01",
            "end": "2024-03-01T12:30:00.000Z",
        }))
        .unwrap();
        assert_eq!(range.start, Some(day(2024, 1, 1)));
        assert_eq!(
            range.end,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap())
        );

        let range: DateRange = serde_json::from_value(json!({ "end": "2024-03-01" })).unwrap();
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(day(2024, 3, 1)));
    }

    #[test]
    fn test_update_criteria() {
        let mut criteria = ReportFilterCriteria::default();
        criteria.update(FilterUpdate::Status(ReportStatus::Draft.into()));
        assert_eq!(criteria.status, StatusFilter::Only(ReportStatus::Draft));
        assert!(criteria.date_range.is_unbounded());
    }
}
