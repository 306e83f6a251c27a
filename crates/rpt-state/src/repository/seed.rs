//! Records the simulated backend starts with.

use chrono::{DateTime, NaiveDate, Utc};
use rpt_model::{NewReport, Report, ReportStatus};

const SEED: [(&str, &str, (i32, u32, u32), ReportStatus); 3] = [
    ("1", "Q1 Sales Report", (2024, 1, 15), ReportStatus::Published),
    ("2", "Marketing Analytics", (2024, 2, 20), ReportStatus::Draft),
    ("3", "Q2 Performance", (2024, 3, 10), ReportStatus::Published),
];

/// The three fixed seed reports, dated at UTC midnight.
pub fn seed_reports() -> Vec<Report> {
    SEED.iter()
        .map(|&(id, title, (y, m, d), status)| {
            Report::from_new(id, midnight(y, m, d), NewReport::new(title, status))
        })
        .collect()
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
        .unwrap_or_default()
}
