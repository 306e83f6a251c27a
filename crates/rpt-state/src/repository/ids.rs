//! Time-based report ids.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use rpt_model::ReportId;

/// Issues ids from the creation timestamp in milliseconds.
///
/// Ids are strictly increasing: a second id in the same millisecond (or
/// after the clock steps back) takes the previous id plus one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Id for a record created at `now`.
    pub fn next_id(&self, now: DateTime<Utc>) -> ReportId {
        let millis = now.timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(millis.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        millis.max(previous + 1).to_string()
    }
}
