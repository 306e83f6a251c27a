//! State stores for the reporting frontend.
//!
//! Two independent stores, each wrapping plain state in a lock:
//!
//! - [`FilterStore`] loads the available filter options through a
//!   [`FilterSource`](rpt_client::FilterSource) and tracks the user's
//!   selection per category.
//! - [`ReportStore`] keeps the report collection, talks to a
//!   [`ReportRepository`], and derives filtered views from its criteria.
//!
//! Both expose `is_loading()` and `error()` so a view can render progress
//! and the last failure.
//!
//! # Example
//!
//! ```no_run
//! use rpt_model::{NewReport, ReportStatus};
//! use rpt_state::{InMemoryReportRepository, ReportStore};
//!
//! async fn demo() -> rpt_state::Result<()> {
//!     let store = ReportStore::new(InMemoryReportRepository::default());
//!     store.fetch_reports().await;
//!     store.create_report(NewReport::new("Q3 Review", ReportStatus::Draft)).await?;
//!     assert_eq!(store.total_reports(), 4);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod logging;
pub mod repository;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{Result, StoreError};
pub use logging::{LogConfig, LogFormat, LoggingSettings, init_logging, init_logging_with_writer};
pub use repository::{
    IdGenerator, InMemoryReportRepository, LatencyProfile, ReportRepository, seed_reports,
};
pub use settings::Settings;
pub use state::{FilterState, ReportState, Tracked};
pub use store::{
    CREATE_REPORT_FAILED, DELETE_REPORT_FAILED, FETCH_REPORTS_FAILED, FilterStore,
    LOAD_FILTERS_FALLBACK, ReportStore, UPDATE_REPORT_FAILED,
};
