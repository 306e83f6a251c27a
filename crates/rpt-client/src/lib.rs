//! Client for the report filters API.
//!
//! This crate fetches the available filter options from the backend and
//! validates the response envelope before handing typed data to callers.
//!
//! # Overview
//!
//! - `GET {base_url}/report/filters` returns `{ "status": "OK", "data": { ... } }`
//! - A non-2xx response fails with [`FetchError::Transport`]
//! - A non-`"OK"` envelope fails with [`FetchError::Api`]
//! - Every failure is logged before it is returned
//!
//! There is no retry, timeout or caching: each call issues one request.
//!
//! # Example
//!
//! ```no_run
//! use rpt_client::{ClientSettings, FiltersService};
//!
//! async fn print_categories() -> rpt_client::Result<()> {
//!     let service = FiltersService::new(&ClientSettings::default())?;
//!     for (category, options) in service.get_filters().await? {
//!         println!("{category}: {} options", options.len());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod envelope;
pub mod error;
pub mod service;
pub mod source;

pub use config::ClientSettings;
pub use envelope::{ApiEnvelope, STATUS_OK, parse_filters};
pub use error::{FetchError, Result};
pub use service::FiltersService;
pub use source::{FilterSource, StaticFilterSource};
