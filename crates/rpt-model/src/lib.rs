//! Domain types for the reporting frontend state layer.
//!
//! This crate holds the plain data shared by the fetch client and the
//! stores. It performs no I/O.
//!
//! # Overview
//!
//! - **Filters**: [`FilterOption`], [`FiltersData`], [`SelectedFilters`] and the
//!   flattened [`FilterSelection`] summary
//! - **Reports**: [`Report`], [`ReportStatus`], [`NewReport`], [`ReportPatch`]
//! - **Criteria**: [`ReportFilterCriteria`] with [`StatusFilter`] and [`DateRange`],
//!   updated through the [`FilterUpdate`] tagged union
//! - **Catalog**: the built-in month and operator options

pub mod catalog;
pub mod criteria;
pub mod filter;
pub mod report;

pub use criteria::{DateRange, FilterUpdate, ReportFilterCriteria, StatusFilter, UnknownStatus};
pub use filter::{
    FilterOption, FilterSelection, FilteredData, FiltersData, NO_SELECTION_NAME, OptionId,
    SelectedFilters, find_option,
};
pub use report::{NewReport, Report, ReportId, ReportPatch, ReportStatus};
