//! Built-in filter options.
//!
//! The backend serves the authoritative option lists; these are the
//! defaults used when running without it.

use crate::filter::{FilterOption, FiltersData};

/// Category key of the month options.
pub const MONTHS_KEY: &str = "months";

/// Category key of the operator options.
pub const OPERATORS_KEY: &str = "operators";

const MONTH_NAMES: [&str; 12] = [
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
    "Ottobre",
    "Novembre",
    "Dicembre",
];

const OPERATOR_NAMES: [&str; 1] = ["Dani Lipari"];

/// Month options, ids 1 through 12.
pub fn months() -> Vec<FilterOption> {
    numbered(&MONTH_NAMES)
}

/// Operator options.
pub fn operators() -> Vec<FilterOption> {
    numbered(&OPERATOR_NAMES)
}

/// The full built-in catalog.
pub fn default_filters() -> FiltersData {
    FiltersData::from([
        (MONTHS_KEY.to_string(), months()),
        (OPERATORS_KEY.to_string(), operators()),
    ])
}

fn numbered(names: &[&str]) -> Vec<FilterOption> {
    (1..).zip(names).map(|(id, name)| FilterOption::new(id, *name)).collect()
}
