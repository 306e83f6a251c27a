//! Filter option types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a filter option within its category.
pub type OptionId = i64;

/// Name reported for a category with no resolvable selection.
pub const NO_SELECTION_NAME: &str = "N/A";

/// A single selectable option of a filter category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    /// Option identifier, unique within its category.
    pub id: OptionId,
    /// Display name.
    pub name: String,
}

impl FilterOption {
    /// Create a new option.
    pub fn new(id: OptionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Available options per filter category, as served by the backend.
///
/// Keys are dynamic and iterate in lexicographic order.
pub type FiltersData = BTreeMap<String, Vec<FilterOption>>;

/// Current single-choice selection per filter category.
///
/// `None` means "no selection".
pub type SelectedFilters = BTreeMap<String, Option<OptionId>>;

/// Flattened selection summary, keyed by category.
pub type FilteredData = BTreeMap<String, FilterSelection>;

/// One entry of the flattened selection summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// The selected id, if any.
    pub id: Option<OptionId>,
    /// Name of the matched option, or [`NO_SELECTION_NAME`].
    pub name: String,
}

impl FilterSelection {
    /// Build a summary entry from a selected id and the option it resolved to.
    pub fn resolve(id: Option<OptionId>, option: Option<&FilterOption>) -> Self {
        Self {
            id,
            name: option.map_or_else(|| NO_SELECTION_NAME.to_string(), |o| o.name.clone()),
        }
    }

    /// An entry with nothing selected.
    pub fn unselected() -> Self {
        Self::resolve(None, None)
    }
}

/// Find the option with `id` among a category's options.
pub fn find_option(options: &[FilterOption], id: OptionId) -> Option<&FilterOption> {
    options.iter().find(|option| option.id == id)
}
