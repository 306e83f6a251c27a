//! Filter selection state.

use rpt_model::{
    FilterOption, FilterSelection, FilteredData, FiltersData, OptionId, SelectedFilters,
    find_option,
};
use serde::Serialize;

use super::Tracked;

/// Available filter options and the user's selection per category.
///
/// Every category in `available_filters` has an entry in
/// `selected_filters` once it has been loaded. Selections are not
/// checked against the options: a stale id simply resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub available_filters: FiltersData,
    pub selected_filters: SelectedFilters,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FilterState {
    /// Category keys, in map order.
    pub fn filter_keys(&self) -> Vec<String> {
        self.available_filters.keys().cloned().collect()
    }

    /// The selected id for `key`, if any.
    pub fn selected_id(&self, key: &str) -> Option<OptionId> {
        self.selected_filters.get(key).copied().flatten()
    }

    /// The option currently selected for `key`.
    ///
    /// `None` when nothing is selected, the category is unknown, or no
    /// option carries the selected id.
    pub fn selected_option(&self, key: &str) -> Option<&FilterOption> {
        let id = self.selected_id(key)?;
        find_option(self.available_filters.get(key)?, id)
    }

    /// Flattened `{ id, name }` summary for every known category.
    pub fn filtered_data(&self) -> FilteredData {
        self.available_filters
            .keys()
            .map(|key| {
                let entry =
                    FilterSelection::resolve(self.selected_id(key), self.selected_option(key));
                (key.clone(), entry)
            })
            .collect()
    }

    /// Set the selection for `key`, known category or not.
    pub fn set_filter(&mut self, key: String, id: Option<OptionId>) {
        self.selected_filters.insert(key, id);
    }

    /// Clear the selection of every known category.
    pub fn reset_filters(&mut self) {
        for key in self.available_filters.keys() {
            self.selected_filters.insert(key.clone(), None);
        }
    }

    /// Install freshly fetched options.
    ///
    /// New categories start unselected; existing selections survive.
    pub fn apply_loaded(&mut self, data: FiltersData) {
        for key in data.keys() {
            self.selected_filters.entry(key.clone()).or_insert(None);
        }
        self.available_filters = data;
    }
}

impl Tracked for FilterState {
    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn finish(&mut self) {
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpt_model::catalog;

    fn loaded() -> FilterState {
        let mut state = FilterState::default();
        state.apply_loaded(catalog::default_filters());
        state
    }

    #[test]
    fn test_apply_loaded_seeds_selections() {
        let state = loaded();
        assert_eq!(state.filter_keys(), vec!["months", "operators"]);
        assert_eq!(state.selected_filters.get("months"), Some(&None));
        assert_eq!(state.selected_filters.get("operators"), Some(&None));
    }

    #[test]
    fn test_apply_loaded_keeps_selections() {
        let mut state = loaded();
        state.set_filter("months".to_string(), Some(4));
        state.set_filter("legacy".to_string(), Some(1));

        state.apply_loaded(catalog::default_filters());

        assert_eq!(state.selected_id("months"), Some(4));
        // Categories the backend stopped serving keep their entry
        assert_eq!(state.selected_id("legacy"), Some(1));
    }

    #[test]
    fn test_selected_option() {
        let mut state = loaded();
        assert!(state.selected_option("months").is_none());

        state.set_filter("months".to_string(), Some(3));
        assert_eq!(state.selected_option("months").map(|o| o.name.as_str()), Some("Marzo"));

        state.set_filter("months".to_string(), Some(13));
        assert!(state.selected_option("months").is_none());

        state.set_filter("unknown".to_string(), Some(1));
        assert!(state.selected_option("unknown").is_none());
    }

    #[test]
    fn test_filtered_data() {
        let mut state = loaded();
        state.set_filter("operators".to_string(), Some(1));
        state.set_filter("months".to_string(), Some(99));

        let data = state.filtered_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data["operators"].id, Some(1));
        assert_eq!(data["operators"].name, "Dani Lipari");
        assert_eq!(data["months"].id, Some(99));
        assert_eq!(data["months"].name, "N/A");
    }

    #[test]
    fn test_reset_only_touches_known_keys() {
        let mut state = loaded();
        state.set_filter("months".to_string(), Some(2));
        state.set_filter("extra".to_string(), Some(5));

        state.reset_filters();

        assert_eq!(state.selected_id("months"), None);
        assert_eq!(state.selected_id("extra"), Some(5));
    }

    #[test]
    fn test_tracked_flags() {
        let mut state = FilterState {
            error: Some("previous".to_string()),
            ..Default::default()
        };
        state.begin();
        assert!(state.is_loading);
        assert!(state.error.is_none());
        state.finish();
        assert!(!state.is_loading);
    }
}
