//! Filter selection store.

use std::fmt::Display;

use parking_lot::RwLock;
use rpt_client::FilterSource;
use rpt_model::{FilterOption, FilteredData, FiltersData, OptionId, SelectedFilters};

use super::Busy;
use crate::state::FilterState;

/// Error recorded when a load failure carries no message of its own.
pub const LOAD_FILTERS_FALLBACK: &str = "Errore nel caricamento dei filtri";

/// Holds the available filter options and the user's selections.
///
/// Load failures never propagate: they land in [`FilterStore::error`].
pub struct FilterStore<S> {
    source: S,
    state: RwLock<FilterState>,
}

impl<S: FilterSource> FilterStore<S> {
    /// Create an empty store fetching through `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(FilterState::default()),
        }
    }

    /// The source this store fetches through.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the available options.
    ///
    /// On success the options are replaced and new categories start
    /// unselected; selections already made are kept. On failure options and
    /// selections are left untouched and the error message is recorded.
    pub async fn load_filters(&self) {
        let _busy = Busy::start(&self.state);

        match self.source.get_filters().await {
            Ok(data) => {
                tracing::info!(categories = data.len(), "Loaded filters");
                self.state.write().apply_loaded(data);
            }
            Err(err) => {
                tracing::error!(error = %err, "Error loading filters");
                self.state.write().error = Some(failure_message(&err));
            }
        }
    }

    /// Select `id` for `key`. Neither is validated.
    pub fn set_filter(&self, key: impl Into<String>, id: Option<OptionId>) {
        self.state.write().set_filter(key.into(), id);
    }

    /// The option currently selected for `key`, if it resolves.
    pub fn selected_option(&self, key: &str) -> Option<FilterOption> {
        self.state.read().selected_option(key).cloned()
    }

    /// Clear every known category's selection.
    pub fn reset_filters(&self) {
        self.state.write().reset_filters();
    }

    /// Flattened `{ id, name }` per category, ready to send with a query.
    pub fn filtered_data(&self) -> FilteredData {
        self.state.read().filtered_data()
    }

    pub fn filter_keys(&self) -> Vec<String> {
        self.state.read().filter_keys()
    }

    pub fn available_filters(&self) -> FiltersData {
        self.state.read().available_filters.clone()
    }

    pub fn selected_filters(&self) -> SelectedFilters {
        self.state.read().selected_filters.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// A copy of the whole state.
    pub fn snapshot(&self) -> FilterState {
        self.state.read().clone()
    }
}

impl<S> std::fmt::Debug for FilterStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("FilterStore")
            .field("categories", &state.available_filters.len())
            .field("is_loading", &state.is_loading)
            .field("error", &state.error)
            .finish()
    }
}

fn failure_message(err: &dyn Display) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        LOAD_FILTERS_FALLBACK.to_string()
    } else {
        message
    }
}
