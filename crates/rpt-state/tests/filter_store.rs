//! Filter store behavior against in-process filter sources.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use proptest::prelude::*;
use rpt_client::{FetchError, FilterSource, StaticFilterSource};
use rpt_model::catalog::{self, MONTHS_KEY, OPERATORS_KEY};
use rpt_model::{FilterOption, FilterSelection, FiltersData, NO_SELECTION_NAME, OptionId};
use rpt_state::FilterStore;

/// Replays queued responses, then fails with a network error.
struct ScriptedSource {
    responses: Mutex<Vec<rpt_client::Result<FiltersData>>>,
}

impl ScriptedSource {
    fn new(mut responses: Vec<rpt_client::Result<FiltersData>>) -> Self {
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
        }
    }
}

#[async_trait]
impl FilterSource for ScriptedSource {
    async fn get_filters(&self) -> rpt_client::Result<FiltersData> {
        self.responses
            .lock()
            .pop()
            .unwrap_or_else(|| Err(FetchError::Network("script exhausted".to_string())))
    }
}

fn single(key: &str, options: &[(OptionId, &str)]) -> FiltersData {
    let options = options
        .iter()
        .map(|(id, name)| FilterOption::new(*id, *name))
        .collect();
    BTreeMap::from([(key.to_string(), options)])
}

#[tokio::test]
async fn test_load_installs_catalog() {
    let store = FilterStore::new(StaticFilterSource::default());
    store.load_filters().await;

    assert_eq!(store.available_filters(), catalog::default_filters());
    assert_eq!(store.filter_keys(), vec![MONTHS_KEY, OPERATORS_KEY]);
    assert!(store.selected_filters().values().all(Option::is_none));
    assert!(!store.is_loading());
    assert!(store.error().is_none());
}

#[tokio::test]
async fn test_selection_resolves_option() {
    let store = FilterStore::new(StaticFilterSource::default());
    store.load_filters().await;

    store.set_filter(MONTHS_KEY, Some(3));
    assert_eq!(
        store.selected_option(MONTHS_KEY),
        Some(FilterOption::new(3, "Marzo"))
    );

    let data = store.filtered_data();
    assert_eq!(
        data[MONTHS_KEY],
        FilterSelection {
            id: Some(3),
            name: "Marzo".to_string()
        }
    );
    assert_eq!(data[OPERATORS_KEY], FilterSelection::unselected());
}

#[tokio::test]
async fn test_selected_option_none_cases() {
    let store = FilterStore::new(StaticFilterSource::default());
    store.load_filters().await;

    assert!(store.selected_option(MONTHS_KEY).is_none());
    assert!(store.selected_option("regions").is_none());

    // Stale id: selection kept, nothing resolves
    store.set_filter(MONTHS_KEY, Some(99));
    assert!(store.selected_option(MONTHS_KEY).is_none());
    assert_eq!(
        store.filtered_data()[MONTHS_KEY],
        FilterSelection {
            id: Some(99),
            name: NO_SELECTION_NAME.to_string()
        }
    );
}

#[tokio::test]
async fn test_unknown_key_selection_is_stored_but_not_summarized() {
    let store = FilterStore::new(StaticFilterSource::default());
    store.load_filters().await;

    store.set_filter("regions", Some(1));
    assert_eq!(store.selected_filters()["regions"], Some(1));
    assert!(!store.filtered_data().contains_key("regions"));

    store.reset_filters();
    assert_eq!(store.selected_filters()["regions"], Some(1));
}

#[tokio::test]
async fn test_filtered_data_payload() {
    let mut data = single(OPERATORS_KEY, &[(1, "Dani Lipari")]);
    data.extend(single(MONTHS_KEY, &[(4, "Aprile")]));
    let store = FilterStore::new(StaticFilterSource::new(data));
    store.load_filters().await;
    store.set_filter(OPERATORS_KEY, Some(1));

    insta::assert_json_snapshot!(store.filtered_data(), @r#"
    {
      "months": {
        "id": null,
        "name": "N/A"
      },
      "operators": {
        "id": 1,
        "name": "Dani Lipari"
      }
    }
    "#);
}

#[tokio::test]
async fn test_reload_preserves_selection() {
    let first = single(MONTHS_KEY, &[(1, "Gennaio"), (2, "Febbraio")]);
    let mut second = first.clone();
    second.extend(single(OPERATORS_KEY, &[(1, "Dani Lipari")]));

    let store = FilterStore::new(ScriptedSource::new(vec![Ok(first), Ok(second.clone())]));
    store.load_filters().await;
    store.set_filter(MONTHS_KEY, Some(2));
    store.load_filters().await;

    assert_eq!(store.available_filters(), second);
    assert_eq!(store.selected_filters()[MONTHS_KEY], Some(2));
    assert_eq!(store.selected_filters()[OPERATORS_KEY], None);
}

#[tokio::test]
async fn test_failed_load_keeps_state() {
    let store = FilterStore::new(ScriptedSource::new(vec![
        Ok(catalog::default_filters()),
        Err(FetchError::Api {
            status: "KO".to_string(),
        }),
    ]));
    store.load_filters().await;
    store.set_filter(OPERATORS_KEY, Some(1));
    let before = store.snapshot();

    store.load_filters().await;

    assert_eq!(store.error().as_deref(), Some("API error: KO"));
    assert!(!store.is_loading());
    assert_eq!(store.available_filters(), before.available_filters);
    assert_eq!(store.selected_filters(), before.selected_filters);
}

#[tokio::test]
async fn test_error_cleared_by_next_load() {
    let store = FilterStore::new(ScriptedSource::new(vec![
        Err(FetchError::Transport { status: 503 }),
        Ok(catalog::default_filters()),
    ]));

    store.load_filters().await;
    assert_eq!(store.error().as_deref(), Some("HTTP error: status 503"));
    assert!(store.available_filters().is_empty());

    store.load_filters().await;
    assert!(store.error().is_none());
    assert_eq!(store.filter_keys().len(), 2);
}

// ============================================================================
// Properties
// ============================================================================

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

fn arb_filters() -> impl Strategy<Value = FiltersData> {
    prop::collection::btree_map(
        "[a-z]{1,6}",
        prop::collection::vec((1i64..20, "[A-Za-z]{1,8}"), 0..5).prop_map(|options| {
            options
                .into_iter()
                .map(|(id, name)| FilterOption::new(id, name))
                .collect::<Vec<_>>()
        }),
        0..5,
    )
}

fn arb_selections() -> impl Strategy<Value = Vec<(String, Option<OptionId>)>> {
    prop::collection::vec(("[a-z]{1,6}", prop::option::of(1i64..20)), 0..6)
}

proptest! {
    #[test]
    fn prop_load_preserves_prior_selections(
        data in arb_filters(),
        selections in arb_selections(),
    ) {
        let store = FilterStore::new(StaticFilterSource::new(data.clone()));
        for (key, id) in &selections {
            store.set_filter(key.clone(), *id);
        }
        let before = store.selected_filters();

        runtime().block_on(store.load_filters());

        let after = store.selected_filters();
        prop_assert_eq!(store.available_filters(), data.clone());
        for (key, id) in &before {
            prop_assert_eq!(after.get(key), Some(id));
        }
        for key in data.keys() {
            let expected = before.get(key).copied().flatten();
            prop_assert_eq!(after.get(key).copied().flatten(), expected);
            prop_assert!(after.contains_key(key));
        }
    }

    #[test]
    fn prop_reset_clears_every_summary(
        data in arb_filters(),
        selections in arb_selections(),
    ) {
        let store = FilterStore::new(StaticFilterSource::new(data.clone()));
        runtime().block_on(store.load_filters());
        for (key, id) in &selections {
            store.set_filter(key.clone(), *id);
        }

        store.reset_filters();
        let once = store.snapshot();
        store.reset_filters();
        prop_assert_eq!(store.snapshot(), once);

        let summary = store.filtered_data();
        prop_assert_eq!(summary.len(), data.len());
        for entry in summary.values() {
            prop_assert_eq!(entry, &FilterSelection::unselected());
        }
    }
}
