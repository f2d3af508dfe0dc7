use api::news_search::search_news;
use api::search_state::SearchAction;
use api::search_state::SearchState;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::warn;

use crate::AppState;

/// Handle to one search widget's state.
#[derive(Clone, Copy, PartialEq)]
pub struct NewsSearch {
    state: Signal<SearchState>,
    base_url: Signal<String>,
}

impl NewsSearch {
    /// Subscribe by calling `.read()` on the returned signal.
    pub fn state(&self) -> Signal<SearchState> {
        self.state
    }

    pub fn set_query(&self, query: String) {
        let mut state = self.state;
        state.write().apply(SearchAction::SetQuery(query));
    }

    /// Points the search at the current query; the fetch follows from the URL change.
    pub fn submit(&self) {
        let mut state = self.state;
        let base_url = self.base_url.peek().clone();
        if let Err(e) = state.write().submit(&base_url) {
            error!("could not build search url: {}", e);
        };
    }
}

/// Owns a search widget's state and refetches whenever its URL changes.
///
/// A URL change drops the in-flight request, and outcomes for other URLs are
/// ignored by the reducer.
pub fn use_news_search() -> NewsSearch {
    let app_state = use_context::<AppState>();
    let prefs = app_state.prefs.search();

    let base_url = use_signal(|| prefs.base_url.clone());
    let mut state = use_signal(|| {
        SearchState::new(&prefs.base_url, &prefs.default_query).unwrap_or_else(|e| {
            error!("could not build search url: {}", e);
            SearchState {
                query: prefs.default_query.clone(),
                url: String::new(),
                hits: Vec::new(),
                is_loading: false,
                is_error: true,
            }
        })
    });

    let url = use_memo(move || state.read().url.clone());

    let _fetch = use_resource(move || async move {
        let url = url();
        if url.is_empty() {
            return;
        }

        state.write().apply(SearchAction::FetchInit);
        let action = match search_news(&url).await {
            Ok(response) => SearchAction::FetchSuccess { url, response },
            Err(e) => {
                warn!("news search failed: {:#}", e);
                SearchAction::FetchFailure { url }
            }
        };
        state.write().apply(action);
    });

    NewsSearch { state, base_url }
}
