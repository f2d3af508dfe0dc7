//! View state of the news search widget and the reducer that drives it.

use crate::news_search::search_url;
use crate::news_search::SearchHit;
use crate::news_search::SearchResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// The URL of the most recently requested search.
    pub url: String,
    pub hits: Vec<SearchHit>,
    pub is_loading: bool,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    FetchInit,
    /// A search for `url` succeeded.
    FetchSuccess { url: String, response: SearchResponse },
    /// A search for `url` failed.
    FetchFailure { url: String },
    SetQuery(String),
    SetUrl(String),
}

impl SearchState {
    /// State for `query` with its URL already set, so the first search starts
    /// immediately.
    pub fn new(base_url: &str, query: &str) -> Result<Self, crate::ApiError> {
        Ok(Self {
            query: query.to_string(),
            url: search_url(base_url, query)?,
            hits: Vec::new(),
            is_loading: false,
            is_error: false,
        })
    }

    pub fn apply(&mut self, action: SearchAction) {
        match action {
            SearchAction::FetchInit => {
                self.is_loading = true;
                self.is_error = false;
            }
            SearchAction::FetchSuccess { url, response } => {
                if url != self.url {
                    dioxus_logger::tracing::debug!("dropping stale search result for {}", url);
                    return;
                }
                self.is_loading = false;
                self.hits = response.hits;
            }
            SearchAction::FetchFailure { url } => {
                if url != self.url {
                    return;
                }
                // prior hits stay on screen
                self.is_loading = false;
                self.is_error = true;
            }
            SearchAction::SetQuery(query) => self.query = query,
            SearchAction::SetUrl(url) => self.url = url,
        }
    }

    /// Handles a submit of the search form. Blank queries are ignored.
    ///
    /// Returns `true` when the search URL changed.
    pub fn submit(&mut self, base_url: &str) -> Result<bool, crate::ApiError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Ok(false);
        }
        let url = search_url(base_url, query)?;
        let changed = url != self.url;
        self.apply(SearchAction::SetUrl(url));
        Ok(changed)
    }
}
