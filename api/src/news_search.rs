//! Client for the Hacker News search API (hn.algolia.com).

use serde::Deserialize;
use serde::Serialize;

use crate::ApiError;

/// Default endpoint of the public search API.
pub const DEFAULT_SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search";

/// One result of a search. `title` and `url` are `null` for some hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SearchHit {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "(untitled)",
        }
    }

    /// The story's link, or its discussion page when the hit has no URL.
    pub fn link(&self) -> String {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("https://news.ycombinator.com/item?id={}", self.object_id),
        }
    }
}

/// The subset of the search response body we use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// Builds `<base>?query=<query>` with the query URL-encoded.
pub fn search_url(base: &str, query: &str) -> Result<String, ApiError> {
    let url = reqwest::Url::parse_with_params(base, &[("query", query)])?;
    Ok(url.into())
}

/// Issues one GET and decodes the hits. Non-2xx statuses are errors.
pub async fn search_news(url: &str) -> Result<SearchResponse, ApiError> {
    dioxus_logger::tracing::debug!("searching news: {}", url);

    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<SearchResponse>()
        .await?;

    dioxus_logger::tracing::info!("news search returned {} hits", resp.hits.len());
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_query() {
        assert_eq!(
            search_url(DEFAULT_SEARCH_URL, "redux").unwrap(),
            "https://hn.algolia.com/api/v1/search?query=redux"
        );
        assert_eq!(
            search_url(DEFAULT_SEARCH_URL, "rust & wasm").unwrap(),
            "https://hn.algolia.com/api/v1/search?query=rust+%26+wasm"
        );
        assert!(search_url("not a url", "x").is_err());
    }

    #[test]
    fn decodes_hits_in_order_with_nulls() {
        let body = r#"{
            "hits": [
                {"objectID": "1", "title": "Redux 5", "url": "https://redux.js.org", "points": 10},
                {"objectID": "2", "title": null, "url": null},
                {"objectID": "3", "title": "Ask HN"}
            ],
            "nbHits": 3
        }"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<_> = resp.hits.iter().map(|h| h.object_id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);

        assert_eq!(resp.hits[0].display_title(), "Redux 5");
        assert_eq!(resp.hits[0].link(), "https://redux.js.org");
        assert_eq!(resp.hits[1].display_title(), "(untitled)");
        assert_eq!(resp.hits[2].link(), "https://news.ycombinator.com/item?id=3");
    }

    #[test]
    fn missing_hits_is_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.hits.is_empty());
    }
}
