use crate::news_search::DEFAULT_SEARCH_URL;
use serde::Deserialize;
use serde::Serialize;

/// Settings of the news search widget.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SearchPrefs {
    /// Endpoint queried with `?query=<q>`.
    pub base_url: String,
    /// Query searched for when the screen opens.
    pub default_query: String,
}

impl SearchPrefs {
    /// # Environment Variables
    /// - `NEWS_SEARCH_URL`: search endpoint. Must be an absolute URL.
    /// - `NEWS_DEFAULT_QUERY`: initial query.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "NEWS_SEARCH_URL" => super::setting(key, option_env!("NEWS_SEARCH_URL")),
            "NEWS_DEFAULT_QUERY" => super::setting(key, option_env!("NEWS_DEFAULT_QUERY")),
            _ => None,
        })
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = match lookup("NEWS_SEARCH_URL") {
            Some(url) if reqwest::Url::parse(&url).is_ok() => url,
            Some(url) => {
                dioxus_logger::tracing::warn!("ignoring invalid NEWS_SEARCH_URL {:?}", url);
                DEFAULT_SEARCH_URL.to_string()
            }
            None => DEFAULT_SEARCH_URL.to_string(),
        };

        Self {
            base_url,
            default_query: lookup("NEWS_DEFAULT_QUERY").unwrap_or_else(|| "redux".to_string()),
        }
    }
}

impl Default for SearchPrefs {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = SearchPrefs::default();
        assert_eq!(prefs.base_url, DEFAULT_SEARCH_URL);
        assert_eq!(prefs.default_query, "redux");
    }

    #[test]
    fn overrides_and_invalid_url_fallback() {
        let prefs = SearchPrefs::from_lookup(|key| match key {
            "NEWS_SEARCH_URL" => Some("http://localhost:8080/search".to_string()),
            "NEWS_DEFAULT_QUERY" => Some("rust".to_string()),
            _ => None,
        });
        assert_eq!(prefs.base_url, "http://localhost:8080/search");
        assert_eq!(prefs.default_query, "rust");

        let prefs = SearchPrefs::from_lookup(|key| {
            (key == "NEWS_SEARCH_URL").then(|| "not a url".to_string())
        });
        assert_eq!(prefs.base_url, DEFAULT_SEARCH_URL);
    }
}
