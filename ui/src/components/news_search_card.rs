use dioxus::prelude::*;

use crate::components::news_list::NewsList;
use crate::components::pico::Card;
use crate::components::pico::Spinner;
use crate::components::search_form::SearchForm;
use crate::hooks::use_news_search::use_news_search;

/// A self-contained news search: form, error line and results.
#[component]
pub fn NewsSearchCard(
    title: String,
    subtitle: Option<String>,
    #[props(default = false)] show_icons: bool,
) -> Element {
    let search = use_news_search();
    let state = search.state();
    let (is_loading, is_error, hits) = {
        let s = state.read();
        (s.is_loading, s.is_error, s.hits.clone())
    };

    rsx! {
        Card {
            hgroup {
                h3 { "{title}" }
                if let Some(subtitle) = subtitle {
                    p { "{subtitle}" }
                }
            }
            SearchForm { search }
            if is_error {
                p {
                    class: "search-error",
                    "Something went wrong ..."
                }
            }
            if is_loading {
                Spinner {}
            } else {
                NewsList { hits, show_icons }
            }
        }
    }
}
