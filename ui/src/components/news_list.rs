use api::news_search::SearchHit;
use dioxus::prelude::*;

/// The result list of a news search. Links open in a new tab.
#[component]
pub fn NewsList(hits: Vec<SearchHit>, #[props(default = false)] show_icons: bool) -> Element {
    rsx! {
        ul {
            class: "news-list",
            for hit in hits {
                li {
                    key: "{hit.object_id}",
                    if show_icons {
                        span {
                            class: "news-icon",
                            "aria-hidden": "true",
                            "📰"
                        }
                    }
                    a {
                        href: "{hit.link()}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{hit.display_title()}"
                    }
                }
            }
        }
    }
}
