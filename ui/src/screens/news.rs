//=============================================================================
// File: src/screens/news.rs
//=============================================================================
use crate::components::news_search_card::NewsSearchCard;
use dioxus::prelude::*;

#[component]
pub fn NewsScreen() -> Element {
    rsx! {
        NewsSearchCard {
            title: "Fetch tech news",
            subtitle: "stories from the Hacker News search API",
        }
    }
}
