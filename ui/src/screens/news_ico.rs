//=============================================================================
// File: src/screens/news_ico.rs
//=============================================================================
use crate::components::news_search_card::NewsSearchCard;
use crate::components::pico::Grid;
use crate::components::token_sale::TokenSale;
use dioxus::prelude::*;

/// News search side by side with the token sale.
#[component]
pub fn NewsIcoScreen() -> Element {
    rsx! {
        Grid {
            NewsSearchCard {
                title: "Check Tech news on your favorite topic...",
                show_icons: true,
            }
            TokenSale {}
        }
    }
}
