//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
pub mod ether_amount_input;
pub mod news_list;
pub mod news_search_card;
pub mod pico;
pub mod search_form;
pub mod token_sale;
