pub mod use_news_search;
pub mod use_wallet;
