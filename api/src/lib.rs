//! Models and external calls shared by every front-end target: the news
//! search client and the browser wallet connection.

pub mod address;
pub mod eip1193;
pub mod ether_amount;
#[cfg(test)]
mod mock_wallet;
pub mod network;
pub mod news_search;
pub mod prefs;
pub mod search_state;
pub mod wallet;
pub mod web3_provider;

pub type ApiError = anyhow::Error;

pub use address::Address;
pub use eip1193::Eip1193;
pub use eip1193::ProviderError;
pub use ether_amount::EtherAmount;
pub use network::Network;
pub use web3_provider::Web3Provider;
