//! Browser wallet connection and the token sale built on it.

pub mod driver;
pub mod flow;
pub mod purchase;
pub mod state;

pub use driver::run_effect;
pub use flow::ConnectionPhase;
pub use flow::WalletEffect;
pub use flow::WalletEvent;
pub use flow::WalletFlow;
