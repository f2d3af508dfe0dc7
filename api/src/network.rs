use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// The chain a wallet is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub chain_id: u64,
}

impl Network {
    /// Builds a network from its chain id, naming well-known chains.
    pub fn from_chain_id(chain_id: u64) -> Self {
        let name = match chain_id {
            1 => "homestead",
            3 => "ropsten",
            4 => "rinkeby",
            5 => "goerli",
            10 => "optimism",
            42 => "kovan",
            56 => "bnb",
            137 => "matic",
            42161 => "arbitrum",
            80001 => "maticmum",
            11155111 => "sepolia",
            _ => "unknown",
        };
        Self {
            name: name.to_string(),
            chain_id,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (chain {})", self.name, self.chain_id)
    }
}
