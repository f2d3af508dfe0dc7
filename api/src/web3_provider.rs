//! Typed read and write access on top of a raw EIP-1193 transport.
//!
//! `Web3Provider` is the read-only side (accounts, network, balances) and
//! `Signer` is the capability to submit transactions for one account.

use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;
use std::fmt;

use crate::address::Address;
use crate::eip1193::parse_quantity;
use crate::eip1193::to_quantity;
use crate::eip1193::Eip1193;
use crate::eip1193::ProviderError;
use crate::ether_amount::EtherAmount;
use crate::network::Network;

/// Hash of a submitted transaction, as returned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plain value transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub value: EtherAmount,
}

impl TransactionRequest {
    /// The `eth_sendTransaction` parameter object.
    pub fn to_json(&self) -> Value {
        json!({
            "from": self.from,
            "to": self.to,
            "value": to_quantity(self.value.as_wei()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Web3Provider<T> {
    transport: T,
}

impl<T: Eip1193> Web3Provider<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Accounts the wallet has already authorized for this page. Never prompts.
    pub async fn accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let value = self.transport.request("eth_accounts", json!([])).await?;
        parse_accounts(value)
    }

    /// Asks the wallet to authorize this page and returns the selected account.
    pub async fn request_accounts(&self) -> Result<Address, ProviderError> {
        let value = self
            .transport
            .request("eth_requestAccounts", json!([]))
            .await?;
        parse_accounts(value)?
            .into_iter()
            .next()
            .ok_or(ProviderError::NoAccounts)
    }

    pub async fn get_network(&self) -> Result<Network, ProviderError> {
        let value = self.transport.request("eth_chainId", json!([])).await?;
        let chain_id = u64::try_from(parse_quantity(&value)?)
            .map_err(|_| ProviderError::InvalidResponse(format!("chain id out of range: {value}")))?;
        Ok(Network::from_chain_id(chain_id))
    }

    pub async fn get_balance(&self, account: Address) -> Result<EtherAmount, ProviderError> {
        let value = self
            .transport
            .request("eth_getBalance", json!([account, "latest"]))
            .await?;
        Ok(EtherAmount::from_wei(parse_quantity(&value)?))
    }

    pub fn signer(&self, account: Address) -> Signer<'_, T> {
        Signer {
            provider: self,
            account,
        }
    }
}

/// Submits transactions on behalf of one account through the wallet.
pub struct Signer<'a, T> {
    provider: &'a Web3Provider<T>,
    account: Address,
}

impl<T: Eip1193> Signer<'_, T> {
    /// Sends `value` ether to `to`. Returns once the wallet has accepted the
    /// transaction; inclusion is not awaited.
    pub async fn send_transaction(&self, to: Address, value: EtherAmount) -> Result<TxHash, ProviderError> {
        let tx = TransactionRequest {
            from: self.account,
            to,
            value,
        };
        let hash = self
            .provider
            .transport
            .request("eth_sendTransaction", json!([tx.to_json()]))
            .await?;
        hash.as_str()
            .map(|h| TxHash(h.to_string()))
            .ok_or_else(|| ProviderError::InvalidResponse(format!("expected tx hash, got {hash}")))
    }
}

fn parse_accounts(value: Value) -> Result<Vec<Address>, ProviderError> {
    serde_json::from_value(value).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}
