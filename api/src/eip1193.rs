//! The request interface exposed by browser-injected wallets (EIP-1193).

use serde_json::Value;
use thiserror::Error;

/// Error code a wallet returns when the user rejects a prompt.
pub const USER_REJECTED_REQUEST: i64 = 4001;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The wallet answered the request with a JSON-RPC error.
    #[error("wallet error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("wallet returned no accounts")]
    NoAccounts,

    #[error("unexpected wallet response: {0}")]
    InvalidResponse(String),

    /// The call never reached the wallet (bad params, missing object, ...).
    #[error("wallet transport failed: {0}")]
    Transport(String),
}

impl ProviderError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code, .. } if *code == USER_REJECTED_REQUEST)
    }
}

/// Anything that can answer `request({ method, params })`.
///
/// Implemented by the injected `window.ethereum` object in the browser and by
/// scripted mocks in tests.
#[allow(async_fn_in_trait)]
pub trait Eip1193 {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}

/// Encodes an integer as a JSON-RPC quantity (`0x`-prefixed, no leading zeros).
pub fn to_quantity(value: u128) -> String {
    format!("{:#x}", value)
}

/// Decodes a JSON-RPC quantity string.
pub fn parse_quantity(value: &Value) -> Result<u128, ProviderError> {
    let s = value
        .as_str()
        .ok_or_else(|| ProviderError::InvalidResponse(format!("expected hex quantity, got {value}")))?;
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| ProviderError::InvalidResponse(format!("quantity without 0x prefix: {s}")))?;
    if digits.is_empty() {
        return Err(ProviderError::InvalidResponse("empty quantity".to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ProviderError::InvalidResponse(format!("bad quantity {s}")));
    }
    u128::from_str_radix(digits, 16)
        .map_err(|e| ProviderError::InvalidResponse(format!("bad quantity {s}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantities() {
        assert_eq!(to_quantity(0), "0x0");
        assert_eq!(to_quantity(255), "0xff");
        assert_eq!(parse_quantity(&json!("0x1")).unwrap(), 1);
        assert_eq!(
            parse_quantity(&json!("0xb1a2bc2ec50000")).unwrap(),
            50_000_000_000_000_000
        );
        assert!(parse_quantity(&json!("12")).is_err());
        assert!(parse_quantity(&json!("0x")).is_err());
        assert!(parse_quantity(&json!("0x+ff")).is_err());
        assert!(parse_quantity(&json!("0x-1")).is_err());
        assert!(parse_quantity(&json!(12)).is_err());
    }

    #[test]
    fn detects_user_rejection() {
        let rejected = ProviderError::Rpc {
            code: USER_REJECTED_REQUEST,
            message: "User rejected the request.".to_string(),
        };
        assert!(rejected.is_user_rejection());
        assert!(!ProviderError::NoAccounts.is_user_rejection());
    }
}
