use crate::address::Address;
use crate::ether_amount::EtherAmount;
use serde::Deserialize;
use serde::Serialize;

/// Address receiving the ether of the token sale.
pub const SALE_RECIPIENT: Address = Address::new([
    0xb6, 0xe7, 0x90, 0xdf, 0x0a, 0xb9, 0xab, 0xb7, 0xe2, 0x61, 0xe4, 0x67, 0xbe, 0x6b, 0x65, 0xaf,
    0x0d, 0x88, 0xe1, 0x33,
]);

/// Settings of the token sale.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PurchasePrefs {
    pub recipient: Address,
    /// New tokens received per ether spent.
    pub tokens_per_ether: u32,
    /// Amount pre-filled in the purchase form.
    pub default_amount: EtherAmount,
}

impl PurchasePrefs {
    /// # Environment Variables
    /// - `ICO_RECIPIENT`: `0x`-prefixed address receiving the ether.
    /// - `ICO_TOKENS_PER_ETHER`: exchange rate, a positive integer.
    /// - `ICO_DEFAULT_AMOUNT`: pre-filled amount in ether, e.g. `0.05`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "ICO_RECIPIENT" => super::setting(key, option_env!("ICO_RECIPIENT")),
            "ICO_TOKENS_PER_ETHER" => super::setting(key, option_env!("ICO_TOKENS_PER_ETHER")),
            "ICO_DEFAULT_AMOUNT" => super::setting(key, option_env!("ICO_DEFAULT_AMOUNT")),
            _ => None,
        })
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let recipient = parsed_or(&lookup, "ICO_RECIPIENT", SALE_RECIPIENT, |s| {
            s.parse::<Address>().ok().filter(|a| !a.is_zero())
        });
        let tokens_per_ether = parsed_or(&lookup, "ICO_TOKENS_PER_ETHER", 10, |s| {
            s.trim().parse::<u32>().ok().filter(|n| *n > 0)
        });
        let default_amount = parsed_or(
            &lookup,
            "ICO_DEFAULT_AMOUNT",
            EtherAmount::from_wei(50_000_000_000_000_000),
            |s| EtherAmount::parse_ether(s).ok(),
        );

        Self {
            recipient,
            tokens_per_ether,
            default_amount,
        }
    }
}

fn parsed_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    match lookup(key) {
        Some(raw) => parse(&raw).unwrap_or_else(|| {
            dioxus_logger::tracing::warn!("ignoring invalid {} {:?}", key, raw);
            default
        }),
        None => default,
    }
}

impl Default for PurchasePrefs {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_constant_matches_sale_address() {
        let parsed: Address = "0xB6e790Df0aB9Abb7E261e467Be6b65aF0d88E133".parse().unwrap();
        assert_eq!(SALE_RECIPIENT, parsed);
    }

    #[test]
    fn invalid_values_fall_back() {
        let prefs = PurchasePrefs::from_lookup(|key| match key {
            "ICO_RECIPIENT" => Some("0x0000000000000000000000000000000000000000".to_string()),
            "ICO_TOKENS_PER_ETHER" => Some("0".to_string()),
            "ICO_DEFAULT_AMOUNT" => Some("a lot".to_string()),
            _ => None,
        });
        assert_eq!(prefs, PurchasePrefs::default());
    }

    #[test]
    fn valid_overrides() {
        let prefs = PurchasePrefs::from_lookup(|key| match key {
            "ICO_RECIPIENT" => Some("0x3333333333333333333333333333333333333333".to_string()),
            "ICO_TOKENS_PER_ETHER" => Some("25".to_string()),
            "ICO_DEFAULT_AMOUNT" => Some("0.2".to_string()),
            _ => None,
        });
        assert_eq!(prefs.recipient, Address::new([0x33; 20]));
        assert_eq!(prefs.tokens_per_ether, 25);
        assert_eq!(prefs.default_amount.to_string(), "0.2");
    }
}
