//! Provides a safe, self-contained type for representing ether amounts.

use std::fmt;
use std::ops::Add;
use std::ops::Sub;
use std::str::FromStr;

use num_traits::CheckedAdd;
use num_traits::CheckedSub;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Number of decimal places between wei and ether.
pub const ETHER_DECIMALS: u32 = 18;

const WEI_PER_ETHER: u128 = 10_u128.pow(ETHER_DECIMALS);

/// An error that can occur when parsing a string into an `EtherAmount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEtherError {
    /// The string is not a plain decimal number (e.g., "abc", "1.2.3", "-1").
    #[error("invalid ether amount format")]
    InvalidFormat,
    /// The string has more than 18 decimal places.
    #[error("too many decimal places for ether")]
    TooManyDecimals,
    /// The amount does not fit in 128 bits of wei.
    #[error("ether amount is too large")]
    Overflow,
}

/// An amount of ether, stored as an integer number of wei.
///
/// `Display` follows the ethers `formatEther` convention: the fractional part
/// is trimmed of trailing zeros but always keeps at least one digit, so one
/// ether prints as `1.0` and 0.05 ether as `0.05`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EtherAmount(u128);

impl EtherAmount {
    pub const fn from_wei(wei: u128) -> Self {
        Self(wei)
    }

    pub fn as_wei(&self) -> u128 {
        self.0
    }

    /// Parses a decimal ether string such as `"0.05"` or `"12"`.
    pub fn parse_ether(s: &str) -> Result<Self, ParseEtherError> {
        let s = s.trim();

        let (whole_str, frac_str) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole_str.is_empty() && frac_str.is_empty())
            || !is_digits(whole_str)
            || !is_digits(frac_str)
        {
            return Err(ParseEtherError::InvalidFormat);
        }

        if frac_str.len() > ETHER_DECIMALS as usize {
            return Err(ParseEtherError::TooManyDecimals);
        }

        let whole = if whole_str.is_empty() {
            0
        } else {
            whole_str
                .parse::<u128>()
                .map_err(|_| ParseEtherError::Overflow)?
        };

        let frac = if frac_str.is_empty() {
            0
        } else {
            // at most 18 digits, always fits
            frac_str
                .parse::<u128>()
                .map_err(|_| ParseEtherError::InvalidFormat)?
                * 10_u128.pow(ETHER_DECIMALS - frac_str.len() as u32)
        };

        whole
            .checked_mul(WEI_PER_ETHER)
            .and_then(|w| w.checked_add(frac))
            .map(Self)
            .ok_or(ParseEtherError::Overflow)
    }

    /// Formats the amount with exactly `decimals` fractional digits, truncating.
    pub fn to_fixed(&self, decimals: u32) -> String {
        let decimals = decimals.min(ETHER_DECIMALS);
        let whole = self.0 / WEI_PER_ETHER;
        if decimals == 0 {
            return whole.to_string();
        }
        let frac = format!("{:018}", self.0 % WEI_PER_ETHER);
        format!("{}.{}", whole, &frac[..decimals as usize])
    }

    /// Multiplies by a whole number, `None` on overflow.
    pub fn checked_mul_u128(&self, factor: u128) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub(&self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for EtherAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WEI_PER_ETHER;
        let frac = format!("{:018}", self.0 % WEI_PER_ETHER);
        let frac = frac.trim_end_matches('0');
        let frac = if frac.is_empty() { "0" } else { frac };
        write!(f, "{}.{}", whole, frac)
    }
}

impl FromStr for EtherAmount {
    type Err = ParseEtherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_ether(s)
    }
}

impl Add for EtherAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Zero for EtherAmount {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl CheckedAdd for EtherAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.0.checked_add(v.0).map(Self)
    }
}

impl Sub for EtherAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl CheckedSub for EtherAmount {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.0.checked_sub(v.0).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fractional_ether() {
        let amount = EtherAmount::parse_ether("0.05").unwrap();
        assert_eq!(amount.as_wei(), 50_000_000_000_000_000);

        let amount = EtherAmount::parse_ether(".5").unwrap();
        assert_eq!(amount.as_wei(), 500_000_000_000_000_000);

        let amount = EtherAmount::parse_ether(" 12 ").unwrap();
        assert_eq!(amount.as_wei(), 12 * WEI_PER_ETHER);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(EtherAmount::parse_ether(""), Err(ParseEtherError::InvalidFormat));
        assert_eq!(EtherAmount::parse_ether("."), Err(ParseEtherError::InvalidFormat));
        assert_eq!(EtherAmount::parse_ether("-1"), Err(ParseEtherError::InvalidFormat));
        assert_eq!(EtherAmount::parse_ether("+1"), Err(ParseEtherError::InvalidFormat));
        assert_eq!(EtherAmount::parse_ether("1.2.3"), Err(ParseEtherError::InvalidFormat));
        assert_eq!(EtherAmount::parse_ether("1e18"), Err(ParseEtherError::InvalidFormat));
        assert_eq!(
            EtherAmount::parse_ether("0.0000000000000000001"),
            Err(ParseEtherError::TooManyDecimals)
        );
        assert_eq!(
            EtherAmount::parse_ether("999999999999999999999999999"),
            Err(ParseEtherError::Overflow)
        );
    }

    #[test]
    fn formats_like_format_ether() {
        assert_eq!(EtherAmount::zero().to_string(), "0.0");
        assert_eq!(EtherAmount::from_wei(WEI_PER_ETHER).to_string(), "1.0");
        assert_eq!(EtherAmount::parse_ether("0.05").unwrap().to_string(), "0.05");
        assert_eq!(EtherAmount::from_wei(1).to_string(), "0.000000000000000001");
        assert_eq!(
            EtherAmount::from_wei(1_234_500_000_000_000_000).to_string(),
            "1.2345"
        );
    }

    #[test]
    fn to_fixed_truncates() {
        let amount = EtherAmount::parse_ether("1.239").unwrap();
        assert_eq!(amount.to_fixed(2), "1.23");
        assert_eq!(amount.to_fixed(0), "1");
        assert_eq!(EtherAmount::zero().to_fixed(2), "0.00");
    }

    #[test]
    fn arithmetic_is_checked() {
        let a = EtherAmount::parse_ether("0.10").unwrap();
        let b = EtherAmount::parse_ether("0.05").unwrap();
        assert_eq!(a.checked_sub(&b), Some(b));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(b.saturating_sub(a), EtherAmount::zero());
        assert_eq!(EtherAmount::from_wei(u128::MAX).checked_add(&b), None);
        assert_eq!(b.checked_mul_u128(10).unwrap().to_string(), "0.5");
    }
}
