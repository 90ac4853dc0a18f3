//! Trading pair identifiers (BTC_USDT format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair identifier in the exchange's underscore format.
///
/// Public market endpoints use uppercase pairs (`BTC_USDT`); the private
/// trading endpoints accept lowercase symbols (`btc_usd`). Both are valid
/// here — the type only enforces the `BASE_QUOTE` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyPair(String);

impl CurrencyPair {
    /// BTC/USDT trading pair
    pub const BTC_USDT: &'static str = "BTC_USDT";
    /// LTC/USDT trading pair
    pub const LTC_USDT: &'static str = "LTC_USDT";
    /// DOT/BTC trading pair
    pub const DOT_BTC: &'static str = "DOT_BTC";

    /// Create a new pair from a string, without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the pair as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base currency (e.g., "BTC" from "BTC_USDT")
    pub fn base(&self) -> Option<&str> {
        self.0.split('_').next()
    }

    /// Get the quote currency (e.g., "USDT" from "BTC_USDT")
    pub fn quote(&self) -> Option<&str> {
        self.0.split('_').nth(1)
    }
}

impl FromStr for CurrencyPair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('_') {
            return Err(PairParseError::MissingSeparator(s.to_string()));
        }

        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 2 {
            return Err(PairParseError::InvalidFormat(s.to_string()));
        }

        if parts[0].is_empty() || parts[1].is_empty() {
            return Err(PairParseError::EmptyPart(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CurrencyPair {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CurrencyPair {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CurrencyPair {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Error parsing a currency pair
#[derive(Debug, Clone, thiserror::Error)]
pub enum PairParseError {
    #[error("Pair must contain '_': {0}")]
    MissingSeparator(String),

    #[error("Invalid pair format: {0}")]
    InvalidFormat(String),

    #[error("Pair has empty base or quote: {0}")]
    EmptyPart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_parse() {
        let pair: CurrencyPair = "BTC_USDT".parse().unwrap();
        assert_eq!(pair.as_str(), "BTC_USDT");
        assert_eq!(pair.base(), Some("BTC"));
        assert_eq!(pair.quote(), Some("USDT"));
    }

    #[test]
    fn test_lowercase_symbol() {
        let pair: CurrencyPair = "btc_usd".parse().unwrap();
        assert_eq!(pair.base(), Some("btc"));
    }

    #[test]
    fn test_pair_parse_error() {
        assert!("BTCUSDT".parse::<CurrencyPair>().is_err());
        assert!("_USDT".parse::<CurrencyPair>().is_err());
        assert!("BTC_".parse::<CurrencyPair>().is_err());
        assert!("BTC_USDT_X".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn test_pair_serde() {
        let pair = CurrencyPair::new("BTC_USDT");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"BTC_USDT\"");

        let parsed: CurrencyPair = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);
    }
}
