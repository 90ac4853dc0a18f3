//! Order side, order status, and account record enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side for the trade and batch-trade endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    /// Limit buy
    Buy,
    /// Limit sell
    Sell,
    /// Market buy
    BuyMarket,
    /// Market sell
    SellMarket,
}

impl OrderSide {
    /// Returns the side as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::BuyMarket => "buy_market",
            Self::SellMarket => "sell_market",
        }
    }

    /// Returns true for the market-order variants
    pub fn is_market(&self) -> bool {
        matches!(self, Self::BuyMarket | Self::SellMarket)
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order fill status used by the order-history and batch order-info queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Order not (fully) filled
    Unfilled,
    /// Order completely filled
    Filled,
}

impl OrderStatus {
    /// Returns the numeric code the exchange expects
    pub fn code(&self) -> u8 {
        match self {
            Self::Unfilled => 0,
            Self::Filled => 1,
        }
    }
}

/// Account record category for the account-records query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountRecordKind {
    /// Deposit records
    Deposit,
    /// Withdrawal records
    Withdrawal,
}

impl AccountRecordKind {
    /// Returns the numeric code the exchange expects
    pub fn code(&self) -> u8 {
        match self {
            Self::Deposit => 0,
            Self::Withdrawal => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_side_wire_values() {
        assert_eq!(OrderSide::Buy.as_str(), "buy");
        assert_eq!(OrderSide::SellMarket.as_str(), "sell_market");
        assert_eq!(serde_json::to_string(&OrderSide::BuyMarket).unwrap(), "\"buy_market\"");
    }

    #[test]
    fn test_order_side_market() {
        assert!(OrderSide::BuyMarket.is_market());
        assert!(!OrderSide::Sell.is_market());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderStatus::Unfilled.code(), 0);
        assert_eq!(OrderStatus::Filled.code(), 1);
        assert_eq!(AccountRecordKind::Deposit.code(), 0);
        assert_eq!(AccountRecordKind::Withdrawal.code(), 1);
    }
}
