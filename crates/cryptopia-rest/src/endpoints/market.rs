//! Public market data endpoints
//!
//! These endpoints don't require authentication. Path segments carry the
//! interpolated arguments, and the same values are repeated in the query
//! string, exactly as the exchange expects.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::request::RequestCore;

/// Order book depth used when the caller passes no limit
const DEFAULT_ORDER_BOOK_LIMIT: u32 = 1000;
/// Market history lookback used when the caller passes no window
const DEFAULT_HISTORY_HOURS: u32 = 24;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    core: &'a RequestCore,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(core: &'a RequestCore) -> Self {
        Self { core }
    }

    /// List all currencies traded on the exchange
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Value> {
        debug!("Fetching currency list");
        self.core.get_public("GetCurrencies/", &[]).await
    }

    /// Get ticker information for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "BTC_USDT")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, pair: &str) -> RestResult<Value> {
        debug!("Fetching ticker for {}", pair);
        self.core
            .get_public(
                &format!("GetMarket/{}", pair),
                &[("currencyPair", pair.to_string())],
            )
            .await
    }

    /// Get the order book for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "BTC_USDT")
    /// * `limit` - Number of price levels (default 1000)
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, pair: &str, limit: Option<u32>) -> RestResult<Value> {
        let limit = limit.unwrap_or(DEFAULT_ORDER_BOOK_LIMIT);
        debug!("Fetching order book for {} (limit {})", pair, limit);
        self.core
            .get_public(
                &order_book_method(pair, limit),
                &[
                    ("currencyPair", pair.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }

    /// Get recent market trades for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "BTC_USDT")
    /// * `hours` - Lookback window in hours (default 24)
    #[instrument(skip(self))]
    pub async fn get_market_history(&self, pair: &str, hours: Option<u32>) -> RestResult<Value> {
        let hours = hours.unwrap_or(DEFAULT_HISTORY_HOURS);
        debug!("Fetching market history for {} ({}h)", pair, hours);
        self.core
            .get_public(
                &market_history_method(pair, hours),
                &[
                    ("currencyPair", pair.to_string()),
                    ("hours", hours.to_string()),
                ],
            )
            .await
    }

    /// Get candlestick data for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Market symbol
    /// * `kind` - Candle interval identifier (optional)
    /// * `size` - Number of candles (optional)
    /// * `since` - Return candles since this timestamp (optional)
    #[instrument(skip(self))]
    pub async fn get_kline(
        &self,
        symbol: &str,
        kind: Option<&str>,
        size: Option<u32>,
        since: Option<u64>,
    ) -> RestResult<Value> {
        let mut query = vec![("symbol", symbol.to_string())];
        if let Some(kind) = kind {
            query.push(("type", kind.to_string()));
        }
        if let Some(size) = size {
            query.push(("size", size.to_string()));
        }
        if let Some(since) = since {
            query.push(("since", since.to_string()));
        }

        debug!("Fetching kline for {}", symbol);
        self.core.get_public("kline", &query).await
    }

    /// Get lending depth for a symbol
    #[instrument(skip(self))]
    pub async fn get_lend_depth(&self, symbol: &str) -> RestResult<Value> {
        debug!("Fetching lend depth for {}", symbol);
        self.core
            .get_public("kline", &[("symbol", symbol.to_string())])
            .await
    }
}

fn order_book_method(pair: &str, limit: u32) -> String {
    format!("GetMarketOrders/{}/{}", pair, limit)
}

fn market_history_method(pair: &str, hours: u32) -> String {
    format!("GetMarketHistory/{}/{}", pair, hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_book_default_limit_path() {
        let method = order_book_method("BTC_USDT", DEFAULT_ORDER_BOOK_LIMIT);
        assert_eq!(method, "GetMarketOrders/BTC_USDT/1000");
    }

    #[test]
    fn test_order_book_explicit_limit_path() {
        assert_eq!(order_book_method("DOT_BTC", 50), "GetMarketOrders/DOT_BTC/50");
    }

    #[test]
    fn test_market_history_default_window_path() {
        let method = market_history_method("BTC_USDT", DEFAULT_HISTORY_HOURS);
        assert_eq!(method, "GetMarketHistory/BTC_USDT/24");
    }
}
