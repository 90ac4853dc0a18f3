//! Private trading endpoints for order management
//!
//! These endpoints require authentication.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use cryptopia_types::{OrderSide, OrderStatus};

use crate::error::{RestError, RestResult};
use crate::params::RequestParams;
use crate::request::RequestCore;

/// Private trading endpoints
pub struct TradingEndpoints<'a> {
    core: &'a RequestCore,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(core: &'a RequestCore) -> Self {
        Self { core }
    }

    /// Place a single order
    ///
    /// # Arguments
    /// * `symbol` - Market symbol (e.g., "btc_usd")
    /// * `side` - Order side; market orders take no price
    /// * `amount` - Order amount (optional for market buys)
    /// * `price` - Limit price (optional)
    #[instrument(skip(self), fields(symbol = %symbol, side = %side))]
    pub async fn place_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Option<Decimal>,
        price: Option<Decimal>,
    ) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with("type", side.as_str())
            .with_opt("amount", amount.map(|a| a.to_string()))
            .with_opt("price", price.map(|p| p.to_string()));

        debug!("Placing {} order for {}", side, symbol);
        self.core.post_private("trade", &params).await
    }

    /// Place multiple orders in one request
    ///
    /// # Arguments
    /// * `symbol` - Market symbol (all orders share it)
    /// * `side` - Batch-level side; individual orders may override it
    /// * `orders` - Order entries, at least one
    #[instrument(skip(self, orders), fields(symbol = %symbol, count = orders.len()))]
    pub async fn place_batch_orders(
        &self,
        symbol: &str,
        side: OrderSide,
        orders: &[BatchOrder],
    ) -> RestResult<Value> {
        if orders.is_empty() {
            return Err(RestError::InvalidParameter("Empty order list".to_string()));
        }

        let orders_data: Vec<Value> = orders.iter().map(BatchOrder::to_value).collect();

        let params = RequestParams::new()
            .with("symbol", symbol)
            .with("type", side.as_str())
            .with("orders_data", Value::Array(orders_data));

        debug!("Placing batch of {} orders for {}", orders.len(), symbol);
        self.core.post_private("batch_trade", &params).await
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `symbol` - Market symbol
    /// * `order_id` - Id of the order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, symbol: &str, order_id: u64) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with("order_id", order_id);

        debug!("Cancelling order {}", order_id);
        self.core.post_private("cancel_order", &params).await
    }

    /// Get the state of a single order
    #[instrument(skip(self))]
    pub async fn get_order_info(&self, symbol: &str, order_id: u64) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with("order_id", order_id);

        self.core.post_private("order_info", &params).await
    }

    /// Get the state of several orders by fill status
    ///
    /// # Arguments
    /// * `symbol` - Market symbol
    /// * `status` - Fill status to query
    /// * `order_ids` - Comma-separated order id list
    #[instrument(skip(self))]
    pub async fn get_orders_info(
        &self,
        symbol: &str,
        status: OrderStatus,
        order_ids: &str,
    ) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with("type", status.code())
            .with("order_id", order_ids);

        self.core.post_private("orders_info", &params).await
    }
}

/// One entry in a batch order request
#[derive(Debug, Clone)]
pub struct BatchOrder {
    /// Limit price
    pub price: Decimal,
    /// Order amount
    pub amount: Decimal,
    /// Overrides the batch-level side when set
    pub side: Option<OrderSide>,
}

impl BatchOrder {
    /// Create a batch entry using the batch-level side
    pub fn new(price: Decimal, amount: Decimal) -> Self {
        Self {
            price,
            amount,
            side: None,
        }
    }

    /// Override the side for this entry
    pub fn with_side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("price".to_string(), Value::from(self.price.to_string()));
        map.insert("amount".to_string(), Value::from(self.amount.to_string()));
        if let Some(side) = self.side {
            map.insert("type".to_string(), Value::from(side.as_str()));
        }
        Value::Object(map)
    }
}
