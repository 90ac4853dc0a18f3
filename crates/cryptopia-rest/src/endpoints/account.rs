//! Private account endpoints
//!
//! These endpoints require authentication.

use serde_json::Value;
use tracing::{debug, instrument};

use cryptopia_types::{AccountRecordKind, OrderStatus};

use crate::error::RestResult;
use crate::params::RequestParams;
use crate::request::RequestCore;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    core: &'a RequestCore,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(core: &'a RequestCore) -> Self {
        Self { core }
    }

    /// Get account balance across all currencies
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<Value> {
        debug!("Fetching account balance");
        self.core.post_private("GetBalance", &RequestParams::new()).await
    }

    /// Get paginated deposit or withdrawal records
    ///
    /// # Arguments
    /// * `symbol` - Market symbol
    /// * `kind` - Record category (optional)
    /// * `current_page` - Page number (optional)
    /// * `page_length` - Records per page (optional)
    #[instrument(skip(self))]
    pub async fn get_account_records(
        &self,
        symbol: &str,
        kind: Option<AccountRecordKind>,
        current_page: Option<u32>,
        page_length: Option<u32>,
    ) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with_opt("type", kind.map(|k| k.code()))
            .with_opt("current_page", current_page)
            .with_opt("page_length", page_length);

        self.core.post_private("account_records", &params).await
    }

    /// Get the caller's trade history
    ///
    /// # Arguments
    /// * `symbol` - Market symbol
    /// * `since` - Return trades since this transaction id (optional)
    #[instrument(skip(self))]
    pub async fn get_trade_history(&self, symbol: &str, since: Option<u64>) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with_opt("since", since);

        self.core.post_private("trade_history", &params).await
    }

    /// Get paginated order history
    ///
    /// # Arguments
    /// * `symbol` - Market symbol
    /// * `status` - Fill status filter (optional)
    /// * `current_page` - Page number (optional)
    /// * `page_length` - Records per page (optional)
    #[instrument(skip(self))]
    pub async fn get_order_history(
        &self,
        symbol: &str,
        status: Option<OrderStatus>,
        current_page: Option<u32>,
        page_length: Option<u32>,
    ) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with_opt("status", status.map(|s| s.code()))
            .with_opt("current_page", current_page)
            .with_opt("page_length", page_length);

        self.core.post_private("order_history", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_records_param_order() {
        let params = RequestParams::new()
            .with("symbol", "btc_usd")
            .with_opt("type", Some(AccountRecordKind::Withdrawal.code()))
            .with_opt("current_page", Some(2u32))
            .with_opt("page_length", Some(50u32));

        assert_eq!(
            params.to_json().unwrap(),
            r#"{"symbol":"btc_usd","type":1,"current_page":2,"page_length":50}"#
        );
    }

    #[test]
    fn test_omitted_pagination_matches_original_body() {
        // Absent optionals disappear from the body entirely
        let params = RequestParams::new()
            .with("symbol", "btc_usd")
            .with_opt("type", None::<u8>)
            .with_opt("current_page", None::<u32>)
            .with_opt("page_length", None::<u32>);

        assert_eq!(params.to_json().unwrap(), r#"{"symbol":"btc_usd"}"#);
    }
}
