//! Private funding endpoints for withdrawals
//!
//! These endpoints require authentication.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::params::RequestParams;
use crate::request::RequestCore;

/// Private funding endpoints
pub struct FundingEndpoints<'a> {
    core: &'a RequestCore,
}

impl<'a> FundingEndpoints<'a> {
    pub(crate) fn new(core: &'a RequestCore) -> Self {
        Self { core }
    }

    /// Request a withdrawal
    ///
    /// # Arguments
    /// * `symbol` - Currency symbol
    /// * `charge_fee` - Network fee to attach
    /// * `trade_password` - Account trade password
    /// * `address` - Destination address
    /// * `amount` - Amount to withdraw
    #[instrument(skip(self, trade_password), fields(symbol = %symbol))]
    pub async fn withdraw(
        &self,
        symbol: &str,
        charge_fee: Decimal,
        trade_password: &str,
        address: &str,
        amount: Decimal,
    ) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with("chargefee", charge_fee.to_string())
            .with("trade_pwd", trade_password)
            .with("withdraw_address", address)
            .with("withdraw_amount", amount.to_string());

        debug!("Requesting withdrawal of {} {}", amount, symbol);
        self.core.post_private("withdraw", &params).await
    }

    /// Cancel a pending withdrawal
    ///
    /// # Arguments
    /// * `symbol` - Currency symbol
    /// * `withdraw_id` - Id returned by the withdrawal request
    #[instrument(skip(self))]
    pub async fn cancel_withdrawal(&self, symbol: &str, withdraw_id: u64) -> RestResult<Value> {
        let params = RequestParams::new()
            .with("symbol", symbol)
            .with("withdraw_id", withdraw_id);

        debug!("Cancelling withdrawal {}", withdraw_id);
        self.core.post_private("cancel_withdraw", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_withdraw_param_order() {
        let params = RequestParams::new()
            .with("symbol", "btc")
            .with("chargefee", Decimal::from_str("0.0001").unwrap().to_string())
            .with("trade_pwd", "pw")
            .with("withdraw_address", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT")
            .with("withdraw_amount", Decimal::from_str("0.25").unwrap().to_string());

        assert_eq!(
            params.to_json().unwrap(),
            r#"{"symbol":"btc","chargefee":"0.0001","trade_pwd":"pw","withdraw_address":"1BoatSLRHtKNngkdXEeobR76b53LETtpyT","withdraw_amount":"0.25"}"#
        );
    }
}
