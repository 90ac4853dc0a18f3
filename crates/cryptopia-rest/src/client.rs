//! Main REST client implementation

use crate::auth::Credentials;
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::RequestCore;
use cryptopia_types::OrderSide;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// Default exchange host
const DEFAULT_HOSTNAME: &str = "www.cryptopia.co.nz";
/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = "cryptopia-rest/0.1.0";

/// Cryptopia REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use cryptopia_rest::{Credentials, CryptopiaRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CryptopiaRestClient::new();
///     let ticker = client.get_ticker("BTC_USDT").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CryptopiaRestClient::with_credentials(creds);
///     let balance = auth_client.get_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CryptopiaRestClient {
    core: RequestCore,
}

impl CryptopiaRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .expect("Failed to create HTTP client");

        info!(hostname = %config.hostname, "Created Cryptopia REST client");

        Self {
            core: RequestCore {
                http,
                server: format!("https://{}", config.hostname),
                credentials: config.credentials,
            },
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.core.credentials.is_some()
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.core)
    }

    /// Get ticker information for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "BTC_USDT")
    pub async fn get_ticker(&self, pair: &str) -> RestResult<Value> {
        self.market().get_ticker(pair).await
    }

    /// Get the order book for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `limit` - Number of price levels (default 1000)
    pub async fn get_order_book(&self, pair: &str, limit: Option<u32>) -> RestResult<Value> {
        self.market().get_order_book(pair, limit).await
    }

    /// Get recent market trades for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `hours` - Lookback window in hours (default 24)
    pub async fn get_trades(&self, pair: &str, hours: Option<u32>) -> RestResult<Value> {
        self.market().get_market_history(pair, hours).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(AccountEndpoints::new(&self.core))
    }

    /// Get account balance
    pub async fn get_balance(&self) -> RestResult<Value> {
        self.account()?.get_balance().await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(TradingEndpoints::new(&self.core))
    }

    /// Place a single order
    pub async fn place_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Option<Decimal>,
        price: Option<Decimal>,
    ) -> RestResult<Value> {
        self.trading()?.place_order(symbol, side, amount, price).await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, symbol: &str, order_id: u64) -> RestResult<Value> {
        self.trading()?.cancel_order(symbol, order_id).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(FundingEndpoints::new(&self.core))
    }
}

impl Default for CryptopiaRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CryptopiaRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptopiaRestClient")
            .field("server", &self.core.server)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Exchange host name
    pub hostname: String,
    /// Request timeout in seconds, applied uniformly to every call
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            hostname: DEFAULT_HOSTNAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the exchange host name
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = CryptopiaRestClient::new();
        assert!(!client.has_credentials());
        assert_eq!(client.core.server, "https://www.cryptopia.co.nz");
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_hostname("sandbox.cryptopia.co.nz")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.hostname, "sandbox.cryptopia.co.nz");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_config_defaults_match_exchange() {
        let config = ClientConfig::default();
        assert_eq!(config.hostname, "www.cryptopia.co.nz");
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn test_auth_required_error() {
        let client = CryptopiaRestClient::new();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.funding(), Err(RestError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_balance_without_credentials_fails_fast() {
        let client = CryptopiaRestClient::new();
        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(err, RestError::AuthRequired));
    }
}
