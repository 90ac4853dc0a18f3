//! API endpoint implementations
//!
//! Endpoints are grouped by category: public market data, and the private
//! account, trading, and funding groups.

pub mod account;
pub mod funding;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use funding::FundingEndpoints;
pub use market::MarketEndpoints;
pub use trading::{BatchOrder, TradingEndpoints};
