//! Shared types for the Cryptopia exchange API
//!
//! This crate holds the pieces of the API surface that are useful on their own:
//! the exchange's numeric error-code table, the `BTC_USDT`-style currency pair
//! identifier, and the wire enums used by trading and history endpoints.

pub mod enums;
pub mod error_codes;
pub mod pair;

pub use enums::{AccountRecordKind, OrderSide, OrderStatus};
pub use pair::{CurrencyPair, PairParseError};
