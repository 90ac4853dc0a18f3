//! REST API client for the Cryptopia cryptocurrency exchange
//!
//! This crate provides a client for Cryptopia's REST API: public market data
//! over unauthenticated GET requests, and the private account, trading, and
//! funding endpoints over signed POST requests.
//!
//! # Authentication
//!
//! Private endpoints use the exchange's `amx` authorization scheme: a base64
//! MD5 digest of the JSON request body and an HMAC-SHA256 signature over the
//! key, HTTP verb, url-encoded lowercased URL, nonce, and digest. The nonce
//! is the current Unix time in whole seconds, so callers issuing several
//! signed requests per second will see the exchange reject the repeats.
//!
//! # Example
//!
//! ```no_run
//! use cryptopia_rest::{Credentials, CryptopiaRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CryptopiaRestClient::new();
//!     let book = client.get_order_book("BTC_USDT", None).await?;
//!     println!("order book: {}", book);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = CryptopiaRestClient::with_credentials(creds);
//!     let balance = auth_client.get_balance().await?;
//!     println!("balances: {}", balance);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Concurrency
//!
//! The client is cheap to clone and safe to share: the only state behind a
//! call is the immutable credentials and the `reqwest` connection pool. Each
//! operation issues one HTTP request and resolves through its returned
//! future; there is no internal retry, caching, or cross-call ordering. A
//! single configured timeout applies to every request.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;

mod request;
mod response;

// Re-export main types
pub use auth::{Credentials, RequestSigner, SignedEnvelope};
pub use client::{ClientConfig, CryptopiaRestClient};
pub use error::{RestError, RestResult};
pub use params::RequestParams;

// Re-export shared API types
pub use cryptopia_types::{AccountRecordKind, CurrencyPair, OrderSide, OrderStatus};
pub use endpoints::BatchOrder;
