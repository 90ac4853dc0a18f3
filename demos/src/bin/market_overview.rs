//! Demo 1: Public Market Overview
//!
//! Showcases: ticker, order book, and market history endpoints (no API key needed)
//!
//! Run: cargo run --bin market_overview
//!
//! Set RUST_LOG=cryptopia_rest=debug to see the dispatched request URLs.

use colored::*;
use cryptopia_rest::CryptopiaRestClient;
use cryptopia_types::CurrencyPair;
use tracing_subscriber::EnvFilter;

const PAIR: &str = "BTC_USDT";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  PUBLIC MARKET OVERVIEW".cyan().bold());
    println!("{}", "  Cryptopia REST Demo - Ticker, Order Book, Trades".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let pair: CurrencyPair = PAIR.parse()?;
    let client = CryptopiaRestClient::new();

    println!("{} Fetching ticker for {}...", "✓".green(), pair);
    let ticker = client.get_ticker(pair.as_str()).await?;
    println!("{}", serde_json::to_string_pretty(&ticker)?);
    println!();

    println!("{} Fetching order book (default 1000 levels)...", "✓".green());
    let book = client.get_order_book(pair.as_str(), None).await?;
    println!("{}", serde_json::to_string_pretty(&book)?);
    println!();

    println!("{} Fetching last 24h of trades...", "✓".green());
    let trades = client.get_trades(pair.as_str(), None).await?;
    println!("{}", serde_json::to_string_pretty(&trades)?);

    Ok(())
}
