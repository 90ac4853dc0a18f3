//! Demo 2: Account Balance
//!
//! Showcases: credentials handling and the signed GetBalance endpoint
//!
//! Run: cargo run --bin account_balance -- <api-key> <api-secret>
//! Or set CRYPTOPIA_API_KEY and CRYPTOPIA_API_SECRET in the environment.
//!
//! WARNING: never commit your API keys into a public repository.

use colored::*;
use cryptopia_rest::{Credentials, CryptopiaRestClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  ACCOUNT BALANCE".cyan().bold());
    println!("{}", "  Cryptopia REST Demo - Signed Private Request".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let mut args = std::env::args().skip(1);
    let credentials = match (args.next(), args.next()) {
        (Some(key), Some(secret)) => Credentials::new(key, secret)?,
        _ => Credentials::from_env()?,
    };

    let client = CryptopiaRestClient::with_credentials(credentials);

    println!("{} Fetching account balance...", "✓".green());
    let balance = client.get_balance().await?;
    println!("{}", serde_json::to_string_pretty(&balance)?);

    Ok(())
}
