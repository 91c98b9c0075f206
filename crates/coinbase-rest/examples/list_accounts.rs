//! Example: list brokerage accounts
//!
//! Walks every page of accounts and prints non-zero balances.
//!
//! Run with: cargo run --example list_accounts
//!
//! Requires COINBASE_API_KEY and COINBASE_API_SECRET (a `.env` file works too).

use coinbase_rest::{AccountsQuery, CoinbaseClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = CoinbaseClient::from_env()?;

    println!("=== Coinbase Accounts ===\n");

    let mut query = AccountsQuery::new().with_limit(50);
    let mut total = 0;

    loop {
        let page = client.list_accounts_page(&query).await?;
        total += page.accounts.len();

        for account in &page.accounts {
            if account.available_balance.value.is_zero() && account.hold.value.is_zero() {
                continue;
            }
            println!(
                "  {:<6} available: {:>20}  hold: {:>20}",
                account.currency, account.available_balance.value, account.hold.value
            );
        }

        match page.next_page(Some(50)) {
            Some(next) => query = next,
            None => break,
        }
    }

    println!("\n{} accounts total", total);
    Ok(())
}
