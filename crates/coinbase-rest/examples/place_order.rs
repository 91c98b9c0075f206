//! Example: place a limit order
//!
//! Places a GTC limit buy far below market so it rests on the book.
//!
//! Run with: cargo run --example place_order -- BTC-USD 0.0001 1000
//!
//! WARNING: this sends a real order. Requires COINBASE_API_KEY and
//! COINBASE_API_SECRET.

use coinbase_rest::{CoinbaseClient, OrderRequest, OrderSide, RestError};
use rust_decimal::Decimal;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let product = args.first().map(String::as_str).unwrap_or("BTC-USD");
    let size: Decimal = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(Decimal::new(1, 4));
    let price: Decimal = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(Decimal::new(1000, 0));

    let client = CoinbaseClient::from_env()?;
    let order = OrderRequest::limit_gtc(product, OrderSide::Buy, size, price);

    println!("Placing {} {} {} @ {}", order.side, size, product, price);
    println!("  client_order_id: {}", order.client_order_id);

    match client.create_order(&order).await {
        Ok(result) if result.is_success() => {
            println!("  Accepted, order_id: {}", result.order_id);
        }
        Ok(result) => {
            println!(
                "  Rejected: {}",
                result.failure_message().unwrap_or(&result.failure_reason)
            );
        }
        Err(e @ RestError::StatusNotOk { .. }) if e.is_unauthorized() => {
            println!("  Credentials rejected: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
