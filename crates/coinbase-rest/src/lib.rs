//! REST API client for the Coinbase Advanced Trade API
//!
//! This crate provides a typed client for Coinbase's brokerage REST API.
//!
//! # Features
//!
//! - **Accounts**: list brokerage accounts, one page at a time
//! - **Trading**: place market, limit and stop-limit orders
//! - **Pluggable transport**: any [`HttpSend`] implementation can carry the
//!   signed requests
//!
//! # Authentication
//!
//! Every request is signed by [`AuthTransport`] with HMAC-SHA256 over
//! `timestamp + method + path + body` and carries the `cb-access-key`,
//! `cb-access-sign` and `cb-access-timestamp` headers.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_rest::{CoinbaseClient, OrderRequest};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinbaseClient::new("api-key", "api-secret")?;
//!
//!     let accounts = client.list_accounts().await?;
//!     println!("{} accounts", accounts.size);
//!
//!     let order = OrderRequest::market_buy("BTC-USD", Decimal::new(10, 0));
//!     let result = client.create_order(&order).await?;
//!     println!("Order {}: success={}", result.order_id, result.success);
//!
//!     Ok(())
//! }
//! ```
//!
//! The client makes exactly one attempt per call. Retries, rate limiting and
//! pagination traversal are left to the caller.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use auth::{AuthTransport, CB_ACCESS_KEY, CB_ACCESS_SIGN, CB_ACCESS_TIMESTAMP};
pub use client::{ClientConfig, CoinbaseClient};
pub use coinbase_auth::{AuthError, Credentials};
pub use error::{RestError, RestResult};
pub use transport::{HttpSend, ReqwestTransport, TransportError};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::{MockTransport, RecordedRequest};

// Re-export endpoint-specific types
pub use types::{
    // Accounts
    Account, Accounts, AccountsQuery, Money,
    // Trading
    LimitGtc, LimitGtd, MarketIoc, Order, OrderConfig, OrderRequest, OrderSide, StopDirection,
    StopLimitGtc, StopLimitGtd,
    // Responses
    ErrorResponse, SuccessResponse,
};
