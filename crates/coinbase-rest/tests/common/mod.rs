//! Shared fixtures for integration tests

#![allow(dead_code)]

use coinbase_rest::{ClientConfig, CoinbaseClient, Credentials};

pub const TEST_KEY: &str = "test-key";
pub const TEST_SECRET: &str = "test-secret";

/// Lowercase hex HMAC-SHA256
pub const SIGNATURE_PATTERN: &str = "^[0-9a-f]{64}$";

/// Unix seconds
pub const TIMESTAMP_PATTERN: &str = "^[0-9]+$";

pub const ACCOUNTS_PATH: &str = "/api/v3/brokerage/accounts";
pub const ORDERS_PATH: &str = "/api/v3/brokerage/orders";

pub const ACCOUNTS_RESPONSE: &str = r#"{
    "accounts": [
        {
            "uuid": "8bfc20d7-f7c6-4422-bf07-8243ca4169fe",
            "name": "BTC Wallet",
            "currency": "BTC",
            "available_balance": {"value": "1.23", "currency": "BTC"},
            "default": true,
            "active": true,
            "created_at": "2021-05-31T09:59:59Z",
            "updated_at": "2021-05-31T09:59:59Z",
            "deleted_at": null,
            "type": "ACCOUNT_TYPE_CRYPTO",
            "ready": true,
            "hold": {"value": "0", "currency": "BTC"}
        },
        {
            "uuid": "0c8a5dd0-3a43-4a35-9d0e-9a1a3f7c2b11",
            "name": "USD Wallet",
            "currency": "USD",
            "available_balance": {"value": "250.00", "currency": "USD"},
            "default": true,
            "active": true,
            "created_at": "2021-05-31T09:59:59Z",
            "updated_at": "2022-01-01T00:00:00Z",
            "type": "ACCOUNT_TYPE_FIAT",
            "ready": true,
            "hold": {"value": "12.50", "currency": "USD"}
        }
    ],
    "has_next": true,
    "cursor": "next-cursor",
    "size": 2
}"#;

pub const ORDER_SUCCESS_RESPONSE: &str = r#"{
    "success": true,
    "failure_reason": "UNKNOWN_FAILURE_REASON",
    "order_id": "11111-00000-000000",
    "success_response": {
        "order_id": "11111-00000-000000",
        "product_id": "BTC-USD",
        "side": "BUY",
        "client_order_id": "client-1"
    }
}"#;

/// Client pointed at a mock server
pub fn client_for(server_url: &str) -> CoinbaseClient {
    let credentials = Credentials::new(TEST_KEY, TEST_SECRET).unwrap();
    let config = ClientConfig::new()
        .with_base_url(server_url)
        .with_timeout(5);
    CoinbaseClient::with_config(credentials, config).unwrap()
}
