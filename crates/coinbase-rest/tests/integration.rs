//! Integration tests for the Coinbase REST client
//!
//! Runs the real reqwest transport against a local mock server.

mod common;

use common::*;
use coinbase_rest::{
    AccountsQuery, OrderRequest, RestError, CB_ACCESS_KEY, CB_ACCESS_SIGN, CB_ACCESS_TIMESTAMP,
};
use mockito::Matcher;
use rust_decimal_macros::dec;

// =============================================================================
// Accounts
// =============================================================================

#[tokio::test]
async fn test_list_accounts_sends_auth_headers() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", ACCOUNTS_PATH)
        .match_header(CB_ACCESS_KEY, TEST_KEY)
        .match_header(CB_ACCESS_SIGN, Matcher::Regex(SIGNATURE_PATTERN.to_string()))
        .match_header(CB_ACCESS_TIMESTAMP, Matcher::Regex(TIMESTAMP_PATTERN.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ACCOUNTS_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let accounts = client.list_accounts().await.unwrap();

    assert_eq!(accounts.size, 2);
    assert_eq!(accounts.accounts.len(), 2);
    let usd = accounts.by_currency("USD").unwrap();
    assert_eq!(usd.available_balance.value, dec!(250.00));
    assert_eq!(usd.hold.value, dec!(12.50));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_accounts_page_sends_query() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", ACCOUNTS_PATH)))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "1".into()),
            Matcher::UrlEncoded("cursor".into(), "next-cursor".into()),
        ]))
        .match_header(CB_ACCESS_SIGN, Matcher::Regex(SIGNATURE_PATTERN.to_string()))
        .with_status(200)
        .with_body(r#"{"accounts": [], "has_next": false, "cursor": "", "size": 0}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let query = AccountsQuery::new().with_limit(1).with_cursor("next-cursor");
    let page = client.list_accounts_page(&query).await.unwrap();

    assert!(page.accounts.is_empty());
    assert!(page.next_page(Some(1)).is_none());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_maps_to_status_not_ok() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", ACCOUNTS_PATH)
        .with_status(401)
        .with_body("Unauthorized")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client.list_accounts().await.unwrap_err();

    assert!(err.is_unauthorized());
    match err {
        RestError::StatusNotOk { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("Expected StatusNotOk, got {:?}", other),
    }

    // No retry on failure
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", ACCOUNTS_PATH)
        .with_status(503)
        .with_body("unavailable")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client.list_accounts().await.unwrap_err();

    assert!(err.is_retryable());
    assert!(err.to_string().contains("unexpected status code: 503"));

    mock.assert_async().await;
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_create_order_posts_signed_json() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", ORDERS_PATH)
        .match_header("content-type", "application/json")
        .match_header(CB_ACCESS_KEY, TEST_KEY)
        .match_header(CB_ACCESS_SIGN, Matcher::Regex(SIGNATURE_PATTERN.to_string()))
        .match_body(Matcher::PartialJson(serde_json::json!({
            "client_order_id": "client-1",
            "product_id": "BTC-USD",
            "side": "BUY",
            "order_configuration": {
                "market_market_ioc": {"quote_size": "100"}
            }
        })))
        .with_status(200)
        .with_body(ORDER_SUCCESS_RESPONSE)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let order = OrderRequest::market_buy("BTC-USD", dec!(100)).with_client_order_id("client-1");
    let result = client.create_order(&order).await.unwrap();

    assert!(result.is_success());
    assert_eq!(result.order_id, "11111-00000-000000");
    assert_eq!(
        result.success_response.unwrap().client_order_id,
        "client-1"
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_order_bad_request_keeps_body() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", ORDERS_PATH)
        .with_status(400)
        .with_body(r#"{"error": "INVALID_ARGUMENT", "message": "bad product"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let order = OrderRequest::market_sell("NOPE-USD", dec!(1));
    let err = client.create_order(&order).await.unwrap_err();

    match err {
        RestError::StatusNotOk { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("bad product"));
        }
        other => panic!("Expected StatusNotOk, got {:?}", other),
    }
}

// =============================================================================
// Transport failures
// =============================================================================

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Port 1 is reserved and nothing listens there
    let client = client_for("http://127.0.0.1:1");
    let err = client.list_accounts().await.unwrap_err();

    assert!(matches!(err, RestError::Transport(_)));
    assert!(err.to_string().starts_with("error making request"));
}
