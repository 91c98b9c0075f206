//! Types for Coinbase Advanced Trade REST requests and responses

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode an optional decimal that the API may send as `""`
fn empty_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// An amount of a currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// Amount
    pub value: Decimal,
    /// Currency code (e.g., "BTC", "USD")
    pub currency: String,
}

/// A brokerage account holding a single currency
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Account UUID
    pub uuid: String,
    /// Display name
    pub name: String,
    /// Currency held by this account
    pub currency: String,
    /// Balance available for trading
    pub available_balance: Money,
    /// Whether this is the primary account for its currency
    #[serde(default)]
    pub default: bool,
    /// Whether the account is active
    #[serde(default)]
    pub active: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
    /// Deletion time, if deleted
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Account type (e.g., "ACCOUNT_TYPE_CRYPTO")
    #[serde(rename = "type")]
    pub account_type: String,
    /// Whether the account is ready for use
    #[serde(default)]
    pub ready: bool,
    /// Amount on hold
    pub hold: Money,
}

/// One page of accounts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Accounts {
    /// Accounts on this page
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Whether another page exists
    #[serde(default)]
    pub has_next: bool,
    /// Cursor for the next page
    #[serde(default)]
    pub cursor: String,
    /// Number of accounts on this page
    #[serde(default)]
    pub size: i32,
}

impl Accounts {
    /// Find the account holding a currency
    pub fn by_currency(&self, currency: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.currency == currency)
    }

    /// Query for the page after this one, if any
    pub fn next_page(&self, limit: Option<u32>) -> Option<AccountsQuery> {
        if self.has_next && !self.cursor.is_empty() {
            Some(AccountsQuery {
                limit,
                cursor: Some(self.cursor.clone()),
            })
        } else {
            None
        }
    }
}

/// Query parameters for listing accounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountsQuery {
    /// Maximum accounts per page
    pub limit: Option<u32>,
    /// Cursor returned by a previous page
    pub cursor: Option<String>,
}

impl AccountsQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the cursor
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        pairs
    }
}

// ============================================================================
// Order Types
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy order
    #[serde(rename = "BUY")]
    Buy,
    /// Sell order
    #[serde(rename = "SELL")]
    Sell,
    /// Unknown side
    #[serde(rename = "UNKNOWN_ORDER_SIDE")]
    Unknown,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
            OrderSide::Unknown => write!(f, "UNKNOWN_ORDER_SIDE"),
        }
    }
}

/// Direction a stop price is crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopDirection {
    /// Triggers when the price rises to the stop price
    #[serde(rename = "STOP_DIRECTION_STOP_UP")]
    Up,
    /// Triggers when the price falls to the stop price
    #[serde(rename = "STOP_DIRECTION_STOP_DOWN")]
    Down,
    /// Unknown direction
    #[serde(rename = "UNKNOWN_STOP_DIRECTION")]
    Unknown,
}

/// Market order, immediate-or-cancel
///
/// Buys are sized in quote currency, sells in base currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketIoc {
    /// Amount of quote currency to spend
    #[serde(
        default,
        deserialize_with = "empty_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub quote_size: Option<Decimal>,
    /// Amount of base currency to sell
    #[serde(
        default,
        deserialize_with = "empty_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_size: Option<Decimal>,
}

/// Limit order, good-til-cancelled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitGtc {
    /// Amount of base currency
    pub base_size: Decimal,
    /// Limit price
    pub limit_price: Decimal,
    /// Reject the order if it would take liquidity
    #[serde(default)]
    pub post_only: bool,
}

/// Limit order, good-til-date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitGtd {
    /// Amount of base currency
    pub base_size: Decimal,
    /// Limit price
    pub limit_price: Decimal,
    /// Expiry time
    pub end_time: DateTime<Utc>,
    /// Reject the order if it would take liquidity
    #[serde(default)]
    pub post_only: bool,
}

/// Stop-limit order, good-til-cancelled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopLimitGtc {
    /// Amount of base currency
    pub base_size: Decimal,
    /// Limit price once triggered
    pub limit_price: Decimal,
    /// Trigger price
    pub stop_price: Decimal,
    /// Trigger direction
    pub stop_direction: StopDirection,
}

/// Stop-limit order, good-til-date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopLimitGtd {
    /// Amount of base currency
    pub base_size: Decimal,
    /// Limit price once triggered
    pub limit_price: Decimal,
    /// Trigger price
    pub stop_price: Decimal,
    /// Trigger direction
    pub stop_direction: StopDirection,
    /// Expiry time
    pub end_time: DateTime<Utc>,
}

/// Order configuration
///
/// Exactly one field should be set; the constructors take care of that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Market IOC
    #[serde(
        rename = "market_market_ioc",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub market_ioc: Option<MarketIoc>,
    /// Limit GTC
    #[serde(
        rename = "limit_limit_gtc",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub limit_gtc: Option<LimitGtc>,
    /// Limit GTD
    #[serde(
        rename = "limit_limit_gtd",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub limit_gtd: Option<LimitGtd>,
    /// Stop-limit GTC
    #[serde(
        rename = "stop_limit_stop_limit_gtc",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_limit_gtc: Option<StopLimitGtc>,
    /// Stop-limit GTD
    #[serde(
        rename = "stop_limit_stop_limit_gtd",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_limit_gtd: Option<StopLimitGtd>,
}

impl OrderConfig {
    /// Market IOC configuration
    pub fn market_ioc(config: MarketIoc) -> Self {
        Self {
            market_ioc: Some(config),
            ..Default::default()
        }
    }

    /// Limit GTC configuration
    pub fn limit_gtc(config: LimitGtc) -> Self {
        Self {
            limit_gtc: Some(config),
            ..Default::default()
        }
    }

    /// Limit GTD configuration
    pub fn limit_gtd(config: LimitGtd) -> Self {
        Self {
            limit_gtd: Some(config),
            ..Default::default()
        }
    }

    /// Stop-limit GTC configuration
    pub fn stop_limit_gtc(config: StopLimitGtc) -> Self {
        Self {
            stop_limit_gtc: Some(config),
            ..Default::default()
        }
    }

    /// Stop-limit GTD configuration
    pub fn stop_limit_gtd(config: StopLimitGtd) -> Self {
        Self {
            stop_limit_gtd: Some(config),
            ..Default::default()
        }
    }
}

/// Request body for creating an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    /// Caller-chosen unique ID, used by Coinbase to deduplicate
    pub client_order_id: String,
    /// Product (e.g., "BTC-USD")
    pub product_id: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Order type and sizing
    #[serde(rename = "order_configuration")]
    pub configuration: OrderConfig,
}

impl OrderRequest {
    /// Create an order request with a fresh client order ID
    pub fn new(product_id: impl Into<String>, side: OrderSide, configuration: OrderConfig) -> Self {
        Self {
            client_order_id: uuid::Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            side,
            configuration,
        }
    }

    /// Market buy spending `quote_size` of the quote currency
    pub fn market_buy(product_id: impl Into<String>, quote_size: Decimal) -> Self {
        Self::new(
            product_id,
            OrderSide::Buy,
            OrderConfig::market_ioc(MarketIoc {
                quote_size: Some(quote_size),
                base_size: None,
            }),
        )
    }

    /// Market sell of `base_size` of the base currency
    pub fn market_sell(product_id: impl Into<String>, base_size: Decimal) -> Self {
        Self::new(
            product_id,
            OrderSide::Sell,
            OrderConfig::market_ioc(MarketIoc {
                quote_size: None,
                base_size: Some(base_size),
            }),
        )
    }

    /// Good-til-cancelled limit order
    pub fn limit_gtc(
        product_id: impl Into<String>,
        side: OrderSide,
        base_size: Decimal,
        limit_price: Decimal,
    ) -> Self {
        Self::new(
            product_id,
            side,
            OrderConfig::limit_gtc(LimitGtc {
                base_size,
                limit_price,
                post_only: false,
            }),
        )
    }

    /// Replace the generated client order ID
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = id.into();
        self
    }
}

/// Details of an accepted order
#[derive(Debug, Clone, Deserialize)]
pub struct SuccessResponse {
    /// Exchange order ID
    pub order_id: String,
    /// Product
    #[serde(default)]
    pub product_id: String,
    /// Side
    #[serde(default)]
    pub side: Option<OrderSide>,
    /// Echo of the client order ID
    #[serde(default)]
    pub client_order_id: String,
}

/// Details of a rejected order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    #[serde(default)]
    pub error: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Additional details
    #[serde(default)]
    pub error_details: String,
    /// Preview failure reason
    #[serde(default)]
    pub preview_failure_reason: String,
    /// New-order failure reason
    #[serde(default)]
    pub new_order_failure_reason: String,
}

/// Response from creating an order
///
/// A 200 response can still carry `success: false`; check [`Order::is_success`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Order {
    /// Whether the order was accepted
    #[serde(default)]
    pub success: bool,
    /// Failure reason, when rejected
    #[serde(default)]
    pub failure_reason: String,
    /// Exchange order ID
    #[serde(default)]
    pub order_id: String,
    /// Details when accepted
    #[serde(default)]
    pub success_response: Option<SuccessResponse>,
    /// Details when rejected
    #[serde(default)]
    pub error_response: Option<ErrorResponse>,
    /// Echo of the order configuration
    #[serde(default)]
    pub order_configuration: Option<OrderConfig>,
}

impl Order {
    /// Check if the order was accepted
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Best available explanation for a rejection
    pub fn failure_message(&self) -> Option<&str> {
        if self.success {
            return None;
        }
        let from_error = self.error_response.as_ref().and_then(|e| {
            [&e.message, &e.error_details, &e.error]
                .into_iter()
                .find(|s| !s.is_empty())
                .map(String::as_str)
        });
        from_error.or(Some(self.failure_reason.as_str()))
    }
}
