//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request};
use tracing::{debug, instrument};

use super::{endpoint_url, read_json};
use crate::auth::AuthTransport;
use crate::error::{RestError, RestResult};
use crate::transport::HttpSend;
use crate::types::{Order, OrderRequest};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a, T> {
    transport: &'a AuthTransport<T>,
    base_url: &'a str,
}

impl<'a, T: HttpSend> TradingEndpoints<'a, T> {
    pub fn new(transport: &'a AuthTransport<T>, base_url: &'a str) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// Create an order
    ///
    /// Order fields are not validated locally; Coinbase reports problems in
    /// the returned `Order` or as a non-200 status.
    ///
    /// <https://docs.cloud.coinbase.com/advanced-trade-api/reference/retailbrokerageapi_postorder>
    #[instrument(skip(self, order), fields(product = %order.product_id, side = %order.side))]
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Order> {
        let url = endpoint_url(self.base_url, "/orders")?;
        let body =
            serde_json::to_vec(order).map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        let mut request = Request::new(Method::POST, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(body.into());

        debug!(client_order_id = %order.client_order_id, "Placing order");

        let response = self.transport.send(request).await?;
        let result: Order = read_json(response).await?;

        debug!(success = result.success, order_id = %result.order_id, "Order response");
        Ok(result)
    }
}
