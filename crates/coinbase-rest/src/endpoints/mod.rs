//! API endpoint implementations

pub mod account;
pub mod trading;

pub use account::AccountEndpoints;
pub use trading::TradingEndpoints;

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{RestError, RestResult};

/// Path prefix shared by all brokerage endpoints
pub const API_PREFIX: &str = "/api/v3/brokerage";

/// Build the full URL for a brokerage endpoint
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> RestResult<Url> {
    let full = format!("{}{}{}", base_url.trim_end_matches('/'), API_PREFIX, path);
    Url::parse(&full).map_err(|e| RestError::InvalidParameter(format!("invalid URL {}: {}", full, e)))
}

/// Decode a JSON body, turning anything but 200 OK into `StatusNotOk`
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> RestResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(body_read_error)?;

    if status != StatusCode::OK {
        warn!(status = status.as_u16(), "Unexpected status code");
        return Err(RestError::StatusNotOk {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!(error = %e, "Failed to parse response");
        RestError::Parse(e.to_string())
    })
}

fn body_read_error(err: reqwest::Error) -> RestError {
    warn!(error = %err, "Failed to read response body");
    RestError::ResponseBody(err.to_string())
}
