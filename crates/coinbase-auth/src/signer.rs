//! HMAC-SHA256 request signing for the Coinbase Advanced Trade API
//!
//! Coinbase signature algorithm:
//! 1. message = timestamp + method + request_path + body (no separators)
//! 2. HMAC-SHA256(api_secret, message)
//! 3. Lowercase hex encode the digest
//!
//! `request_path` is the URL path with `?` and the raw query appended only
//! when a query string is present.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded SHA-256 signature
pub const SIGNATURE_LEN: usize = 64;

/// Build the exact bytes that get signed for a request
///
/// The four components are concatenated in order with nothing between them.
/// An absent body is passed as an empty slice.
pub fn signature_material(
    timestamp: &str,
    method: &str,
    path_with_query: &str,
    body: &[u8],
) -> Vec<u8> {
    let mut message =
        Vec::with_capacity(timestamp.len() + method.len() + path_with_query.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(method.as_bytes());
    message.extend_from_slice(path_with_query.as_bytes());
    message.extend_from_slice(body);
    message
}

/// Sign a request
///
/// # Arguments
/// * `secret` - API secret used as the HMAC key
/// * `method` - HTTP method (e.g., "GET", "POST")
/// * `path_with_query` - Request path, see [`path_with_query`]
/// * `body` - Raw request body bytes (empty when the request has none)
/// * `timestamp` - Unix time in whole seconds, as a decimal string
///
/// # Returns
/// Lowercase hex HMAC-SHA256 digest, always [`SIGNATURE_LEN`] characters
pub fn sign(
    secret: &[u8],
    method: &str,
    path_with_query: &str,
    body: &[u8],
    timestamp: &str,
) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(&signature_material(timestamp, method, path_with_query, body));
    hex::encode(mac.finalize().into_bytes())
}

/// Join a path and an optional raw query string the way Coinbase expects
pub fn path_with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}

/// Current Unix time in whole seconds, formatted as a decimal string
pub fn unix_timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// Request signer bound to a single timestamp
///
/// The timestamp is captured once so the value that gets signed is the same
/// string that ends up in the `cb-access-timestamp` header.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer stamped with the current time
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::at(credentials, unix_timestamp())
    }

    /// Create a request signer with a fixed timestamp
    pub fn at(credentials: &'a Credentials, timestamp: impl Into<String>) -> Self {
        Self {
            credentials,
            timestamp: timestamp.into(),
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request
    pub fn sign(&self, method: &str, path_with_query: &str, body: &[u8]) -> String {
        self.credentials
            .sign(method, path_with_query, body, &self.timestamp)
    }
}
