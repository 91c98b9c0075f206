//! HTTP transport abstraction
//!
//! The authenticating wrapper never talks to the network itself; it hands the
//! finished request to an [`HttpSend`] implementation. Production code uses
//! [`ReqwestTransport`]; tests can inject [`MockTransport`].

use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection could not be established
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Request failed after the connection was made
    #[error("send failed: {0}")]
    SendFailed(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed(err.to_string())
        } else {
            TransportError::SendFailed(err.to_string())
        }
    }
}

/// Sends a fully built request and returns the raw response
///
/// Implementations perform exactly one attempt per call.
#[async_trait]
pub trait HttpSend: Send + Sync {
    /// Send the request
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

#[async_trait]
impl<T: HttpSend + ?Sized> HttpSend for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        (**self).send(request).await
    }
}

/// Real transport backed by `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        Ok(self.client.execute(request).await?)
    }
}

/// A request captured by [`MockTransport`]
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: reqwest::Method,
    /// Full URL
    pub url: reqwest::Url,
    /// Headers as sent
    pub headers: reqwest::header::HeaderMap,
    /// Body bytes, `None` when the request had no body
    pub body: Option<Vec<u8>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordedRequest {
    /// All values of a header, in insertion order
    pub fn header_values(&self, name: &str) -> Vec<String> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect()
    }

    /// First value of a header
    pub fn header(&self, name: &str) -> Option<String> {
        self.header_values(name).into_iter().next()
    }
}

/// Mock transport for testing
///
/// Records every request and answers with queued responses.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<(u16, String), TransportError>>>,
    requests: parking_lot::Mutex<Vec<RecordedRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().push_back(Ok((status, body.into())));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Take and clear the recorded requests
    pub fn take_requests(&self) -> Vec<RecordedRequest> {
        std::mem::take(&mut *self.requests.lock())
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl HttpSend for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let body = request
            .body()
            .and_then(|b| b.as_bytes())
            .map(|b| b.to_vec());

        self.requests.lock().push(RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body,
        });

        let next = self.responses.lock().pop_front();
        let (status, body) = next.unwrap_or_else(|| {
            Err(TransportError::ConnectionFailed(
                "no mock response queued".into(),
            ))
        })?;

        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .map(Response::from)
            .map_err(|e| TransportError::SendFailed(e.to_string()))
    }
}
