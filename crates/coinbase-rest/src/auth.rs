//! Authenticating transport wrapper
//!
//! Every request that goes through [`AuthTransport::send`] is signed and gets
//! three headers appended before it is handed to the inner transport:
//!
//! | Header | Value |
//! |---|---|
//! | `cb-access-key` | the API key |
//! | `cb-access-sign` | HMAC-SHA256 signature, lowercase hex |
//! | `cb-access-timestamp` | Unix seconds used in the signature |
//!
//! The wrapper holds nothing but immutable credentials and the inner
//! transport, so one instance can serve any number of concurrent requests.

use coinbase_auth::{path_with_query, Credentials, RequestSigner};
use reqwest::header::HeaderValue;
use reqwest::{Request, Response};
use tracing::{debug, instrument, warn};

use crate::error::{RestError, RestResult};
use crate::transport::HttpSend;

/// API key header
pub const CB_ACCESS_KEY: &str = "cb-access-key";
/// Signature header
pub const CB_ACCESS_SIGN: &str = "cb-access-sign";
/// Timestamp header
pub const CB_ACCESS_TIMESTAMP: &str = "cb-access-timestamp";

/// Signs outbound requests and delegates them to an inner transport
pub struct AuthTransport<T> {
    credentials: Credentials,
    inner: T,
}

impl<T: HttpSend> AuthTransport<T> {
    /// Create a wrapper from a raw key and secret
    ///
    /// # Errors
    /// Returns `RestError::Configuration` if either value is empty.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl AsRef<[u8]>,
        inner: T,
    ) -> RestResult<Self> {
        let credentials = Credentials::new(api_key, api_secret)?;
        Ok(Self::with_credentials(credentials, inner))
    }

    /// Create a wrapper from already validated credentials
    pub fn with_credentials(credentials: Credentials, inner: T) -> Self {
        Self { credentials, inner }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the inner transport
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Sign a request with the current time and attach the auth headers
    pub fn authenticate(&self, request: Request) -> RestResult<Request> {
        self.authenticate_with(request, &RequestSigner::new(&self.credentials))
    }

    /// Sign a request with a fixed timestamp and attach the auth headers
    pub fn authenticate_at(&self, request: Request, timestamp: &str) -> RestResult<Request> {
        self.authenticate_with(request, &RequestSigner::at(&self.credentials, timestamp))
    }

    fn authenticate_with(
        &self,
        mut request: Request,
        signer: &RequestSigner<'_>,
    ) -> RestResult<Request> {
        // Buffered bodies are borrowed, not drained, so the request still
        // carries its full body afterwards.
        let body: &[u8] = match request.body() {
            None => &[],
            Some(body) => body.as_bytes().ok_or_else(|| {
                RestError::InvalidParameter("streaming request body cannot be signed".into())
            })?,
        };

        let path = path_with_query(request.url().path(), request.url().query());
        let signature = signer.sign(request.method().as_str(), &path, body);

        let key = HeaderValue::from_str(signer.api_key())
            .map_err(|e| RestError::InvalidCredentials(e.to_string()))?;
        let sign = HeaderValue::from_str(&signature)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        let timestamp = HeaderValue::from_str(signer.timestamp())
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        let headers = request.headers_mut();
        headers.append(CB_ACCESS_KEY, key);
        headers.append(CB_ACCESS_SIGN, sign);
        headers.append(CB_ACCESS_TIMESTAMP, timestamp);

        Ok(request)
    }

    /// Sign the request and send it through the inner transport
    ///
    /// Exactly one attempt is made. Transport failures come back as
    /// `RestError::Transport`; the response is returned untouched whatever
    /// its status.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.url().path()))]
    pub async fn send(&self, request: Request) -> RestResult<Response> {
        let request = self.authenticate(request)?;

        debug!("Sending authenticated request");

        self.inner.send(request).await.map_err(|e| {
            warn!(error = %e, "Request failed");
            RestError::Transport(e)
        })
    }
}

impl<T> std::fmt::Debug for AuthTransport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTransport")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
