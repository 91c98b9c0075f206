//! Error types for REST API operations

use coinbase_auth::AuthError;

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Client could not be configured (empty key/secret, missing env var)
    #[error("failed to create client: {0}")]
    Configuration(#[from] AuthError),

    /// The underlying transport failed to deliver the request
    #[error("error making request: {0}")]
    Transport(#[from] TransportError),

    /// Credentials cannot be encoded into request headers
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// API answered with a status other than 200 OK
    #[error("status not OK: unexpected status code: {status}, body: {body}")]
    StatusNotOk {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response arrived but its body could not be read
    #[error("failed to read response body: {0}")]
    ResponseBody(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// HTTP client could not be built
    #[error("HTTP client build error: {0}")]
    ClientBuild(String),
}

impl RestError {
    /// Check if this error is worth retrying
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(TransportError::Timeout | TransportError::ConnectionFailed(_)) => true,
            Self::StatusNotOk { status, .. } => *status == 429 || *status >= 500,
            Self::ResponseBody(_) => true,
            _ => false,
        }
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::StatusNotOk { status: 429, .. })
    }

    /// Check if the API rejected the request as unauthenticated
    ///
    /// Bad keys or a skewed clock only show up here, as the wrapper cannot
    /// validate credentials locally.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::StatusNotOk { status: 401 | 403, .. })
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
