//! Error types for authentication operations

/// Errors that can occur while setting up authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// API key or secret was empty
    #[error("invalid auth arguments")]
    InvalidArguments,

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
