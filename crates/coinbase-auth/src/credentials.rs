//! API credentials for the Coinbase Advanced Trade API
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! `Credentials` deliberately implements no serde traits.

use secrecy::{ExposeSecret, SecretBox};

use crate::error::{AuthError, AuthResult};
use crate::signer;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "COINBASE_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "COINBASE_API_SECRET";

/// API credentials for authenticated requests
///
/// Immutable once built. The secret is zeroized when the Credentials are
/// dropped.
pub struct Credentials {
    /// API key (sent as `cb-access-key`)
    api_key: String,
    /// API secret (HMAC key, zeroized on drop)
    api_secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Errors
    /// Returns `AuthError::InvalidArguments` if either value is empty. No
    /// other checks are made on the key or secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<[u8]>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.as_ref();

        if api_key.is_empty() || api_secret.is_empty() {
            return Err(AuthError::InvalidArguments);
        }

        Ok(Self {
            api_key,
            api_secret: SecretBox::new(Box::new(api_secret.to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINBASE_API_KEY` and `COINBASE_API_SECRET`, loading a `.env`
    /// file first if one is present.
    pub fn from_env() -> AuthResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request with this secret
    ///
    /// See [`signer::sign`] for the message layout.
    pub fn sign(&self, method: &str, path_with_query: &str, body: &[u8], timestamp: &str) -> String {
        signer::sign(
            self.api_secret.expose_secret(),
            method,
            path_with_query,
            body,
            timestamp,
        )
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(4).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
