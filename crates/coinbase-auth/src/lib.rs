//! Credentials and request signing for the Coinbase Advanced Trade API
//!
//! Every private REST call carries three headers:
//!
//! | Header | Value |
//! |---|---|
//! | `cb-access-key` | the API key |
//! | `cb-access-sign` | lowercase hex HMAC-SHA256 signature |
//! | `cb-access-timestamp` | Unix seconds, matching the signed timestamp |
//!
//! This crate builds the signature; `coinbase-rest` attaches the headers.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     // Stamp a timestamp and sign a request
//!     let signer = RequestSigner::new(&creds);
//!     let signature = signer.sign("GET", "/api/v3/brokerage/accounts", b"");
//!     println!("{} {}", signer.timestamp(), signature);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
pub mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{path_with_query, sign, signature_material, unix_timestamp, RequestSigner};
