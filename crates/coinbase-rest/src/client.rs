//! Main REST client implementation

use coinbase_auth::Credentials;
use reqwest::Url;
use std::time::Duration;
use tracing::info;

use crate::auth::AuthTransport;
use crate::endpoints::{AccountEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::{HttpSend, ReqwestTransport};
use crate::types::{Accounts, AccountsQuery, Order, OrderRequest};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com";

/// Environment variable overriding the API host
pub const BASE_URL_ENV: &str = "COINBASE_API_URL";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("coinbase-rest/", env!("CARGO_PKG_VERSION"));

/// Coinbase Advanced Trade REST client
///
/// Every request goes through an [`AuthTransport`], so all calls are signed.
///
/// # Example
///
/// ```no_run
/// use coinbase_rest::CoinbaseClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinbaseClient::from_env()?;
///     let accounts = client.list_accounts().await?;
///     for account in &accounts.accounts {
///         println!("{}: {}", account.currency, account.available_balance.value);
///     }
///     Ok(())
/// }
/// ```
pub struct CoinbaseClient<T = ReqwestTransport> {
    transport: AuthTransport<T>,
    base_url: String,
}

impl CoinbaseClient<ReqwestTransport> {
    /// Create a client for the production API
    ///
    /// # Errors
    /// Returns `RestError::Configuration` if the key or secret is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<[u8]>) -> RestResult<Self> {
        let credentials = Credentials::new(api_key, api_secret)?;
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client from environment variables
    ///
    /// Reads `COINBASE_API_KEY`, `COINBASE_API_SECRET` and, optionally,
    /// `COINBASE_API_URL`.
    pub fn from_env() -> RestResult<Self> {
        let credentials = Credentials::from_env()?;
        Self::with_config(credentials, ClientConfig::from_env())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs), user_agent)
            .map_err(|e| RestError::ClientBuild(e.to_string()))?;

        Self::with_transport(credentials, &config.base_url, transport)
    }
}

impl<T: HttpSend> CoinbaseClient<T> {
    /// Create a client that sends through the given transport
    pub fn with_transport(
        credentials: Credentials,
        base_url: &str,
        transport: T,
    ) -> RestResult<Self> {
        Url::parse(base_url)
            .map_err(|e| RestError::InvalidParameter(format!("invalid base URL: {}", e)))?;

        info!(base_url = %base_url, "Created Coinbase REST client");

        Ok(Self {
            transport: AuthTransport::with_credentials(credentials, transport),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the API host
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the authenticating transport
    pub fn transport(&self) -> &AuthTransport<T> {
        &self.transport
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn accounts(&self) -> AccountEndpoints<'_, T> {
        AccountEndpoints::new(&self.transport, &self.base_url)
    }

    /// List brokerage accounts (first page, server default size)
    pub async fn list_accounts(&self) -> RestResult<Accounts> {
        self.accounts().list_accounts(&AccountsQuery::default()).await
    }

    /// List one page of brokerage accounts
    pub async fn list_accounts_page(&self, query: &AccountsQuery) -> RestResult<Accounts> {
        self.accounts().list_accounts(query).await
    }

    // ========================================================================
    // Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_, T> {
        TradingEndpoints::new(&self.transport, &self.base_url)
    }

    /// Place a new order
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Order> {
        self.trading().create_order(order).await
    }
}

impl<T> std::fmt::Debug for CoinbaseClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, without the `/api/v3` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with `COINBASE_API_URL` applied if set
    ///
    /// A `.env` file is loaded first; variables already set in the process win.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Set the API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use coinbase_auth::AuthError;
    use serial_test::serial;

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:9000")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.user_agent.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:1");
        assert_eq!(ClientConfig::from_env().base_url, "http://127.0.0.1:1");

        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_config_from_env_prefers_process_variable() {
        std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:2");
        let first = ClientConfig::from_env();
        let second = ClientConfig::from_env();
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(first.base_url, "http://127.0.0.1:2");
        assert_eq!(second.base_url, first.base_url);
    }

    #[test]
    fn test_new_rejects_empty_secret() {
        let result = CoinbaseClient::new("k", "");
        assert!(matches!(
            result,
            Err(RestError::Configuration(AuthError::InvalidArguments))
        ));
    }

    #[test]
    fn test_new_with_valid_credentials() {
        let client = CoinbaseClient::new("k", "s").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.transport().api_key(), "k");
    }

    #[test]
    fn test_with_transport_rejects_bad_base_url() {
        let creds = Credentials::new("k", "s").unwrap();
        let result = CoinbaseClient::with_transport(creds, "::nope::", MockTransport::new());
        assert!(matches!(result, Err(RestError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_list_accounts_through_mock() {
        let creds = Credentials::new("k", "s").unwrap();
        let client =
            CoinbaseClient::with_transport(creds, "https://example.test/", MockTransport::new())
                .unwrap();
        client.transport().inner().push_response(200, r#"{"accounts": []}"#);

        let accounts = client.list_accounts().await.unwrap();
        assert!(accounts.accounts.is_empty());

        let sent = client.transport().inner().take_requests();
        assert_eq!(
            sent[0].url.as_str(),
            "https://example.test/api/v3/brokerage/accounts"
        );
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = CoinbaseClient::new("visible-key", "hidden-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("hidden-secret"));
        assert!(!debug.contains("visible-key"));
    }
}
