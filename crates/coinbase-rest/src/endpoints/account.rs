//! Private account endpoints
//!
//! These endpoints require authentication.

use reqwest::{Method, Request};
use tracing::{debug, instrument};

use super::{endpoint_url, read_json};
use crate::auth::AuthTransport;
use crate::error::RestResult;
use crate::transport::HttpSend;
use crate::types::{Accounts, AccountsQuery};

/// Private account endpoints
pub struct AccountEndpoints<'a, T> {
    transport: &'a AuthTransport<T>,
    base_url: &'a str,
}

impl<'a, T: HttpSend> AccountEndpoints<'a, T> {
    pub fn new(transport: &'a AuthTransport<T>, base_url: &'a str) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// List brokerage accounts
    ///
    /// Returns a single page; follow `Accounts::next_page` to fetch more.
    ///
    /// <https://docs.cloud.coinbase.com/advanced-trade-api/reference/retailbrokerageapi_getaccounts>
    #[instrument(skip(self), fields(limit = ?query.limit))]
    pub async fn list_accounts(&self, query: &AccountsQuery) -> RestResult<Accounts> {
        let mut url = endpoint_url(self.base_url, "/accounts")?;

        let pairs = query.to_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }

        debug!("Listing accounts");

        let response = self.transport.send(Request::new(Method::GET, url)).await?;
        let accounts: Accounts = read_json(response).await?;

        debug!(count = accounts.accounts.len(), has_next = accounts.has_next, "Got accounts");
        Ok(accounts)
    }
}
