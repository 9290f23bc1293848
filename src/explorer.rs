use async_trait::async_trait;
use reqwest::Client;

use crate::chain::BalanceSource;
use crate::errors::ExplorerError;
use crate::types::TokenBalance;

pub const PULSECHAIN_API: &str = "https://api.scan.pulsechain.com";

/// Blockscout v2 REST client
pub struct ExplorerClient {
    client: Client,
    api_base: String,
}

impl ExplorerClient {
    pub fn new(api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn new_pulsechain() -> Self {
        Self::new(PULSECHAIN_API.to_string())
    }

    /// The address goes into the path as given; it is not validated.
    pub fn token_balances_url(&self, address: &str) -> String {
        format!(
            "{}/api/v2/addresses/{}/token-balances",
            self.api_base, address
        )
    }
}

/// Decode a `token-balances` response body. `status` is only used for the
/// error message.
///
/// A `null` body decodes as no balances and a `null` entry as an empty
/// balance, which the table then drops as unnamed.
pub fn decode_token_balances(body: &[u8], status: u16) -> Result<Vec<TokenBalance>, ExplorerError> {
    let entries: Option<Vec<Option<TokenBalance>>> =
        serde_json::from_slice(body).map_err(|source| ExplorerError::Decode { status, source })?;

    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[async_trait]
impl BalanceSource for ExplorerClient {
    async fn get_token_balances(&self, address: &str) -> Result<Vec<TokenBalance>, ExplorerError> {
        let url = self.token_balances_url(address);
        tracing::debug!(%url, "requesting token balances");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ExplorerError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(%status, "explorer responded");

        let body = response.bytes().await.map_err(ExplorerError::Body)?;
        let balances = decode_token_balances(&body, status.as_u16())?;
        tracing::info!(count = balances.len(), "token balances decoded");

        Ok(balances)
    }
}
