// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Moralis Web3 Data API provider.
//!
//! Implements [`WalletDataProvider`] over the Moralis REST API: the
//! deep-index endpoint for EVM chains, the Solana gateway for SOL balances,
//! and `/web3/version` for the API version. The credential is sent as the
//! `X-API-Key` header on every request.
//!
//! The client performs no retries and sets no per-call timeout; a caller
//! wishing to bound latency configures it on the [`reqwest::Client`] passed
//! to the builder, or imposes an external timeout on the whole call chain.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{
    NativeBalanceParams, NftCollectionsParams, NftMetadataParams, NftOwnersParams,
    SolBalanceParams, TokenBalancesParams, WalletDataProvider, WalletNftsParams,
    WalletTransactionsParams,
};
use crate::errors::ProviderError;

/// Default base URL for the Moralis EVM API.
pub const DEFAULT_EVM_API_BASE: &str = "https://deep-index.moralis.io/api/v2.2";

/// Default base URL for the Moralis Solana gateway.
pub const DEFAULT_SOL_API_BASE: &str = "https://solana-gateway.moralis.io";

/// Header carrying the API credential.
const API_KEY_HEADER: &str = "X-API-Key";

/// Moralis-backed [`WalletDataProvider`].
///
/// # Example
///
/// ```rust,no_run
/// use walletscan::MoralisProvider;
///
/// # fn example() -> Result<(), walletscan::ProviderError> {
/// // Default production endpoints
/// let provider = MoralisProvider::new()?;
///
/// // Custom gateway (tests, self-hosted proxies)
/// let provider = MoralisProvider::builder()
///     .evm_base_url("http://localhost:8080/api/v2.2")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MoralisProvider {
    http: reqwest::Client,
    evm_base: String,
    sol_base: String,
}

/// Builder for [`MoralisProvider`].
#[derive(Debug, Clone)]
pub struct MoralisProviderBuilder {
    evm_base: String,
    sol_base: String,
    http: Option<reqwest::Client>,
}

impl Default for MoralisProviderBuilder {
    fn default() -> Self {
        Self {
            evm_base: DEFAULT_EVM_API_BASE.to_string(),
            sol_base: DEFAULT_SOL_API_BASE.to_string(),
            http: None,
        }
    }
}

impl MoralisProviderBuilder {
    /// Override the EVM API base URL.
    pub fn evm_base_url(mut self, url: impl Into<String>) -> Self {
        self.evm_base = url.into();
        self
    }

    /// Override the Solana gateway base URL.
    pub fn sol_base_url(mut self, url: impl Into<String>) -> Self {
        self.sol_base = url.into();
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, connection pools).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Validate the base URLs and build the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Url`] when a base URL does not parse.
    pub fn build(self) -> Result<MoralisProvider, ProviderError> {
        // Validate up front so per-request URL construction can't surprise.
        Url::parse(&self.evm_base)?;
        Url::parse(&self.sol_base)?;
        Ok(MoralisProvider {
            http: self.http.unwrap_or_default(),
            evm_base: self.evm_base.trim_end_matches('/').to_string(),
            sol_base: self.sol_base.trim_end_matches('/').to_string(),
        })
    }
}

impl MoralisProvider {
    /// Create a provider against the production Moralis endpoints.
    pub fn new() -> Result<Self, ProviderError> {
        Self::builder().build()
    }

    /// Start building a provider with custom endpoints or HTTP client.
    pub fn builder() -> MoralisProviderBuilder {
        MoralisProviderBuilder::default()
    }

    async fn get_json(
        &self,
        url: String,
        api_key: &str,
        query: &[(String, String)],
    ) -> Result<Value, ProviderError> {
        debug!(url = %url, "Dispatching Moralis request");
        let url = Url::parse(&url)?;
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ProviderError::api(
                status.as_u16(),
                extract_api_message(&body),
            ));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl WalletDataProvider for MoralisProvider {
    async fn get_native_balance(
        &self,
        api_key: &str,
        params: NativeBalanceParams,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/{}/balance", self.evm_base, params.address);
        let query = vec![("chain".to_string(), params.chain)];
        self.get_json(url, api_key, &query).await
    }

    async fn get_token_balances(
        &self,
        api_key: &str,
        params: TokenBalancesParams,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/{}/erc20", self.evm_base, params.address);
        let mut query = vec![("chain".to_string(), params.chain)];
        push_token_addresses(&mut query, params.token_addresses.as_deref());
        self.get_json(url, api_key, &query).await
    }

    async fn get_wallet_nfts(
        &self,
        api_key: &str,
        params: WalletNftsParams,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/{}/nft", self.evm_base, params.address);
        let mut query = vec![
            ("chain".to_string(), params.chain),
            ("format".to_string(), params.format),
            ("limit".to_string(), params.limit.to_string()),
            ("cursor".to_string(), params.cursor),
            (
                "normalizeMetadata".to_string(),
                params.normalize_metadata.to_string(),
            ),
        ];
        push_token_addresses(&mut query, params.token_addresses.as_deref());
        self.get_json(url, api_key, &query).await
    }

    async fn get_nft_metadata(
        &self,
        api_key: &str,
        params: NftMetadataParams,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/nft/{}/{}", self.evm_base, params.address, params.token_id);
        let query = vec![
            ("chain".to_string(), params.chain),
            ("format".to_string(), params.format),
            (
                "normalizeMetadata".to_string(),
                params.normalize_metadata.to_string(),
            ),
        ];
        self.get_json(url, api_key, &query).await
    }

    async fn get_nft_owners(
        &self,
        api_key: &str,
        params: NftOwnersParams,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/nft/{}/owners", self.evm_base, params.address);
        let query = vec![
            ("chain".to_string(), params.chain),
            ("format".to_string(), params.format),
            ("limit".to_string(), params.limit.to_string()),
            ("cursor".to_string(), params.cursor),
            (
                "normalizeMetadata".to_string(),
                params.normalize_metadata.to_string(),
            ),
        ];
        self.get_json(url, api_key, &query).await
    }

    async fn get_wallet_transactions(
        &self,
        api_key: &str,
        params: WalletTransactionsParams,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/{}", self.evm_base, params.address);
        let query = vec![
            ("chain".to_string(), params.chain),
            ("limit".to_string(), params.limit.to_string()),
            ("cursor".to_string(), params.cursor),
            (
                "include_internal_transactions".to_string(),
                params.include_internal.to_string(),
            ),
        ];
        self.get_json(url, api_key, &query).await
    }

    async fn get_nft_collections(
        &self,
        api_key: &str,
        params: NftCollectionsParams,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/{}/nft/collections", self.evm_base, params.address);
        let query = vec![
            ("chain".to_string(), params.chain),
            ("limit".to_string(), params.limit.to_string()),
            ("cursor".to_string(), params.cursor),
        ];
        self.get_json(url, api_key, &query).await
    }

    async fn get_sol_balance(
        &self,
        api_key: &str,
        params: SolBalanceParams,
    ) -> Result<Value, ProviderError> {
        let url = format!(
            "{}/account/{}/{}/balance",
            self.sol_base, params.network, params.address
        );
        self.get_json(url, api_key, &[]).await
    }

    async fn api_version(&self, api_key: &str) -> Result<Value, ProviderError> {
        let url = format!("{}/web3/version", self.evm_base);
        self.get_json(url, api_key, &[]).await
    }
}

/// Append an explicit token contract filter as indexed query pairs
/// (`token_addresses[0]=..&token_addresses[1]=..`), the encoding the vendor
/// expects for list parameters.
fn push_token_addresses(query: &mut Vec<(String, String)>, addresses: Option<&[String]>) {
    if let Some(addresses) = addresses {
        for (i, address) in addresses.iter().enumerate() {
            query.push((format!("token_addresses[{i}]"), address.clone()));
        }
    }
}

/// Pull the vendor's error detail out of a non-success response body.
///
/// Moralis errors carry a `{"message": "..."}` payload; anything else falls
/// back to the raw body text.
fn extract_api_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}
