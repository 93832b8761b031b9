// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for walletscan integration tests
//!
//! Provides a programmable [`WalletDataProvider`] implementation so the
//! query wrappers and the aggregator can be exercised without network
//! access.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use walletscan::provider::{
    NativeBalanceParams, NftCollectionsParams, NftMetadataParams, NftOwnersParams,
    SolBalanceParams, TokenBalancesParams, WalletDataProvider, WalletNftsParams,
    WalletTransactionsParams,
};
use walletscan::ProviderError;

/// A programmed outcome: a payload, or a failure message.
type Programmed = Result<Value, String>;

/// Install a fmt subscriber honoring `RUST_LOG`, once per test binary, so
/// the query wrappers' tracing events show up in test output when wanted.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Mock WalletDataProvider for testing wrapper and aggregator logic.
///
/// Native balance responses are keyed by chain so cross-chain tests can make
/// individual chains succeed or fail; every other endpoint is keyed by name.
/// Unprogrammed calls fail, which conveniently exercises the degradation
/// path.
///
/// # Example
///
/// ```rust,ignore
/// let provider = MockProvider::new()
///     .with_native_balance("eth", "1000000000000000000")
///     .with_native_failure("bsc", "chain offline")
///     .with_response("sol_balance", json!({"lamports": "0", "solana": "0"}));
/// ```
pub struct MockProvider {
    native: Mutex<HashMap<String, Programmed>>,
    responses: Mutex<HashMap<&'static str, Programmed>>,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            native: Mutex::new(HashMap::new()),
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Program a successful native balance for a chain.
    pub fn with_native_balance(self, chain: &str, raw_balance: &str) -> Self {
        self.with_native_payload(chain, json!({ "balance": raw_balance }))
    }

    /// Program an arbitrary native-balance payload for a chain (for
    /// missing-field and wrong-shape tests).
    pub fn with_native_payload(self, chain: &str, payload: Value) -> Self {
        self.native
            .lock()
            .unwrap()
            .insert(chain.to_string(), Ok(payload));
        self
    }

    /// Program a native balance failure for a chain.
    pub fn with_native_failure(self, chain: &str, message: &str) -> Self {
        self.native
            .lock()
            .unwrap()
            .insert(chain.to_string(), Err(message.to_string()));
        self
    }

    /// Program a successful payload for a non-native endpoint.
    pub fn with_response(self, endpoint: &'static str, payload: Value) -> Self {
        self.responses.lock().unwrap().insert(endpoint, Ok(payload));
        self
    }

    /// Program a failure for a non-native endpoint.
    pub fn with_failure(self, endpoint: &'static str, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint, Err(message.to_string()));
        self
    }

    /// Endpoint invocations recorded so far, in call order.
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn respond(&self, endpoint: &'static str) -> Result<Value, ProviderError> {
        match self.responses.lock().unwrap().get(endpoint) {
            Some(Ok(payload)) => Ok(payload.clone()),
            Some(Err(message)) => Err(ProviderError::api(500, message.clone())),
            None => Err(ProviderError::api(
                599,
                format!("no response programmed for {endpoint}"),
            )),
        }
    }
}

#[async_trait]
impl WalletDataProvider for MockProvider {
    async fn get_native_balance(
        &self,
        _api_key: &str,
        params: NativeBalanceParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!("native_balance:{}", params.chain));
        match self.native.lock().unwrap().get(&params.chain) {
            Some(Ok(payload)) => Ok(payload.clone()),
            Some(Err(message)) => Err(ProviderError::api(500, message.clone())),
            None => Err(ProviderError::api(
                599,
                format!("no response programmed for chain {}", params.chain),
            )),
        }
    }

    async fn get_token_balances(
        &self,
        _api_key: &str,
        params: TokenBalancesParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!(
            "token_balances:{}:{:?}",
            params.chain, params.token_addresses
        ));
        self.respond("token_balances")
    }

    async fn get_wallet_nfts(
        &self,
        _api_key: &str,
        params: WalletNftsParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!(
            "wallet_nfts:{}:limit={}:cursor={}:format={}:normalize={}",
            params.chain, params.limit, params.cursor, params.format, params.normalize_metadata
        ));
        self.respond("wallet_nfts")
    }

    async fn get_nft_metadata(
        &self,
        _api_key: &str,
        params: NftMetadataParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!(
            "nft_metadata:{}:{}:{}",
            params.chain, params.address, params.token_id
        ));
        self.respond("nft_metadata")
    }

    async fn get_nft_owners(
        &self,
        _api_key: &str,
        params: NftOwnersParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!("nft_owners:{}:{}", params.chain, params.address));
        self.respond("nft_owners")
    }

    async fn get_wallet_transactions(
        &self,
        _api_key: &str,
        params: WalletTransactionsParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!(
            "wallet_transactions:{}:internal={}",
            params.chain, params.include_internal
        ));
        self.respond("wallet_transactions")
    }

    async fn get_nft_collections(
        &self,
        _api_key: &str,
        params: NftCollectionsParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!("nft_collections:{}", params.chain));
        self.respond("nft_collections")
    }

    async fn get_sol_balance(
        &self,
        _api_key: &str,
        params: SolBalanceParams,
    ) -> Result<Value, ProviderError> {
        self.record(format!("sol_balance:{}", params.network));
        self.respond("sol_balance")
    }

    async fn api_version(&self, _api_key: &str) -> Result<Value, ProviderError> {
        self.record("api_version".to_string());
        self.respond("api_version")
    }
}
