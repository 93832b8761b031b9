// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The external data-provider boundary.
//!
//! Everything walletscan knows about the outside world goes through the
//! [`WalletDataProvider`] trait: one method per vendor capability, each
//! taking a credential plus a structured parameter record and returning the
//! provider's raw JSON payload. The trait is object-safe, so providers are
//! pluggable at runtime (`Box<dyn WalletDataProvider>`) and trivially
//! mockable in tests.
//!
//! The shipped implementation is [`MoralisProvider`], a `reqwest` client for
//! the Moralis Web3 Data API. Implement the trait yourself to target a
//! different indexer or to interpose recording/replay layers.
//!
//! Parameter records mirror the vendor's query parameters exactly, including
//! the always-sent empty pagination cursor - the reshaping layer above owns
//! defaults and response post-processing, not this boundary.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ProviderError;

mod moralis;

pub use moralis::{
    MoralisProvider, MoralisProviderBuilder, DEFAULT_EVM_API_BASE, DEFAULT_SOL_API_BASE,
};

/// Parameters for a native coin balance query.
#[derive(Debug, Clone)]
pub struct NativeBalanceParams {
    /// Wallet address to query.
    pub address: String,
    /// Chain identifier (e.g. `"eth"`).
    pub chain: String,
}

/// Parameters for a fungible token balance query.
#[derive(Debug, Clone)]
pub struct TokenBalancesParams {
    /// Wallet address to query.
    pub address: String,
    /// Chain identifier.
    pub chain: String,
    /// Optional explicit token contract filter; `None` means all tokens.
    pub token_addresses: Option<Vec<String>>,
}

/// Parameters for a wallet NFT holdings query.
#[derive(Debug, Clone)]
pub struct WalletNftsParams {
    /// Wallet address to query.
    pub address: String,
    /// Chain identifier.
    pub chain: String,
    /// Token-id rendering, `"decimal"` or `"hex"`.
    pub format: String,
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Opaque pagination cursor; empty for the first page.
    pub cursor: String,
    /// Whether the vendor should normalize NFT metadata.
    pub normalize_metadata: bool,
    /// Optional NFT contract filter.
    pub token_addresses: Option<Vec<String>>,
}

/// Parameters for a single-NFT metadata query.
#[derive(Debug, Clone)]
pub struct NftMetadataParams {
    /// NFT contract address.
    pub address: String,
    /// Token id within the contract.
    pub token_id: String,
    /// Chain identifier.
    pub chain: String,
    /// Token-id rendering, `"decimal"` or `"hex"`.
    pub format: String,
    /// Whether the vendor should normalize NFT metadata.
    pub normalize_metadata: bool,
}

/// Parameters for an NFT contract owners query.
#[derive(Debug, Clone)]
pub struct NftOwnersParams {
    /// NFT contract address.
    pub address: String,
    /// Chain identifier.
    pub chain: String,
    /// Token-id rendering, `"decimal"` or `"hex"`.
    pub format: String,
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Opaque pagination cursor; empty for the first page.
    pub cursor: String,
    /// Whether the vendor should normalize NFT metadata.
    pub normalize_metadata: bool,
}

/// Parameters for a wallet transaction history query.
#[derive(Debug, Clone)]
pub struct WalletTransactionsParams {
    /// Wallet address to query.
    pub address: String,
    /// Chain identifier.
    pub chain: String,
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Opaque pagination cursor; empty for the first page.
    pub cursor: String,
    /// Whether to include internal transactions.
    pub include_internal: bool,
}

/// Parameters for a wallet NFT-collection summary query.
#[derive(Debug, Clone)]
pub struct NftCollectionsParams {
    /// Wallet address to query.
    pub address: String,
    /// Chain identifier.
    pub chain: String,
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Opaque pagination cursor; empty for the first page.
    pub cursor: String,
}

/// Parameters for a Solana native balance query.
#[derive(Debug, Clone)]
pub struct SolBalanceParams {
    /// Solana wallet address (base58).
    pub address: String,
    /// Network name, `"mainnet"` or `"devnet"`.
    pub network: String,
}

/// Capability set of a wallet-data provider.
///
/// Each method performs one vendor call and returns the raw JSON payload on
/// success. Implementations should not retry, cache, or reshape; those
/// concerns live elsewhere (retrying deliberately nowhere - see the crate
/// docs for the error-absorption contract).
#[async_trait]
pub trait WalletDataProvider: Send + Sync {
    /// Native coin balance of an address.
    async fn get_native_balance(
        &self,
        api_key: &str,
        params: NativeBalanceParams,
    ) -> Result<Value, ProviderError>;

    /// Fungible token balances held by an address.
    async fn get_token_balances(
        &self,
        api_key: &str,
        params: TokenBalancesParams,
    ) -> Result<Value, ProviderError>;

    /// NFTs owned by a wallet address (cursor-paginated).
    async fn get_wallet_nfts(
        &self,
        api_key: &str,
        params: WalletNftsParams,
    ) -> Result<Value, ProviderError>;

    /// Metadata for one specific NFT.
    async fn get_nft_metadata(
        &self,
        api_key: &str,
        params: NftMetadataParams,
    ) -> Result<Value, ProviderError>;

    /// Owners of the NFTs in a contract (cursor-paginated).
    async fn get_nft_owners(
        &self,
        api_key: &str,
        params: NftOwnersParams,
    ) -> Result<Value, ProviderError>;

    /// Transaction history of a wallet address (cursor-paginated).
    async fn get_wallet_transactions(
        &self,
        api_key: &str,
        params: WalletTransactionsParams,
    ) -> Result<Value, ProviderError>;

    /// NFT collections owned by a wallet address (cursor-paginated).
    async fn get_nft_collections(
        &self,
        api_key: &str,
        params: NftCollectionsParams,
    ) -> Result<Value, ProviderError>;

    /// Native SOL balance of a Solana address.
    async fn get_sol_balance(
        &self,
        api_key: &str,
        params: SolBalanceParams,
    ) -> Result<Value, ProviderError>;

    /// Current version of the vendor's Web3 API.
    async fn api_version(&self, api_key: &str) -> Result<Value, ProviderError>;
}
