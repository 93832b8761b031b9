// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! NFT queries: wallet holdings, single-token metadata, contract owners,
//! and wallet collection summaries.

use serde_json::Value;
use tracing::{debug, warn};

use crate::chains::chain_name;
use crate::errors::{ReshapeError, WalletscanError};
use crate::provider::{
    NftCollectionsParams, NftMetadataParams, NftOwnersParams, WalletDataProvider, WalletNftsParams,
};

use super::balance::into_object;
use super::result::{QueryFailure, QueryResult};
use super::types::{CursorPage, NftCollections, NftMetadata, NftOwners, WalletNfts};
use super::{DEFAULT_PAGE_LIMIT, DEFAULT_TOKEN_ID_FORMAT};

/// Options for a wallet NFT holdings query.
#[derive(Debug, Clone)]
pub struct NftQuery {
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Pagination cursor from a previous page; empty for the first page.
    pub cursor: String,
    /// Token-id rendering, `"decimal"` or `"hex"`.
    pub format: String,
    /// Ask the vendor to normalize NFT metadata.
    pub normalize_metadata: bool,
    /// Optional NFT contract filter.
    pub token_addresses: Option<Vec<String>>,
}

impl Default for NftQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            cursor: String::new(),
            format: DEFAULT_TOKEN_ID_FORMAT.to_string(),
            normalize_metadata: true,
            token_addresses: None,
        }
    }
}

/// Options for a single-NFT metadata query.
#[derive(Debug, Clone)]
pub struct MetadataQuery {
    /// Token-id rendering, `"decimal"` or `"hex"`.
    pub format: String,
    /// Ask the vendor to normalize NFT metadata.
    pub normalize_metadata: bool,
}

impl Default for MetadataQuery {
    fn default() -> Self {
        Self {
            format: DEFAULT_TOKEN_ID_FORMAT.to_string(),
            normalize_metadata: true,
        }
    }
}

/// Options for an NFT contract owners query.
#[derive(Debug, Clone)]
pub struct NftPageQuery {
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Pagination cursor from a previous page; empty for the first page.
    pub cursor: String,
    /// Token-id rendering, `"decimal"` or `"hex"`.
    pub format: String,
    /// Ask the vendor to normalize NFT metadata.
    pub normalize_metadata: bool,
}

impl Default for NftPageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            cursor: String::new(),
            format: DEFAULT_TOKEN_ID_FORMAT.to_string(),
            normalize_metadata: true,
        }
    }
}

/// Options for a plain cursor-paginated query.
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Pagination cursor from a previous page; empty for the first page.
    pub cursor: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            cursor: String::new(),
        }
    }
}

/// NFTs owned by a wallet address (cursor-paginated).
///
/// Success is the vendor page with chain identifier, display name, and the
/// queried address attached. The degraded record carries an empty `result`
/// collection.
pub async fn get_wallet_nfts<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    query: NftQuery,
) -> QueryResult<WalletNfts>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(chain, address, limit = query.limit, "Fetching wallet NFTs");
    match fetch_wallet_nfts(provider, api_key, address, chain, query).await {
        Ok(nfts) => QueryResult::Ok(nfts),
        Err(e) => {
            warn!(chain, address, error = %e, "Wallet NFT query degraded");
            QueryResult::Degraded(
                QueryFailure::wallet(e.to_string(), chain, address).with_empty_result(),
            )
        }
    }
}

async fn fetch_wallet_nfts<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    query: NftQuery,
) -> Result<WalletNfts, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = WalletNftsParams {
        address: address.to_string(),
        chain: chain.to_string(),
        format: query.format,
        limit: query.limit,
        cursor: query.cursor,
        normalize_metadata: query.normalize_metadata,
        token_addresses: query.token_addresses,
    };
    let payload = provider.get_wallet_nfts(api_key, params).await?;

    Ok(WalletNfts {
        page: decode_page(payload)?,
        chain: chain.to_string(),
        chain_name: chain_name(chain).to_string(),
        address: address.to_string(),
    })
}

/// Metadata for one specific NFT.
///
/// Success is the vendor record with chain identifier and display name
/// attached. The degraded record carries the contract address and token id;
/// there is no mirror collection because the success shape has none.
pub async fn get_nft_metadata<P>(
    provider: &P,
    api_key: &str,
    contract_address: &str,
    token_id: &str,
    chain: &str,
    query: MetadataQuery,
) -> QueryResult<NftMetadata>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(chain, contract_address, token_id, "Fetching NFT metadata");
    match fetch_nft_metadata(provider, api_key, contract_address, token_id, chain, query).await {
        Ok(metadata) => QueryResult::Ok(metadata),
        Err(e) => {
            warn!(chain, contract_address, token_id, error = %e, "NFT metadata query degraded");
            QueryResult::Degraded(QueryFailure::nft(
                e.to_string(),
                chain,
                contract_address,
                token_id,
            ))
        }
    }
}

async fn fetch_nft_metadata<P>(
    provider: &P,
    api_key: &str,
    contract_address: &str,
    token_id: &str,
    chain: &str,
    query: MetadataQuery,
) -> Result<NftMetadata, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = NftMetadataParams {
        address: contract_address.to_string(),
        token_id: token_id.to_string(),
        chain: chain.to_string(),
        format: query.format,
        normalize_metadata: query.normalize_metadata,
    };
    let payload = provider.get_nft_metadata(api_key, params).await?;

    Ok(NftMetadata {
        chain: chain.to_string(),
        chain_name: chain_name(chain).to_string(),
        metadata: into_object(payload)?,
    })
}

/// Owners of the NFTs in a contract (cursor-paginated).
///
/// Success is the vendor page with chain context and the queried contract
/// address attached. The degraded record carries `contract_address` and an
/// empty `result` collection.
pub async fn get_nft_owners<P>(
    provider: &P,
    api_key: &str,
    contract_address: &str,
    chain: &str,
    query: NftPageQuery,
) -> QueryResult<NftOwners>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(chain, contract_address, limit = query.limit, "Fetching NFT owners");
    match fetch_nft_owners(provider, api_key, contract_address, chain, query).await {
        Ok(owners) => QueryResult::Ok(owners),
        Err(e) => {
            warn!(chain, contract_address, error = %e, "NFT owners query degraded");
            QueryResult::Degraded(
                QueryFailure::contract(e.to_string(), chain, contract_address).with_empty_result(),
            )
        }
    }
}

async fn fetch_nft_owners<P>(
    provider: &P,
    api_key: &str,
    contract_address: &str,
    chain: &str,
    query: NftPageQuery,
) -> Result<NftOwners, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = NftOwnersParams {
        address: contract_address.to_string(),
        chain: chain.to_string(),
        format: query.format,
        limit: query.limit,
        cursor: query.cursor,
        normalize_metadata: query.normalize_metadata,
    };
    let payload = provider.get_nft_owners(api_key, params).await?;

    Ok(NftOwners {
        page: decode_page(payload)?,
        chain: chain.to_string(),
        chain_name: chain_name(chain).to_string(),
        contract_address: contract_address.to_string(),
    })
}

/// NFT collections owned by a wallet address (cursor-paginated).
///
/// Success is the vendor page with chain context and the queried address
/// attached. The degraded record carries an empty `result` collection.
pub async fn get_wallet_nft_collections<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    query: PageQuery,
) -> QueryResult<NftCollections>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(chain, address, limit = query.limit, "Fetching NFT collections");
    match fetch_nft_collections(provider, api_key, address, chain, query).await {
        Ok(collections) => QueryResult::Ok(collections),
        Err(e) => {
            warn!(chain, address, error = %e, "NFT collection query degraded");
            QueryResult::Degraded(
                QueryFailure::wallet(e.to_string(), chain, address).with_empty_result(),
            )
        }
    }
}

async fn fetch_nft_collections<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    query: PageQuery,
) -> Result<NftCollections, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = NftCollectionsParams {
        address: address.to_string(),
        chain: chain.to_string(),
        limit: query.limit,
        cursor: query.cursor,
    };
    let payload = provider.get_nft_collections(api_key, params).await?;

    Ok(NftCollections {
        page: decode_page(payload)?,
        chain: chain.to_string(),
        chain_name: chain_name(chain).to_string(),
        address: address.to_string(),
    })
}

/// Decode a vendor cursor page, surfacing shape mismatches as reshape errors.
pub(super) fn decode_page(payload: Value) -> Result<CursorPage, WalletscanError> {
    Ok(serde_json::from_value(payload).map_err(ReshapeError::from)?)
}
