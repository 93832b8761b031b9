// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet query wrappers and response reshaping.
//!
//! Each public function here wraps exactly one provider capability: build a
//! parameter record, delegate to the [`WalletDataProvider`], and on success
//! augment the payload with chain context (identifier plus display name),
//! renaming and computing balance fields where the endpoint calls for it.
//!
//! # The degradation contract
//!
//! No wrapper propagates a provider failure. Every failure is absorbed into
//! [`QueryResult::Degraded`] carrying a [`QueryFailure`]: the error message,
//! the chain and address (or contract address) that was queried, and an
//! empty collection mirroring the success shape so callers can iterate
//! either way. After serialization, presence of the `error` key is the sole
//! failure signal.
//!
//! The one exception is [`get_api_version`], which is a version probe rather
//! than a wallet query and returns a plain `Result`.
//!
//! [`WalletDataProvider`]: crate::provider::WalletDataProvider

mod aggregate;
mod balance;
mod nft;
mod result;
mod tokens;
mod transactions;
mod types;
mod version;

pub use aggregate::{get_cross_chain_balances, DEFAULT_CHAINS};
pub use balance::{get_native_balance, get_sol_balance};
pub use nft::{
    get_nft_metadata, get_nft_owners, get_wallet_nft_collections, get_wallet_nfts, MetadataQuery,
    NftPageQuery, NftQuery, PageQuery,
};
pub use result::{QueryFailure, QueryResult};
pub use tokens::get_token_balances;
pub use transactions::{get_wallet_transactions, TransactionQuery};
pub use version::get_api_version;
pub use types::{
    ApiVersion, ChainBalance, ChainBalanceFailure, ChainBalanceRecord, CrossChainBalances,
    CursorPage, NativeBalance, NftCollections, NftMetadata, NftOwners, SolBalance, TokenBalance,
    TokenBalances, WalletNfts, WalletTransactions,
};

/// Default page size for cursor-paginated endpoints (vendor maximum).
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Default token-id rendering for NFT endpoints.
pub const DEFAULT_TOKEN_ID_FORMAT: &str = "decimal";
