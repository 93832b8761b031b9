// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet transaction history queries.

use tracing::{debug, warn};

use crate::chains::chain_name;
use crate::errors::WalletscanError;
use crate::provider::{WalletDataProvider, WalletTransactionsParams};

use super::nft::decode_page;
use super::result::{QueryFailure, QueryResult};
use super::types::WalletTransactions;
use super::DEFAULT_PAGE_LIMIT;

/// Options for a wallet transaction history query.
#[derive(Debug, Clone)]
pub struct TransactionQuery {
    /// Page size (vendor maximum 100).
    pub limit: u32,
    /// Pagination cursor from a previous page; empty for the first page.
    pub cursor: String,
    /// Include internal transactions in the page.
    pub include_internal: bool,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            cursor: String::new(),
            include_internal: false,
        }
    }
}

/// Transaction history of a wallet address (cursor-paginated).
///
/// Success is the vendor page with chain context and the queried address
/// attached. The degraded record carries an empty `result` collection.
pub async fn get_wallet_transactions<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    query: TransactionQuery,
) -> QueryResult<WalletTransactions>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(chain, address, limit = query.limit, "Fetching wallet transactions");
    match fetch_wallet_transactions(provider, api_key, address, chain, query).await {
        Ok(transactions) => QueryResult::Ok(transactions),
        Err(e) => {
            warn!(chain, address, error = %e, "Transaction query degraded");
            QueryResult::Degraded(
                QueryFailure::wallet(e.to_string(), chain, address).with_empty_result(),
            )
        }
    }
}

async fn fetch_wallet_transactions<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    query: TransactionQuery,
) -> Result<WalletTransactions, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = WalletTransactionsParams {
        address: address.to_string(),
        chain: chain.to_string(),
        limit: query.limit,
        cursor: query.cursor,
        include_internal: query.include_internal,
    };
    let payload = provider.get_wallet_transactions(api_key, params).await?;

    Ok(WalletTransactions {
        page: decode_page(payload)?,
        chain: chain.to_string(),
        chain_name: chain_name(chain).to_string(),
        address: address.to_string(),
    })
}
