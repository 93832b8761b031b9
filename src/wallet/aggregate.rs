// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-chain native balance aggregation.

use tracing::info;

use crate::chains::{chain_name, chain_symbol};
use crate::provider::WalletDataProvider;

use super::balance::get_native_balance;
use super::types::{ChainBalance, ChainBalanceFailure, ChainBalanceRecord, CrossChainBalances};
use super::QueryResult;

/// Chains queried when a caller has no specific list in mind.
pub const DEFAULT_CHAINS: [&str; 4] = ["eth", "bsc", "polygon", "avalanche"];

/// Native balance snapshot for one address across multiple chains.
///
/// Chains are queried strictly sequentially, in the order given; total
/// latency is the sum of per-chain latencies. The output has exactly one
/// entry per requested chain, in request order - duplicates included, an
/// empty list yields an empty snapshot. A failing chain produces a degraded
/// entry and does not prevent results for the chains after it; this function
/// never fails outward.
///
/// # Example
///
/// ```rust,no_run
/// use walletscan::{wallet, MoralisProvider};
///
/// # async fn example() -> Result<(), walletscan::ProviderError> {
/// let provider = MoralisProvider::new()?;
/// let snapshot = wallet::get_cross_chain_balances(
///     &provider,
///     "API_KEY",
///     "0x26fc...65b5",
///     &wallet::DEFAULT_CHAINS,
/// )
/// .await;
///
/// for entry in &snapshot.balances {
///     match entry.error() {
///         None => println!("{}: ok", entry.chain()),
///         Some(error) => println!("{}: {error}", entry.chain()),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub async fn get_cross_chain_balances<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chains: &[&str],
) -> CrossChainBalances
where
    P: WalletDataProvider + ?Sized,
{
    info!(address, chain_count = chains.len(), "Aggregating cross-chain balances");

    let mut balances = Vec::with_capacity(chains.len());
    for &chain in chains {
        // Sequential on purpose: one slow chain delays the rest but a failing
        // chain never hides them.
        let entry = match get_native_balance(provider, api_key, address, chain).await {
            QueryResult::Ok(balance) => ChainBalance::Ok(ChainBalanceRecord {
                chain: chain.to_string(),
                chain_name: chain_name(chain).to_string(),
                raw_balance: balance.raw_balance,
                formatted_balance: balance.formatted_balance,
                symbol: chain_symbol(chain).to_string(),
            }),
            QueryResult::Degraded(failure) => ChainBalance::Degraded(ChainBalanceFailure {
                chain: chain.to_string(),
                chain_name: chain_name(chain).to_string(),
                symbol: chain_symbol(chain).to_string(),
                error: failure.error,
            }),
        };
        balances.push(entry);
    }

    CrossChainBalances {
        address: address.to_string(),
        balances,
    }
}
