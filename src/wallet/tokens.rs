// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fungible token balance queries.

use tracing::{debug, warn};

use crate::chains::chain_name;
use crate::errors::WalletscanError;
use crate::format::format_units;
use crate::provider::{TokenBalancesParams, WalletDataProvider};

use super::result::{QueryFailure, QueryResult};
use super::types::{TokenBalance, TokenBalances};

/// Fungible token balances held by an address on one chain.
///
/// Optionally scoped to an explicit list of token contract addresses. Each
/// token's `formatted_balance` is computed with that token's own decimal
/// precision; a token the vendor reports without decimals passes its raw
/// balance through unformatted rather than guessing a precision.
///
/// The degraded record carries an empty `tokens` collection.
pub async fn get_token_balances<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    token_addresses: Option<&[String]>,
) -> QueryResult<TokenBalances>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(chain, address, "Fetching token balances");
    match fetch_token_balances(provider, api_key, address, chain, token_addresses).await {
        Ok(balances) => QueryResult::Ok(balances),
        Err(e) => {
            warn!(chain, address, error = %e, "Token balance query degraded");
            QueryResult::Degraded(
                QueryFailure::wallet(e.to_string(), chain, address).with_empty_tokens(),
            )
        }
    }
}

async fn fetch_token_balances<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
    token_addresses: Option<&[String]>,
) -> Result<TokenBalances, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = TokenBalancesParams {
        address: address.to_string(),
        chain: chain.to_string(),
        token_addresses: token_addresses.map(<[String]>::to_vec),
    };
    let payload = provider.get_token_balances(api_key, params).await?;

    let mut tokens: Vec<TokenBalance> =
        serde_json::from_value(payload).map_err(crate::errors::ReshapeError::from)?;
    for token in &mut tokens {
        token.formatted_balance = match token.decimals {
            Some(decimals) => format_units(&token.balance, decimals)?,
            // Unknown precision: pass the raw value through unformatted.
            None => token.balance.clone(),
        };
    }

    Ok(TokenBalances {
        tokens,
        chain: chain.to_string(),
        chain_name: chain_name(chain).to_string(),
        address: address.to_string(),
    })
}
