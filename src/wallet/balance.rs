// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Native balance queries (EVM chains and Solana).

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::chains::{chain_decimals, chain_name, chain_symbol};
use crate::errors::{ReshapeError, WalletscanError};
use crate::format::{format_lamports, format_units};
use crate::provider::{NativeBalanceParams, SolBalanceParams, WalletDataProvider};

use super::result::{QueryFailure, QueryResult};
use super::types::{NativeBalance, SolBalance};

/// Native coin balance of an address on one EVM chain.
///
/// Renames the vendor's `balance` field to `raw_balance`, computes
/// `formatted_balance` with the chain's decimal precision (18 for chains the
/// reference table does not cover), and attaches the chain identifier,
/// display name, and native symbol.
///
/// Provider failures, a missing vendor balance field, and malformed balance
/// values all degrade; nothing propagates.
pub async fn get_native_balance<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
) -> QueryResult<NativeBalance>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(chain, address, "Fetching native balance");
    match fetch_native_balance(provider, api_key, address, chain).await {
        Ok(balance) => QueryResult::Ok(balance),
        Err(e) => {
            warn!(chain, address, error = %e, "Native balance query degraded");
            QueryResult::Degraded(QueryFailure::wallet(e.to_string(), chain, address))
        }
    }
}

async fn fetch_native_balance<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    chain: &str,
) -> Result<NativeBalance, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = NativeBalanceParams {
        address: address.to_string(),
        chain: chain.to_string(),
    };
    let payload = provider.get_native_balance(api_key, params).await?;

    let mut extra = into_object(payload)?;
    let raw_balance = take_string(&mut extra, "balance")?;
    let formatted_balance = format_units(&raw_balance, chain_decimals(chain))?;

    Ok(NativeBalance {
        raw_balance,
        formatted_balance,
        symbol: chain_symbol(chain).to_string(),
        chain: chain.to_string(),
        chain_name: chain_name(chain).to_string(),
        extra,
    })
}

/// Native SOL balance of a Solana address.
///
/// Computes `formatted_balance` from `lamports` with the fixed 9-decimal
/// divisor and attaches the network and address. The degraded record carries
/// `network` where the EVM endpoints carry `chain`.
pub async fn get_sol_balance<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    network: &str,
) -> QueryResult<SolBalance>
where
    P: WalletDataProvider + ?Sized,
{
    debug!(network, address, "Fetching SOL balance");
    match fetch_sol_balance(provider, api_key, address, network).await {
        Ok(balance) => QueryResult::Ok(balance),
        Err(e) => {
            warn!(network, address, error = %e, "SOL balance query degraded");
            QueryResult::Degraded(QueryFailure::solana(e.to_string(), network, address))
        }
    }
}

async fn fetch_sol_balance<P>(
    provider: &P,
    api_key: &str,
    address: &str,
    network: &str,
) -> Result<SolBalance, WalletscanError>
where
    P: WalletDataProvider + ?Sized,
{
    let params = SolBalanceParams {
        address: address.to_string(),
        network: network.to_string(),
    };
    let payload = provider.get_sol_balance(api_key, params).await?;

    let mut extra = into_object(payload)?;
    let lamports = take_string(&mut extra, "lamports")?;
    let formatted_balance = format_lamports(&lamports)?;

    Ok(SolBalance {
        lamports,
        formatted_balance,
        network: network.to_string(),
        address: address.to_string(),
        extra,
    })
}

/// Require the payload to be a JSON object.
pub(super) fn into_object(payload: Value) -> Result<Map<String, Value>, WalletscanError> {
    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(ReshapeError::unexpected_type("object").into()),
    }
}

/// Remove a field that must be a string (or a bare number the vendor failed
/// to quote) from the payload.
pub(super) fn take_string(
    map: &mut Map<String, Value>,
    field: &str,
) -> Result<String, WalletscanError> {
    match map.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ReshapeError::missing_field(field).into()),
    }
}
