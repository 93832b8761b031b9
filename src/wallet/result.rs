// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Typed success/degraded query outcome.
//!
//! The wallet API never raises for a provider failure; instead each wrapper
//! returns [`QueryResult`], whose two variants are statically
//! distinguishable while still serializing to the original wire contract:
//! a degraded response is a structurally valid record whose only marker is
//! the presence of an `error` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::TokenBalance;

/// Outcome of a wallet query: the reshaped payload, or a degraded record.
///
/// Serializes transparently (untagged), so `Ok` payloads and `Degraded`
/// failures produce flat JSON objects distinguished only by the `error` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResult<T> {
    /// The provider call succeeded and the payload was reshaped.
    Ok(T),
    /// The provider call (or reshaping) failed; the failure was absorbed.
    Degraded(QueryFailure),
}

impl<T> QueryResult<T> {
    /// True when this is a degraded record.
    pub fn is_degraded(&self) -> bool {
        matches!(self, QueryResult::Degraded(_))
    }

    /// The success payload, if any.
    pub fn ok(&self) -> Option<&T> {
        match self {
            QueryResult::Ok(payload) => Some(payload),
            QueryResult::Degraded(_) => None,
        }
    }

    /// The error message, if this is a degraded record.
    pub fn error(&self) -> Option<&str> {
        match self {
            QueryResult::Ok(_) => None,
            QueryResult::Degraded(failure) => Some(&failure.error),
        }
    }

    /// Convert into a standard `Result` for callers who prefer `?`-style
    /// handling over the structural contract.
    pub fn into_result(self) -> Result<T, QueryFailure> {
        match self {
            QueryResult::Ok(payload) => Ok(payload),
            QueryResult::Degraded(failure) => Err(failure),
        }
    }
}

/// Uniform degraded record returned by every query wrapper.
///
/// Carries at minimum the error message plus the chain and address (or
/// contract address) that was queried. Endpoints whose success shape holds a
/// collection also carry an empty mirror collection (`tokens` or `result`)
/// so callers can iterate without branching on the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryFailure {
    /// Human-readable failure message (the collapsed error taxonomy).
    pub error: String,

    /// Chain identifier that was queried (EVM endpoints).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,

    /// Network that was queried (the Solana endpoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Wallet address that was queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Contract address that was queried (NFT contract endpoints).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,

    /// Token id that was queried (single-NFT metadata).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,

    /// Empty mirror of the `tokens` collection in the success shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenBalance>>,

    /// Empty mirror of the `result` collection in the success shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Value>>,
}

impl QueryFailure {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            chain: None,
            network: None,
            address: None,
            contract_address: None,
            token_id: None,
            tokens: None,
            result: None,
        }
    }

    /// Degraded record for a wallet-address query on an EVM chain.
    pub fn wallet(error: impl Into<String>, chain: &str, address: &str) -> Self {
        let mut failure = Self::new(error);
        failure.chain = Some(chain.to_string());
        failure.address = Some(address.to_string());
        failure
    }

    /// Degraded record for an NFT contract query.
    pub fn contract(error: impl Into<String>, chain: &str, contract_address: &str) -> Self {
        let mut failure = Self::new(error);
        failure.chain = Some(chain.to_string());
        failure.contract_address = Some(contract_address.to_string());
        failure
    }

    /// Degraded record for a single-NFT metadata query.
    pub fn nft(
        error: impl Into<String>,
        chain: &str,
        contract_address: &str,
        token_id: &str,
    ) -> Self {
        let mut failure = Self::new(error);
        failure.chain = Some(chain.to_string());
        failure.address = Some(contract_address.to_string());
        failure.token_id = Some(token_id.to_string());
        failure
    }

    /// Degraded record for the Solana balance query.
    pub fn solana(error: impl Into<String>, network: &str, address: &str) -> Self {
        let mut failure = Self::new(error);
        failure.network = Some(network.to_string());
        failure.address = Some(address.to_string());
        failure
    }

    /// Attach the empty `tokens` mirror collection.
    pub fn with_empty_tokens(mut self) -> Self {
        self.tokens = Some(Vec::new());
        self
    }

    /// Attach the empty `result` mirror collection.
    pub fn with_empty_result(mut self) -> Self {
        self.result = Some(Vec::new());
        self
    }
}
