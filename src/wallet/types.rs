// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Reshaped response payload types.
//!
//! These are the success shapes the query wrappers produce: the vendor
//! payload with chain context attached and balance fields renamed or
//! computed. Vendor fields the types don't model explicitly pass through
//! untouched via `#[serde(flatten)]`, so reshaping never drops data.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Native coin balance with chain context.
///
/// The vendor's `balance` field is renamed to `raw_balance`;
/// `formatted_balance` is computed from it using the chain's decimal
/// precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeBalance {
    /// Balance in base units (wei), as a decimal integer string.
    pub raw_balance: String,
    /// Human-readable balance per the display policy.
    pub formatted_balance: String,
    /// Native currency symbol, empty for unknown chains.
    pub symbol: String,
    /// Chain identifier that was queried.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// Any further vendor fields, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One fungible token position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Token contract address.
    pub token_address: Option<String>,
    /// Token name.
    pub name: Option<String>,
    /// Token symbol.
    pub symbol: Option<String>,
    /// Logo URL, when the vendor has one.
    pub logo: Option<String>,
    /// Thumbnail URL, when the vendor has one.
    pub thumbnail: Option<String>,
    /// Token decimal precision; the vendor sends null for tokens it cannot
    /// resolve.
    #[serde(default, deserialize_with = "de_decimals")]
    pub decimals: Option<u32>,
    /// Balance in the token's base units, as a decimal integer string.
    pub balance: String,
    /// Computed display balance. Equals `balance` verbatim when `decimals`
    /// is unknown - raw passthrough rather than guessing a precision.
    #[serde(default)]
    pub formatted_balance: String,
    /// Vendor spam flag.
    pub possible_spam: Option<bool>,
    /// Any further vendor fields, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fungible token balances for one wallet on one chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalances {
    /// Per-token positions with computed display balances.
    pub tokens: Vec<TokenBalance>,
    /// Chain identifier that was queried.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// Wallet address that was queried.
    pub address: String,
}

/// Vendor cursor-paginated page, passed through as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage {
    /// Total matching records, when the vendor reports it.
    pub total: Option<u64>,
    /// Zero-based page number.
    pub page: Option<u64>,
    /// Page size used for this response.
    pub page_size: Option<u64>,
    /// Opaque cursor for the next page; null on the last page.
    pub cursor: Option<String>,
    /// Records in this page, vendor shape untouched.
    #[serde(default)]
    pub result: Vec<Value>,
    /// Vendor sync status, when reported.
    pub status: Option<String>,
    /// Any further vendor fields, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// NFT holdings page for a wallet, with chain context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletNfts {
    /// The vendor page.
    #[serde(flatten)]
    pub page: CursorPage,
    /// Chain identifier that was queried.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// Wallet address that was queried.
    pub address: String,
}

/// Metadata for one NFT, with chain context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftMetadata {
    /// Chain identifier that was queried.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// The vendor metadata record, untouched.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// Owners page for an NFT contract, with chain context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftOwners {
    /// The vendor page.
    #[serde(flatten)]
    pub page: CursorPage,
    /// Chain identifier that was queried.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// NFT contract address that was queried.
    pub contract_address: String,
}

/// Transaction history page for a wallet, with chain context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTransactions {
    /// The vendor page.
    #[serde(flatten)]
    pub page: CursorPage,
    /// Chain identifier that was queried.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// Wallet address that was queried.
    pub address: String,
}

/// NFT collection summary page for a wallet, with chain context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftCollections {
    /// The vendor page.
    #[serde(flatten)]
    pub page: CursorPage,
    /// Chain identifier that was queried.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// Wallet address that was queried.
    pub address: String,
}

/// Native SOL balance with network context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolBalance {
    /// Balance in lamports, as a decimal integer string.
    pub lamports: String,
    /// Human-readable SOL balance (always 6 fractional digits).
    pub formatted_balance: String,
    /// Network that was queried, `"mainnet"` or `"devnet"`.
    pub network: String,
    /// Wallet address that was queried.
    pub address: String,
    /// Any further vendor fields (including the vendor's own `solana`
    /// decimal string), passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Vendor Web3 API version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiVersion {
    /// Version string (e.g. `"0.0.53"`).
    pub version: String,
    /// Any further vendor fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-chain entry in a cross-chain balance snapshot.
///
/// Untagged: both variants serialize flat, distinguished only by which of
/// `raw_balance` / `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainBalance {
    /// The chain's native balance was retrieved.
    Ok(ChainBalanceRecord),
    /// The chain's query degraded; the snapshot still carries an entry.
    Degraded(ChainBalanceFailure),
}

impl ChainBalance {
    /// Chain identifier this entry belongs to.
    pub fn chain(&self) -> &str {
        match self {
            ChainBalance::Ok(record) => &record.chain,
            ChainBalance::Degraded(failure) => &failure.chain,
        }
    }

    /// True when this entry is degraded.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ChainBalance::Degraded(_))
    }

    /// The error message, if this entry is degraded.
    pub fn error(&self) -> Option<&str> {
        match self {
            ChainBalance::Ok(_) => None,
            ChainBalance::Degraded(failure) => Some(&failure.error),
        }
    }
}

/// Successful per-chain balance entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainBalanceRecord {
    /// Chain identifier.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// Balance in base units, as a decimal integer string.
    pub raw_balance: String,
    /// Human-readable balance per the display policy.
    pub formatted_balance: String,
    /// Native currency symbol.
    pub symbol: String,
}

/// Degraded per-chain balance entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainBalanceFailure {
    /// Chain identifier.
    pub chain: String,
    /// Chain display name.
    pub chain_name: String,
    /// Native currency symbol.
    pub symbol: String,
    /// Why this chain's query degraded.
    pub error: String,
}

/// Cross-chain native balance snapshot for one address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossChainBalances {
    /// Wallet address the snapshot covers.
    pub address: String,
    /// One entry per requested chain, in request order.
    pub balances: Vec<ChainBalance>,
}

/// Accept token decimals as a JSON number, a numeric string, or null.
///
/// The vendor is inconsistent here; the original coerced with `int(...)`.
fn de_decimals<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("token decimals out of range")),
        Some(Value::String(s)) => s
            .parse::<u32>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid token decimals: {e}"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid token decimals value: {other}"
        ))),
    }
}
