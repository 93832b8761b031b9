// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Static chain reference tables.
//!
//! Maps a chain identifier (the short code the provider API accepts, e.g.
//! `"eth"`) to its display name, native currency symbol, and decimal
//! precision. The table is fixed at compile time and never mutated.
//!
//! Unknown chains are not an error: lookups fall back to the identifier
//! itself for the display name, an empty symbol, and 18 decimals, matching
//! the behavior callers see for any EVM chain the table does not cover.

/// Default decimal precision for EVM native currencies (wei).
pub const DEFAULT_EVM_DECIMALS: u32 = 18;

/// Decimal precision for Solana native balances (lamports).
///
/// 1 SOL = 1_000_000_000 lamports. Unlike the EVM table this is fixed; the
/// Solana endpoint has no per-chain precision.
pub const SOL_DECIMALS: u32 = 9;

/// Reference data for one supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    /// Short chain identifier accepted by the provider API (e.g. `"eth"`).
    pub id: &'static str,
    /// Human-readable chain name (e.g. `"Ethereum"`).
    pub name: &'static str,
    /// Native currency symbol (e.g. `"ETH"`).
    pub symbol: &'static str,
    /// Decimal precision of the native currency's base unit.
    pub decimals: u32,
}

/// All chains with first-class reference data.
pub const SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        id: "eth",
        name: "Ethereum",
        symbol: "ETH",
        decimals: 18,
    },
    ChainInfo {
        id: "bsc",
        name: "Binance Smart Chain",
        symbol: "BNB",
        decimals: 18,
    },
    ChainInfo {
        id: "polygon",
        name: "Polygon",
        symbol: "MATIC",
        decimals: 18,
    },
    ChainInfo {
        id: "avalanche",
        name: "Avalanche",
        symbol: "AVAX",
        decimals: 18,
    },
    ChainInfo {
        id: "fantom",
        name: "Fantom",
        symbol: "FTM",
        decimals: 18,
    },
    ChainInfo {
        id: "cronos",
        name: "Cronos",
        symbol: "CRO",
        decimals: 18,
    },
    ChainInfo {
        id: "arbitrum",
        name: "Arbitrum",
        symbol: "ETH",
        decimals: 18,
    },
    ChainInfo {
        id: "optimism",
        name: "Optimism",
        symbol: "ETH",
        decimals: 18,
    },
    ChainInfo {
        id: "palm",
        name: "Palm",
        symbol: "PALM",
        decimals: 18,
    },
    ChainInfo {
        id: "mumbai",
        name: "Mumbai Testnet",
        symbol: "MATIC",
        decimals: 18,
    },
];

/// Look up the full reference record for a chain identifier.
pub fn chain_info(id: &str) -> Option<&'static ChainInfo> {
    SUPPORTED_CHAINS.iter().find(|c| c.id == id)
}

/// Display name for a chain, falling back to the identifier itself.
pub fn chain_name(id: &str) -> &str {
    chain_info(id).map_or(id, |c| c.name)
}

/// Native currency symbol for a chain, falling back to an empty string.
pub fn chain_symbol(id: &str) -> &'static str {
    chain_info(id).map_or("", |c| c.symbol)
}

/// Decimal precision for a chain's native currency, falling back to 18.
pub fn chain_decimals(id: &str) -> u32 {
    chain_info(id).map_or(DEFAULT_EVM_DECIMALS, |c| c.decimals)
}
