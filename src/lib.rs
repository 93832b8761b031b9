// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-chain wallet data retrieval for Rust.
//!
//! `walletscan` is a thin convenience layer over a Web3 wallet-data API
//! provider (a Moralis-style indexer REST API). Each query function accepts a
//! credential plus query parameters, delegates to a pluggable
//! [`WalletDataProvider`], and reshapes the response: renaming fields, adding
//! chain context, and converting integer base-unit balances into
//! human-readable decimal strings.
//!
//! # Architecture
//!
//! - [`chains`] - static reference tables mapping a chain identifier to its
//!   display name, native symbol, and decimal precision
//! - [`format`] - arbitrary-precision balance formatting (wei/lamports to
//!   decimal strings)
//! - [`provider`] - the external collaborator boundary: the
//!   [`WalletDataProvider`] trait and the reqwest-backed [`MoralisProvider`]
//! - [`wallet`] - per-endpoint query wrappers, typed success/degraded
//!   results, and the cross-chain balance aggregator
//!
//! # Error absorption contract
//!
//! Query wrappers never propagate provider failures. Every failure - network,
//! authentication, not-found, malformed response - is collapsed into a
//! structural [`QueryFailure`] carried by [`QueryResult::Degraded`], so a
//! caller can treat success and failure responses uniformly and check for the
//! presence of an `error` field after serialization. The cross-chain
//! aggregator extends this guarantee: it always returns exactly one entry per
//! requested chain, in input order, regardless of which chains fail.
//!
//! # Example
//!
//! ```rust,no_run
//! use walletscan::{wallet, MoralisProvider, QueryResult};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MoralisProvider::new()?;
//!
//! match wallet::get_native_balance(&provider, "API_KEY", "0x26fc...65b5", "eth").await {
//!     QueryResult::Ok(balance) => {
//!         println!("{} {}", balance.formatted_balance, balance.symbol);
//!     }
//!     QueryResult::Degraded(failure) => {
//!         eprintln!("query degraded: {}", failure.error);
//!     }
//! }
//!
//! let snapshot = wallet::get_cross_chain_balances(
//!     &provider,
//!     "API_KEY",
//!     "0x26fc...65b5",
//!     &wallet::DEFAULT_CHAINS,
//! )
//! .await;
//! println!("{} chains queried", snapshot.balances.len());
//! # Ok(())
//! # }
//! ```

pub mod chains;
pub mod errors;
pub mod format;
pub mod provider;
pub mod wallet;

pub use chains::{ChainInfo, DEFAULT_EVM_DECIMALS, SOL_DECIMALS};
pub use errors::{FormatError, ProviderError, ReshapeError, WalletscanError};
pub use format::{format_lamports, format_units};
pub use provider::{MoralisProvider, MoralisProviderBuilder, WalletDataProvider};
pub use wallet::{
    ApiVersion, ChainBalance, CrossChainBalances, NativeBalance, QueryFailure, QueryResult,
    SolBalance, TokenBalance, TokenBalances,
};
