//! Error types for the walletscan library.
//!
//! Follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ProviderError`],
//!   [`FormatError`], [`ReshapeError`])
//! - **Unified error type** ([`WalletscanError`]) for the internal query
//!   pipeline and for callers who don't need to distinguish sources
//!
//! Note that these types rarely escape the public wallet API: query wrappers
//! absorb them into a degraded [`QueryFailure`](crate::wallet::QueryFailure)
//! record, collapsing the whole taxonomy into a single message string. The
//! typed errors exist for the provider boundary itself (where implementors
//! need real variants) and for [`get_api_version`](crate::wallet::get_api_version),
//! the one call that propagates.

mod format;
mod provider;
mod reshape;

pub use format::FormatError;
pub use provider::ProviderError;
pub use reshape::ReshapeError;

/// Unified error type for walletscan operations.
///
/// Wraps all module-specific error types; each converts automatically via
/// `From`, so `?` propagates naturally inside the query pipeline.
#[derive(Debug, thiserror::Error)]
pub enum WalletscanError {
    /// The data provider call itself failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A balance could not be formatted.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// The provider responded, but the payload could not be reshaped.
    #[error("reshape error: {0}")]
    Reshape(#[from] ReshapeError),
}
