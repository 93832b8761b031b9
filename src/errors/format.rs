//! Error type for balance formatting.

use bigdecimal::num_bigint::ParseBigIntError;

/// Errors that can occur when formatting a base-unit balance.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input was not a base-10 integer string.
    ///
    /// Balances arrive from the provider as decimal integer strings; anything
    /// else (fractional values, hex, empty strings) is rejected rather than
    /// guessed at.
    #[error("invalid integer balance {value:?}")]
    InvalidInteger {
        /// The offending input.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseBigIntError,
    },
}
