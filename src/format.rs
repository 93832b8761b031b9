// SPDX-FileCopyrightText: 2025 Walletscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Balance formatting from base units to decimal strings.
//!
//! On-chain balances arrive as base-10 integers encoded as strings (wei,
//! lamports, token base units) because they routinely exceed the range of
//! native integer types. This module converts them to human-readable decimal
//! strings using exact arbitrary-precision arithmetic - values up to and
//! beyond 2^256 are handled without overflow or precision loss.
//!
//! # Display policy
//!
//! The policy is fixed and not configurable:
//!
//! - strictly positive values below 0.000001 render with 8 fractional digits
//!   (so dust balances don't collapse to `0.000000`)
//! - everything else renders with 6 fractional digits
//! - never scientific notation, never locale-aware
//!
//! Rounding at the stated digit count is half-up. Negative inputs are not
//! rejected; they render as a negative decimal string with 6 digits.

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use std::str::FromStr;

use crate::chains::SOL_DECIMALS;
use crate::errors::FormatError;

/// Fractional digits for the standard display policy.
const STANDARD_DIGITS: i64 = 6;

/// Fractional digits for strictly positive values below the dust threshold.
const DUST_DIGITS: i64 = 8;

/// Convert an integer base-unit balance into a human-readable decimal string.
///
/// `raw` is interpreted as an arbitrary-precision base-10 integer; the result
/// is `raw / 10^decimals` rendered per the module display policy.
///
/// # Examples
///
/// ```rust
/// use walletscan::format_units;
///
/// // 319.973658... ETH in wei
/// let formatted = format_units("319973658297093018740", 18).unwrap();
/// assert_eq!(formatted, "319.973658");
///
/// // Dust balances keep 8 fractional digits
/// assert_eq!(format_units("100000000000", 18).unwrap(), "0.00000010");
///
/// // Zero is always "0.000000"
/// assert_eq!(format_units("0", 18).unwrap(), "0.000000");
/// ```
///
/// # Errors
///
/// Returns [`FormatError`] when `raw` is not a base-10 integer. Query
/// wrappers absorb this into their degraded record rather than propagating.
pub fn format_units(raw: &str, decimals: u32) -> Result<String, FormatError> {
    let value = to_decimal(raw, decimals)?;

    let digits = if is_dust(&value) {
        DUST_DIGITS
    } else {
        STANDARD_DIGITS
    };

    Ok(render_fixed(value, digits))
}

/// Convert a lamport balance into a decimal SOL string.
///
/// Solana has a single fixed precision (10^9 lamports per SOL) and the
/// original display contract always used 6 fractional digits, without the
/// 8-digit dust branch that applies to EVM balances.
///
/// # Errors
///
/// Returns [`FormatError`] when `raw` is not a base-10 integer.
pub fn format_lamports(raw: &str) -> Result<String, FormatError> {
    let value = to_decimal(raw, SOL_DECIMALS)?;
    Ok(render_fixed(value, STANDARD_DIGITS))
}

/// Parse `raw` as a big integer and scale it down by `10^decimals`, exactly.
fn to_decimal(raw: &str, decimals: u32) -> Result<BigDecimal, FormatError> {
    let digits = BigInt::from_str(raw.trim()).map_err(|source| FormatError::InvalidInteger {
        value: raw.to_string(),
        source,
    })?;
    Ok(BigDecimal::new(digits, i64::from(decimals)))
}

/// Strictly positive and below the 0.000001 dust threshold?
fn is_dust(value: &BigDecimal) -> bool {
    let threshold = BigDecimal::new(BigInt::from(1), STANDARD_DIGITS);
    *value > BigDecimal::zero() && *value < threshold
}

/// Round to `digits` fractional digits and render as a plain fixed-point
/// string.
///
/// `BigDecimal`'s `Display` drops trailing zeros and switches to scientific
/// notation for small magnitudes, so the digit string is assembled by hand
/// from the rounded unscaled integer: zero-pad to at least `digits + 1`
/// places, then split off the last `digits` as the fraction. A value that
/// rounds to zero loses its sign.
fn render_fixed(value: BigDecimal, digits: i64) -> String {
    let (unscaled, _) = value
        .with_scale_round(digits, RoundingMode::HalfUp)
        .into_bigint_and_exponent();
    let negative = unscaled.sign() == Sign::Minus;

    let mut text = unscaled.magnitude().to_string();
    let width = digits as usize + 1;
    if text.len() < width {
        text.insert_str(0, &"0".repeat(width - text.len()));
    }

    let (int_part, frac_part) = text.split_at(text.len() - digits as usize);
    if negative {
        format!("-{int_part}.{frac_part}")
    } else {
        format!("{int_part}.{frac_part}")
    }
}
