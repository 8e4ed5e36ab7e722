//! Display helpers for won amounts and tax rates, plus the matching parser
//! for amounts typed with thousands separators.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a won amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Formats a won amount with comma thousands separators.
///
/// Fractional digits are kept with trailing zeros trimmed, so whole-won
/// amounts print without a decimal point.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use inheritance_core::format::format_won;
///
/// assert_eq!(format_won(dec!(560000000.00)), "560,000,000");
/// assert_eq!(format_won(dec!(186666666.67)), "186,666,666.67");
/// assert_eq!(format_won(dec!(-1500)), "-1,500");
/// ```
pub fn format_won(amount: Decimal) -> String {
    let text = amount.normalize().abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if amount.is_sign_negative() && !amount.is_zero() {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats a rate such as `0.4` as a one-decimal percentage (`"40.0%"`).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use inheritance_core::format::format_rate;
///
/// assert_eq!(format_rate(dec!(0.40)), "40.0%");
/// assert_eq!(format_rate(dec!(0)), "0.0%");
/// ```
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}%")
}

/// Parses a won amount, accepting comma thousands separators
/// (`"450,000,000"`). Empty or whitespace-only input is zero.
pub fn parse_won(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}
