//! Rounding and clamping helpers shared by the calculator steps.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places, halves away from zero.
///
/// Whole-won inputs come back unchanged; only divided amounts such as the
/// per-heir split carry fractions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use inheritance_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(186666666.666)), dec!(186666666.67));
/// assert_eq!(round_half_up(dec!(560000000)), dec!(560000000));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Floors an amount at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use inheritance_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-300000000)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(1800000000)), dec!(1800000000));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Caps `value` at `cap`. A negative cap pulls the result below zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use inheritance_core::calculations::common::cap_at;
///
/// assert_eq!(cap_at(dec!(800000000), dec!(300000000)), dec!(300000000));
/// assert_eq!(cap_at(dec!(200000000), dec!(-50)), dec!(-50));
/// ```
pub fn cap_at(
    value: Decimal,
    cap: Decimal,
) -> Decimal {
    value.min(cap)
}
