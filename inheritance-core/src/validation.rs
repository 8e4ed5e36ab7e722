//! Input checks applied by callers before a declaration reaches the
//! calculator. The calculator itself accepts anything.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Declaration;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("heirsCount must be at least 1")]
    NoHeirs,

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} must not exceed {MAX_AMOUNT} won, got {value}")]
    AmountTooLarge { field: &'static str, value: Decimal },
}

/// Largest accepted bucket, 10^20 won. Thirty-four buckets at this size
/// still sum well inside the `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x6310_0000, 0x6BC7_5E2D, 0x5, false, 0);

/// Rejects declarations with no heirs, or with an asset or debt bucket that
/// is negative or above [`MAX_AMOUNT`]. Reports the first problem found.
pub fn validate_declaration(declaration: &Declaration) -> Result<(), ValidationError> {
    if declaration.heirs_count == 0 {
        return Err(ValidationError::NoHeirs);
    }

    for (field, value) in declaration
        .assets
        .buckets()
        .into_iter()
        .chain(declaration.debts.buckets())
    {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::NegativeAmount { field, value });
        }
        if value > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge { field, value });
        }
    }

    Ok(())
}
