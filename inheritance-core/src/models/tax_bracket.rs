use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive rate schedule.
///
/// A bracket covers `(min_amount, max_amount]`; `max_amount` of `None` means
/// the bracket is unbounded above. Tax inside the bracket is
/// `amount * rate - progressive_deduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    pub min_amount: Decimal,
    pub max_amount: Option<Decimal>,
    pub rate: Decimal,
    pub progressive_deduction: Decimal,
}

impl TaxBracket {
    /// Returns true if `amount` falls in `(min_amount, max_amount]`.
    pub fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        amount > self.min_amount && self.max_amount.is_none_or(|max| amount <= max)
    }
}
