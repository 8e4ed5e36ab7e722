use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breakdown produced by the calculator. Derived entirely from a
/// [`Declaration`](super::Declaration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub total_assets: Decimal,
    pub total_debts: Decimal,
    pub net_assets: Decimal,
    pub total_deductions: Decimal,
    pub taxable_amount: Decimal,
    pub tax_rate: Decimal,
    pub progressive_deduction: Decimal,
    pub calculated_tax: Decimal,
    pub tax_per_heir: Decimal,
    /// Tax owed after credits. No credits exist in the 2025 schedule, so this
    /// equals `calculated_tax`.
    pub final_tax: Decimal,
}
