use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Assets, Debts, DeductionElections};

/// Input to the inheritance tax calculation.
///
/// `death_date` is carried for the record only; the 2025 schedule does not
/// depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub death_date: NaiveDate,
    pub heirs_count: u32,
    #[serde(default)]
    pub assets: Assets,
    #[serde(default)]
    pub debts: Debts,
    #[serde(default)]
    pub deductions: DeductionElections,
}
