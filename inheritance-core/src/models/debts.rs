use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::saturating_sum;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuneralCosts {
    pub funeral: Decimal,
    pub burial: Decimal,
}

impl FuneralCosts {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.funeral, self.burial])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialDebts {
    pub mortgage: Decimal,
    pub loans: Decimal,
    pub credit_cards: Decimal,
    pub other: Decimal,
}

impl FinancialDebts {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.mortgage, self.loans, self.credit_cards, self.other])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxDebts {
    pub income_tax: Decimal,
    pub property_tax: Decimal,
    pub other: Decimal,
}

impl TaxDebts {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.income_tax, self.property_tax, self.other])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OtherDebts {
    pub lease_deposits: Decimal,
    pub guarantees: Decimal,
    pub other: Decimal,
}

impl OtherDebts {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.lease_deposits, self.guarantees, self.other])
    }
}

/// Liabilities deducted from the estate before deductions apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Debts {
    pub funeral: FuneralCosts,
    pub financial: FinancialDebts,
    pub taxes: TaxDebts,
    pub other: OtherDebts,
}

impl Debts {
    pub fn total(&self) -> Decimal {
        saturating_sum([
            self.funeral.total(),
            self.financial.total(),
            self.taxes.total(),
            self.other.total(),
        ])
    }

    pub fn buckets(&self) -> [(&'static str, Decimal); 12] {
        [
            ("debts.funeral.funeral", self.funeral.funeral),
            ("debts.funeral.burial", self.funeral.burial),
            ("debts.financial.mortgage", self.financial.mortgage),
            ("debts.financial.loans", self.financial.loans),
            ("debts.financial.creditCards", self.financial.credit_cards),
            ("debts.financial.other", self.financial.other),
            ("debts.taxes.incomeTax", self.taxes.income_tax),
            ("debts.taxes.propertyTax", self.taxes.property_tax),
            ("debts.taxes.other", self.taxes.other),
            ("debts.other.leaseDeposits", self.other.lease_deposits),
            ("debts.other.guarantees", self.other.guarantees),
            ("debts.other.other", self.other.other),
        ]
    }
}
