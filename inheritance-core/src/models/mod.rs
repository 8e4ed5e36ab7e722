mod assets;
mod debts;
mod declaration;
mod declaration_record;
mod deductions;
mod tax_bracket;
mod tax_result;

pub use assets::{
    Assets, BusinessAssets, FinancialAssets, InsuranceAssets, MovableAssets, OtherAssets,
    RealEstateAssets,
};
pub use debts::{Debts, FinancialDebts, FuneralCosts, OtherDebts, TaxDebts};
pub use declaration::Declaration;
pub use declaration_record::{DeclarationRecord, NewDeclarationRecord};
pub use deductions::DeductionElections;
pub use tax_bracket::TaxBracket;
pub use tax_result::TaxResult;

use rust_decimal::Decimal;

/// Sums amounts, saturating at the `Decimal` range instead of panicking.
pub(crate) fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
