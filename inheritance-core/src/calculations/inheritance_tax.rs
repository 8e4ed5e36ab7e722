//! Korean inheritance tax calculation (2025 rules).
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total assets (sum of every asset bucket) |
//! | 2    | Total debts (sum of every debt bucket) |
//! | 3    | Net assets (Step 1 - Step 2, may be negative) |
//! | 4    | Total deductions (elected amounts, capped at Step 3) |
//! | 5    | Taxable amount (Step 3 - Step 4, minimum 0) |
//! | 6    | Bracket lookup (`min < taxable <= max`) |
//! | 7    | Calculated tax (Step 5 × rate - progressive deduction, minimum 0) |
//! | 8    | Tax per heir (Step 7 ÷ heirs, 0 when there are no heirs) |
//! | 9    | Final tax (Step 7; no credits in the 2025 schedule) |
//!
//! The calculation is total: every declaration produces a result, and a
//! taxable amount of zero yields a zero rate rather than a lookup failure.
//! Sums and products saturate at the `Decimal` range; callers bound inputs
//! with [`validate_declaration`](crate::validate_declaration).
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use inheritance_core::calculations::InheritanceTaxCalculator;
//! use inheritance_core::schedule::{DeductionSchedule, TaxSchedule};
//! use inheritance_core::{Assets, Declaration, DeductionElections, RealEstateAssets};
//!
//! let declaration = Declaration {
//!     death_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//!     heirs_count: 3,
//!     assets: Assets {
//!         real_estate: RealEstateAssets {
//!             residential: dec!(2000000000),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     },
//!     debts: Default::default(),
//!     deductions: DeductionElections {
//!         basic: true,
//!         ..Default::default()
//!     },
//! };
//!
//! let deductions = DeductionSchedule::korea_2025();
//! let calculator = InheritanceTaxCalculator::new(TaxSchedule::korea_2025(), &deductions);
//! let result = calculator.calculate(&declaration);
//!
//! assert_eq!(result.taxable_amount, dec!(1800000000));
//! assert_eq!(result.final_tax, dec!(560000000));
//! assert_eq!(result.tax_per_heir, dec!(186666666.67));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{cap_at, floor_at_zero, round_half_up};
use crate::models::{Declaration, TaxResult};
use crate::schedule::{DeductionSchedule, TaxSchedule};

/// Calculates inheritance tax using the 2025 statutory schedules.
pub fn calculate(declaration: &Declaration) -> TaxResult {
    let deductions = DeductionSchedule::korea_2025();
    InheritanceTaxCalculator::new(TaxSchedule::korea_2025(), &deductions).calculate(declaration)
}

/// Rate and progressive deduction applied to a taxable amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AppliedRate {
    rate: Decimal,
    progressive_deduction: Decimal,
}

impl AppliedRate {
    const NONE: Self = Self {
        rate: Decimal::ZERO,
        progressive_deduction: Decimal::ZERO,
    };
}

/// Calculator for inheritance tax over a rate and deduction schedule.
///
/// Holds no state between calls; the same declaration always yields the same
/// result.
#[derive(Debug, Clone, Copy)]
pub struct InheritanceTaxCalculator<'a> {
    schedule: &'a TaxSchedule,
    deductions: &'a DeductionSchedule,
}

impl<'a> InheritanceTaxCalculator<'a> {
    pub fn new(
        schedule: &'a TaxSchedule,
        deductions: &'a DeductionSchedule,
    ) -> Self {
        Self {
            schedule,
            deductions,
        }
    }

    /// Runs every calculation step and returns the full breakdown.
    pub fn calculate(
        &self,
        declaration: &Declaration,
    ) -> TaxResult {
        let total_assets = declaration.assets.total();
        let total_debts = declaration.debts.total();
        let net_assets = self.net_assets(total_assets, total_debts);

        let elected = self.deductions.amount_for(&declaration.deductions);
        let total_deductions = self.total_deductions(elected, net_assets);
        let taxable_amount = self.taxable_amount(net_assets, total_deductions);

        let applied = self.applied_rate(taxable_amount);
        let calculated_tax = self.bracket_tax(taxable_amount, applied);
        let tax_per_heir = self.tax_per_heir(calculated_tax, declaration.heirs_count);

        debug!(
            %taxable_amount,
            rate = %applied.rate,
            %calculated_tax,
            heirs = declaration.heirs_count,
            "inheritance tax calculated"
        );

        TaxResult {
            total_assets,
            total_debts,
            net_assets,
            total_deductions,
            taxable_amount,
            tax_rate: applied.rate,
            progressive_deduction: applied.progressive_deduction,
            calculated_tax,
            tax_per_heir,
            final_tax: calculated_tax,
        }
    }

    fn net_assets(
        &self,
        total_assets: Decimal,
        total_debts: Decimal,
    ) -> Decimal {
        total_assets.saturating_sub(total_debts)
    }

    /// Deductions never exceed net assets. When net assets are negative the
    /// cap follows them below zero so the taxable amount still comes out 0.
    fn total_deductions(
        &self,
        elected: Decimal,
        net_assets: Decimal,
    ) -> Decimal {
        cap_at(elected, net_assets)
    }

    fn taxable_amount(
        &self,
        net_assets: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        floor_at_zero(net_assets.saturating_sub(total_deductions))
    }

    fn applied_rate(
        &self,
        taxable_amount: Decimal,
    ) -> AppliedRate {
        self.schedule
            .bracket_for(taxable_amount)
            .map_or(AppliedRate::NONE, |bracket| AppliedRate {
                rate: bracket.rate,
                progressive_deduction: bracket.progressive_deduction,
            })
    }

    fn bracket_tax(
        &self,
        taxable_amount: Decimal,
        applied: AppliedRate,
    ) -> Decimal {
        let gross = taxable_amount.saturating_mul(applied.rate);
        round_half_up(floor_at_zero(
            gross.saturating_sub(applied.progressive_deduction),
        ))
    }

    fn tax_per_heir(
        &self,
        calculated_tax: Decimal,
        heirs_count: u32,
    ) -> Decimal {
        if heirs_count == 0 {
            return Decimal::ZERO;
        }
        round_half_up(calculated_tax / Decimal::from(heirs_count))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{
        Assets, Debts, DeductionElections, FinancialAssets, FinancialDebts, FuneralCosts,
        RealEstateAssets, TaxBracket,
    };

    fn declaration(
        residential: Decimal,
        mortgage: Decimal,
        deductions: DeductionElections,
    ) -> Declaration {
        Declaration {
            death_date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date"),
            heirs_count: 1,
            assets: Assets {
                real_estate: RealEstateAssets {
                    residential,
                    ..Default::default()
                },
                ..Default::default()
            },
            debts: Debts {
                financial: FinancialDebts {
                    mortgage,
                    ..Default::default()
                },
                ..Default::default()
            },
            deductions,
        }
    }

    fn basic_only() -> DeductionElections {
        DeductionElections {
            basic: true,
            ..Default::default()
        }
    }

    fn with_calculator<T>(f: impl FnOnce(InheritanceTaxCalculator<'_>) -> T) -> T {
        let deductions = DeductionSchedule::korea_2025();
        f(InheritanceTaxCalculator::new(
            TaxSchedule::korea_2025(),
            &deductions,
        ))
    }

    // =========================================================================
    // total_deductions tests
    // =========================================================================

    #[test]
    fn total_deductions_below_net_assets_pass_through() {
        let result = with_calculator(|c| c.total_deductions(dec!(200000000), dec!(2000000000)));

        assert_eq!(result, dec!(200000000));
    }

    #[test]
    fn total_deductions_capped_at_net_assets() {
        let result = with_calculator(|c| c.total_deductions(dec!(800000000), dec!(300000000)));

        assert_eq!(result, dec!(300000000));
    }

    #[test]
    fn total_deductions_follow_negative_net_assets() {
        let result = with_calculator(|c| c.total_deductions(dec!(200000000), dec!(-50000000)));

        assert_eq!(result, dec!(-50000000));
    }

    // =========================================================================
    // taxable_amount tests
    // =========================================================================

    #[test]
    fn taxable_amount_subtracts_deductions() {
        let result = with_calculator(|c| c.taxable_amount(dec!(2000000000), dec!(200000000)));

        assert_eq!(result, dec!(1800000000));
    }

    #[test]
    fn taxable_amount_is_zero_when_net_assets_equal_deductions() {
        let result = with_calculator(|c| c.taxable_amount(dec!(-50000000), dec!(-50000000)));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // applied_rate / bracket_tax tests
    // =========================================================================

    #[test]
    fn zero_taxable_amount_applies_no_rate() {
        let applied = with_calculator(|c| c.applied_rate(dec!(0)));

        assert_eq!(applied, AppliedRate::NONE);
    }

    #[test]
    fn bracket_tax_first_bracket() {
        let tax = with_calculator(|c| c.bracket_tax(dec!(50000000), c.applied_rate(dec!(50000000))));

        assert_eq!(tax, dec!(5000000));
    }

    #[test]
    fn bracket_tax_second_bracket() {
        let tax =
            with_calculator(|c| c.bracket_tax(dec!(300000000), c.applied_rate(dec!(300000000))));

        // 300,000,000 × 0.20 - 10,000,000
        assert_eq!(tax, dec!(50000000));
    }

    #[test]
    fn bracket_tax_third_bracket() {
        let tax =
            with_calculator(|c| c.bracket_tax(dec!(800000000), c.applied_rate(dec!(800000000))));

        // 800,000,000 × 0.30 - 60,000,000
        assert_eq!(tax, dec!(180000000));
    }

    #[test]
    fn bracket_tax_top_bracket() {
        let tax =
            with_calculator(|c| c.bracket_tax(dec!(5000000000), c.applied_rate(dec!(5000000000))));

        // 5,000,000,000 × 0.50 - 460,000,000
        assert_eq!(tax, dec!(2040000000));
    }

    #[test]
    fn bracket_tax_is_continuous_at_every_boundary() {
        let brackets = TaxSchedule::korea_2025().brackets();

        for pair in brackets.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            let boundary = lower.max_amount.expect("bounded bracket");

            let from_lower = with_calculator(|c| c.bracket_tax(boundary, c.applied_rate(boundary)));
            let from_upper = boundary * upper.rate - upper.progressive_deduction;

            assert_eq!(from_lower, from_upper, "discontinuity at {boundary}");
        }
    }

    #[test]
    fn bracket_tax_never_negative() {
        let applied = AppliedRate {
            rate: dec!(0.20),
            progressive_deduction: dec!(10000000),
        };

        let tax = with_calculator(|c| c.bracket_tax(dec!(1), applied));

        assert_eq!(tax, dec!(0));
    }

    #[test]
    fn custom_schedule_is_honoured() {
        let schedule = TaxSchedule::new(vec![
            TaxBracket {
                min_amount: dec!(0),
                max_amount: Some(dec!(1000)),
                rate: dec!(0.05),
                progressive_deduction: dec!(0),
            },
            TaxBracket {
                min_amount: dec!(1000),
                max_amount: None,
                rate: dec!(0.15),
                progressive_deduction: dec!(100),
            },
        ])
        .expect("valid schedule");
        let deductions = DeductionSchedule {
            basic: dec!(500),
            spouse: dec!(0),
            disabled: dec!(0),
            minor: dec!(0),
        };
        let calculator = InheritanceTaxCalculator::new(&schedule, &deductions);

        let result = calculator.calculate(&declaration(dec!(3500), dec!(0), basic_only()));

        assert_eq!(result.taxable_amount, dec!(3000));
        assert_eq!(result.calculated_tax, dec!(350));
    }

    // =========================================================================
    // tax_per_heir tests
    // =========================================================================

    #[test]
    fn tax_per_heir_splits_evenly() {
        let result = with_calculator(|c| c.tax_per_heir(dec!(560000000), 3));

        assert_eq!(result, dec!(186666666.67));
    }

    #[test]
    fn tax_per_heir_zero_heirs_is_zero() {
        let result = with_calculator(|c| c.tax_per_heir(dec!(560000000), 0));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_empty_declaration_is_all_zero() {
        let result = calculate(&declaration(dec!(0), dec!(0), DeductionElections::default()));

        assert_eq!(
            result,
            TaxResult {
                total_assets: dec!(0),
                total_debts: dec!(0),
                net_assets: dec!(0),
                total_deductions: dec!(0),
                taxable_amount: dec!(0),
                tax_rate: dec!(0),
                progressive_deduction: dec!(0),
                calculated_tax: dec!(0),
                tax_per_heir: dec!(0),
                final_tax: dec!(0),
            }
        );
    }

    #[test]
    fn calculate_deductions_absorb_modest_estate() {
        let elections = DeductionElections {
            basic: true,
            spouse: true,
            ..Default::default()
        };

        let result = calculate(&declaration(dec!(450000000), dec!(150000000), elections));

        assert_eq!(result.net_assets, dec!(300000000));
        assert_eq!(result.total_deductions, dec!(300000000));
        assert_eq!(result.taxable_amount, dec!(0));
        assert_eq!(result.tax_rate, dec!(0));
        assert_eq!(result.final_tax, dec!(0));
    }

    #[test]
    fn calculate_large_estate_with_basic_deduction() {
        let mut input = declaration(dec!(2000000000), dec!(0), basic_only());
        input.heirs_count = 3;

        let result = calculate(&input);

        assert_eq!(result.net_assets, dec!(2000000000));
        assert_eq!(result.total_deductions, dec!(200000000));
        assert_eq!(result.taxable_amount, dec!(1800000000));
        assert_eq!(result.tax_rate, dec!(0.40));
        assert_eq!(result.progressive_deduction, dec!(160000000));
        assert_eq!(result.calculated_tax, dec!(560000000));
        assert_eq!(result.final_tax, dec!(560000000));
        assert_eq!(result.tax_per_heir, dec!(186666666.67));
    }

    #[test]
    fn calculate_debts_exceeding_assets_owes_nothing() {
        let result = calculate(&declaration(dec!(100000000), dec!(400000000), basic_only()));

        assert_eq!(result.net_assets, dec!(-300000000));
        assert_eq!(result.total_deductions, dec!(-300000000));
        assert_eq!(result.taxable_amount, dec!(0));
        assert_eq!(result.final_tax, dec!(0));
    }

    #[test]
    fn calculate_negative_bucket_passes_through() {
        let mut input = declaration(dec!(500000000), dec!(0), DeductionElections::default());
        input.assets.financial = FinancialAssets {
            deposits: dec!(-100000000),
            ..Default::default()
        };

        let result = calculate(&input);

        assert_eq!(result.total_assets, dec!(400000000));
    }

    #[test]
    fn calculate_sums_across_debt_categories() {
        let mut input = declaration(dec!(1000000000), dec!(100000000), DeductionElections::default());
        input.debts.funeral = FuneralCosts {
            funeral: dec!(10000000),
            burial: dec!(5000000),
        };

        let result = calculate(&input);

        assert_eq!(result.total_debts, dec!(115000000));
        assert_eq!(result.net_assets, dec!(885000000));
    }

    #[test]
    fn calculate_is_monotonic_in_every_asset_category() {
        fn set_bucket(assets: &mut Assets, name: &str, value: Decimal) {
            match name {
                "realEstate.residential" => assets.real_estate.residential = value,
                "financial.deposits" => assets.financial.deposits = value,
                "insurance.life" => assets.insurance.life = value,
                "business.unlistedShares" => assets.business.unlisted_shares = value,
                "movables.art" => assets.movables.art = value,
                "other.receivables" => assets.other.receivables = value,
                other => panic!("no bucket {other}"),
            }
        }

        for name in [
            "realEstate.residential",
            "financial.deposits",
            "insurance.life",
            "business.unlistedShares",
            "movables.art",
            "other.receivables",
        ] {
            let mut input = declaration(dec!(0), dec!(100000000), basic_only());
            let mut previous = Decimal::ZERO;

            for step in 0..80 {
                set_bucket(&mut input.assets, name, Decimal::from(step) * dec!(50000000));
                let result = calculate(&input);

                assert!(
                    result.final_tax >= previous,
                    "tax fell from {previous} to {} raising {name} to step {step}",
                    result.final_tax
                );
                previous = result.final_tax;
            }
        }
    }

    #[test]
    fn calculate_does_not_panic_at_decimal_range() {
        let mut input = declaration(Decimal::MAX, dec!(0), basic_only());
        input.assets.real_estate.land = Decimal::MAX;
        input.heirs_count = 3;

        let result = calculate(&input);

        assert_eq!(result.total_assets, Decimal::MAX);
        assert_eq!(result.tax_rate, dec!(0.50));
        assert!(result.final_tax > Decimal::ZERO);
        assert!(result.tax_per_heir > Decimal::ZERO);
    }

    #[test]
    fn calculate_taxable_amount_never_negative() {
        for (assets, debts) in [(0, 0), (1, 0), (0, 1), (300_000_000, 500_000_000)] {
            let result = calculate(&declaration(
                Decimal::from(assets),
                Decimal::from(debts),
                basic_only(),
            ));

            assert!(result.taxable_amount >= Decimal::ZERO);
            assert!(result.calculated_tax >= Decimal::ZERO);
            if result.net_assets >= Decimal::ZERO {
                assert!(result.total_deductions <= result.net_assets);
            }
        }
    }

    #[test]
    fn calculate_is_idempotent() {
        let input = declaration(dec!(3700000000), dec!(250000000), basic_only());

        assert_eq!(calculate(&input), calculate(&input));
    }
}
