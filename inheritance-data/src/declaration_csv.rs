//! CSV loader for declarations.
//!
//! ## CSV Format
//!
//! One declaration per row. Column order does **not** matter (headers are
//! matched by name). Only `death_date` and `heirs_count` are required; every
//! other column may be left out entirely or left empty, meaning zero / not
//! elected. Amounts are whole won and may use comma thousands separators
//! (quote the cell).
//!
//! | Column group | Columns |
//! |--------------|---------|
//! | identity     | `death_date` (`YYYY-MM-DD`), `heirs_count` |
//! | real estate  | `real_estate_residential`, `real_estate_commercial`, `real_estate_land`, `real_estate_other` |
//! | financial    | `financial_deposits`, `financial_securities`, `financial_bonds`, `financial_funds`, `financial_other` |
//! | insurance    | `insurance_life`, `insurance_annuity`, `insurance_other` |
//! | business     | `business_unlisted_shares`, `business_partnership_interest`, `business_operating_assets` |
//! | movables     | `movables_vehicles`, `movables_art`, `movables_jewelry`, `movables_other` |
//! | other assets | `other_receivables`, `other_intellectual_property`, `other_other` |
//! | debts        | `debt_funeral`, `debt_burial`, `debt_mortgage`, `debt_loans`, `debt_credit_cards`, `debt_financial_other`, `debt_income_tax`, `debt_property_tax`, `debt_taxes_other`, `debt_lease_deposits`, `debt_guarantees`, `debt_other` |
//! | deductions   | `deduction_basic`, `deduction_spouse`, `deduction_disabled`, `deduction_minor` (`true`/`false`, `1`/`0`, `y`/`n`, empty = false) |
//!
//! ### Minimal example
//!
//! ```csv
//! death_date,heirs_count,real_estate_residential,debt_mortgage,deduction_basic
//! 2025-01-15,2,"450,000,000","150,000,000",true
//! ```
use std::path::Path;

use chrono::NaiveDate;
use inheritance_core::format::parse_won;
use inheritance_core::{
    Assets, BusinessAssets, Debts, Declaration, DeductionElections, FinancialAssets,
    FinancialDebts, FuneralCosts, InsuranceAssets, MovableAssets, OtherAssets, OtherDebts,
    RealEstateAssets, TaxDebts, ValidationError, validate_declaration,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    death_date: NaiveDate,
    heirs_count: u32,

    #[serde(default, deserialize_with = "won")]
    real_estate_residential: Decimal,
    #[serde(default, deserialize_with = "won")]
    real_estate_commercial: Decimal,
    #[serde(default, deserialize_with = "won")]
    real_estate_land: Decimal,
    #[serde(default, deserialize_with = "won")]
    real_estate_other: Decimal,

    #[serde(default, deserialize_with = "won")]
    financial_deposits: Decimal,
    #[serde(default, deserialize_with = "won")]
    financial_securities: Decimal,
    #[serde(default, deserialize_with = "won")]
    financial_bonds: Decimal,
    #[serde(default, deserialize_with = "won")]
    financial_funds: Decimal,
    #[serde(default, deserialize_with = "won")]
    financial_other: Decimal,

    #[serde(default, deserialize_with = "won")]
    insurance_life: Decimal,
    #[serde(default, deserialize_with = "won")]
    insurance_annuity: Decimal,
    #[serde(default, deserialize_with = "won")]
    insurance_other: Decimal,

    #[serde(default, deserialize_with = "won")]
    business_unlisted_shares: Decimal,
    #[serde(default, deserialize_with = "won")]
    business_partnership_interest: Decimal,
    #[serde(default, deserialize_with = "won")]
    business_operating_assets: Decimal,

    #[serde(default, deserialize_with = "won")]
    movables_vehicles: Decimal,
    #[serde(default, deserialize_with = "won")]
    movables_art: Decimal,
    #[serde(default, deserialize_with = "won")]
    movables_jewelry: Decimal,
    #[serde(default, deserialize_with = "won")]
    movables_other: Decimal,

    #[serde(default, deserialize_with = "won")]
    other_receivables: Decimal,
    #[serde(default, deserialize_with = "won")]
    other_intellectual_property: Decimal,
    #[serde(default, deserialize_with = "won")]
    other_other: Decimal,

    #[serde(default, deserialize_with = "won")]
    debt_funeral: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_burial: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_mortgage: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_loans: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_credit_cards: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_financial_other: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_income_tax: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_property_tax: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_taxes_other: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_lease_deposits: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_guarantees: Decimal,
    #[serde(default, deserialize_with = "won")]
    debt_other: Decimal,

    #[serde(default, deserialize_with = "flag")]
    deduction_basic: bool,
    #[serde(default, deserialize_with = "flag")]
    deduction_spouse: bool,
    #[serde(default, deserialize_with = "flag")]
    deduction_disabled: bool,
    #[serde(default, deserialize_with = "flag")]
    deduction_minor: bool,
}

fn won<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_won(&s).map_err(serde::de::Error::custom)
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "n" | "no" => Ok(false),
        "true" | "1" | "y" | "yes" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid flag '{other}', expected true/false"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, unparseable amount, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The row parsed but describes a declaration the calculator must not
    /// see. `row` is 1-based (header = row 0).
    #[error("row {row}: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

impl From<CsvRow> for Declaration {
    fn from(row: CsvRow) -> Self {
        Declaration {
            death_date: row.death_date,
            heirs_count: row.heirs_count,
            assets: Assets {
                real_estate: RealEstateAssets {
                    residential: row.real_estate_residential,
                    commercial: row.real_estate_commercial,
                    land: row.real_estate_land,
                    other: row.real_estate_other,
                },
                financial: FinancialAssets {
                    deposits: row.financial_deposits,
                    securities: row.financial_securities,
                    bonds: row.financial_bonds,
                    funds: row.financial_funds,
                    other: row.financial_other,
                },
                insurance: InsuranceAssets {
                    life: row.insurance_life,
                    annuity: row.insurance_annuity,
                    other: row.insurance_other,
                },
                business: BusinessAssets {
                    unlisted_shares: row.business_unlisted_shares,
                    partnership_interest: row.business_partnership_interest,
                    operating_assets: row.business_operating_assets,
                },
                movables: MovableAssets {
                    vehicles: row.movables_vehicles,
                    art: row.movables_art,
                    jewelry: row.movables_jewelry,
                    other: row.movables_other,
                },
                other: OtherAssets {
                    receivables: row.other_receivables,
                    intellectual_property: row.other_intellectual_property,
                    other: row.other_other,
                },
            },
            debts: Debts {
                funeral: FuneralCosts {
                    funeral: row.debt_funeral,
                    burial: row.debt_burial,
                },
                financial: FinancialDebts {
                    mortgage: row.debt_mortgage,
                    loans: row.debt_loans,
                    credit_cards: row.debt_credit_cards,
                    other: row.debt_financial_other,
                },
                taxes: TaxDebts {
                    income_tax: row.debt_income_tax,
                    property_tax: row.debt_property_tax,
                    other: row.debt_taxes_other,
                },
                other: OtherDebts {
                    lease_deposits: row.debt_lease_deposits,
                    guarantees: row.debt_guarantees,
                    other: row.debt_other,
                },
            },
            deductions: DeductionElections {
                basic: row.deduction_basic,
                spouse: row.deduction_spouse,
                disabled: row.deduction_disabled,
                minor: row.deduction_minor,
            },
        }
    }
}

/// Parse CSV text and return validated declarations in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] if the CSV is structurally invalid or a field
///   cannot be deserialised.
/// * [CsvLoadError::Invalid] if a row has no heirs or an amount that is
///   negative or above [`inheritance_core::validation::MAX_AMOUNT`].
pub fn load_from_str(input: &str) -> Result<Vec<Declaration>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let declaration = Declaration::from(result?);
            validate_declaration(&declaration).map_err(|source| CsvLoadError::Invalid {
                row: idx + 1,
                source,
            })?;
            Ok(declaration)
        })
        .collect()
}

/// Read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<Declaration>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
