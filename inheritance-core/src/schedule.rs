//! Statutory rate and deduction schedules for Korean inheritance tax.
//!
//! A [`TaxSchedule`] can only be built from brackets that tile `(0, ∞)`
//! without gaps, so looking up the bracket for any positive taxable amount
//! always succeeds.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{DeductionElections, TaxBracket};

/// Reasons a list of brackets cannot form a schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("no tax brackets provided")]
    Empty,

    #[error("first bracket must start at 0, starts at {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket {index} starts at {min} but the previous bracket ends at {previous_max}")]
    NotContiguous {
        index: usize,
        min: Decimal,
        previous_max: Decimal,
    },

    #[error("bracket {index} has an upper bound {max} not above its lower bound {min}")]
    EmptyRange {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeLast(usize),

    #[error("last bracket must be unbounded")]
    BoundedLast,

    #[error("bracket {index} has rate {rate} outside [0, 1]")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// An ordered, gap-free progressive rate schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Validates `brackets` and wraps them in a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the brackets do not start at zero, leave
    /// a gap or overlap, end in a bounded bracket, or carry a rate outside
    /// `[0, 1]`.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        let first = brackets.first().ok_or(ScheduleError::Empty)?;
        if !first.min_amount.is_zero() {
            return Err(ScheduleError::FirstBracketNotAtZero(first.min_amount));
        }

        let last_index = brackets.len() - 1;
        let mut previous_max = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }
            if bracket.min_amount != previous_max {
                return Err(ScheduleError::NotContiguous {
                    index,
                    min: bracket.min_amount,
                    previous_max,
                });
            }
            match bracket.max_amount {
                Some(max) if max <= bracket.min_amount => {
                    return Err(ScheduleError::EmptyRange {
                        index,
                        min: bracket.min_amount,
                        max,
                    });
                }
                Some(_) if index == last_index => return Err(ScheduleError::BoundedLast),
                Some(max) => previous_max = max,
                None if index != last_index => {
                    return Err(ScheduleError::UnboundedBeforeLast(index));
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// The 2025 inheritance tax rate schedule.
    ///
    /// | taxable amount (won)      | rate | progressive deduction |
    /// |---------------------------|------|-----------------------|
    /// | ≤ 100,000,000             | 10%  | 0                     |
    /// | ≤ 500,000,000             | 20%  | 10,000,000            |
    /// | ≤ 1,000,000,000           | 30%  | 60,000,000            |
    /// | ≤ 3,000,000,000           | 40%  | 160,000,000           |
    /// | above                     | 50%  | 460,000,000           |
    pub fn korea_2025() -> &'static TaxSchedule {
        static SCHEDULE: LazyLock<TaxSchedule> = LazyLock::new(|| TaxSchedule {
            brackets: vec![
                bracket(0, Some(100_000_000), 10, 0),
                bracket(100_000_000, Some(500_000_000), 20, 10_000_000),
                bracket(500_000_000, Some(1_000_000_000), 30, 60_000_000),
                bracket(1_000_000_000, Some(3_000_000_000), 40, 160_000_000),
                bracket(3_000_000_000, None, 50, 460_000_000),
            ],
        });
        &SCHEDULE
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Finds the bracket with `min < amount <= max`.
    ///
    /// Returns `None` only for amounts at or below zero, which carry no tax.
    pub fn bracket_for(
        &self,
        amount: Decimal,
    ) -> Option<&TaxBracket> {
        if amount <= Decimal::ZERO {
            return None;
        }
        self.brackets.iter().find(|b| b.contains(amount))
    }
}

fn bracket(
    min: i64,
    max: Option<i64>,
    rate_percent: i64,
    progressive_deduction: i64,
) -> TaxBracket {
    TaxBracket {
        min_amount: Decimal::from(min),
        max_amount: max.map(Decimal::from),
        rate: Decimal::new(rate_percent, 2),
        progressive_deduction: Decimal::from(progressive_deduction),
    }
}

/// Fixed amounts granted for each deduction election.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionSchedule {
    pub basic: Decimal,
    pub spouse: Decimal,
    pub disabled: Decimal,
    pub minor: Decimal,
}

impl DeductionSchedule {
    pub fn korea_2025() -> Self {
        Self {
            basic: Decimal::from(200_000_000),
            spouse: Decimal::from(600_000_000),
            disabled: Decimal::from(100_000_000),
            minor: Decimal::from(100_000_000),
        }
    }

    /// Sums the amounts for every elected deduction.
    ///
    /// Elections are independent: basic and spouse both count when both are
    /// elected.
    pub fn amount_for(
        &self,
        elections: &DeductionElections,
    ) -> Decimal {
        [
            (elections.basic, self.basic),
            (elections.spouse, self.spouse),
            (elections.disabled, self.disabled),
            (elections.minor, self.minor),
        ]
        .into_iter()
        .filter(|(elected, _)| *elected)
        .map(|(_, amount)| amount)
        .sum()
    }
}

impl Default for DeductionSchedule {
    fn default() -> Self {
        Self::korea_2025()
    }
}
