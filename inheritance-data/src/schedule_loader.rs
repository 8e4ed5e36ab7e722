use std::io::Read;

use inheritance_core::{ScheduleError, TaxBracket, TaxSchedule};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a rate schedule.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a rate schedule CSV file.
///
/// - `min_amount`: exclusive lower bound of the bracket, in won
/// - `max_amount`: inclusive upper bound (empty for unlimited)
/// - `rate`: the marginal rate as a decimal (e.g., 0.10 for 10%)
/// - `progressive_deduction`: amount subtracted after applying the rate
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub min_amount: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_amount: Option<Decimal>,
    pub rate: Decimal,
    pub progressive_deduction: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl From<&BracketRecord> for TaxBracket {
    fn from(record: &BracketRecord) -> Self {
        TaxBracket {
            min_amount: record.min_amount,
            max_amount: record.max_amount,
            rate: record.rate,
            progressive_deduction: record.progressive_deduction,
        }
    }
}

/// Loader for rate schedules kept in CSV files, so a revised schedule can be
/// tried without rebuilding.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse bracket records from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Validate parsed records as a [`TaxSchedule`]. Records must already be
    /// in ascending order.
    pub fn build(records: &[BracketRecord]) -> Result<TaxSchedule, ScheduleLoaderError> {
        let brackets = records.iter().map(TaxBracket::from).collect();
        Ok(TaxSchedule::new(brackets)?)
    }

    /// Parse and validate in one step.
    pub fn load<R: Read>(reader: R) -> Result<TaxSchedule, ScheduleLoaderError> {
        let records = Self::parse(reader)?;
        Self::build(&records)
    }
}
