//! Bulk input for the inheritance tax calculator: rate schedules and
//! declarations read from CSV.

pub mod declaration_csv;
pub mod schedule_loader;

pub use declaration_csv::CsvLoadError;
pub use schedule_loader::{BracketRecord, ScheduleLoader, ScheduleLoaderError};
