pub mod calculations;
pub mod db;
pub mod format;
pub mod models;
pub mod schedule;
pub mod validation;

pub use calculations::{InheritanceTaxCalculator, calculate};
pub use db::repository::{DeclarationRepository, RepositoryError};
pub use models::*;
pub use schedule::{DeductionSchedule, ScheduleError, TaxSchedule};
pub use validation::{ValidationError, validate_declaration};
