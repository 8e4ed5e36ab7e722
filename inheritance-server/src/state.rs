use std::sync::Arc;

use inheritance_core::db::MemoryRepository;
use inheritance_core::{
    DeclarationRepository, DeductionSchedule, InheritanceTaxCalculator, TaxSchedule,
};

/// Shared handler state, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn DeclarationRepository>,
    pub schedule: Arc<TaxSchedule>,
    pub deductions: DeductionSchedule,
}

impl AppState {
    pub fn new(repository: Arc<dyn DeclarationRepository>, schedule: TaxSchedule) -> Self {
        Self {
            repository,
            schedule: Arc::new(schedule),
            deductions: DeductionSchedule::korea_2025(),
        }
    }

    /// In-memory store and the 2025 statutory schedules.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryRepository::new()),
            TaxSchedule::korea_2025().clone(),
        )
    }

    pub fn calculator(&self) -> InheritanceTaxCalculator<'_> {
        InheritanceTaxCalculator::new(&self.schedule, &self.deductions)
    }
}
