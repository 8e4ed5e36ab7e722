use serde::{Deserialize, Serialize};

/// Statutory deductions the heirs elect to claim.
///
/// Each election is worth a fixed amount taken from a
/// [`DeductionSchedule`](crate::schedule::DeductionSchedule).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeductionElections {
    pub basic: bool,
    pub spouse: bool,
    pub disabled: bool,
    pub minor: bool,
}
