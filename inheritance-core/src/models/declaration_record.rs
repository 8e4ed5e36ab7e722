use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Declaration, TaxResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRecord {
    pub id: i64,
    pub user_id: String,
    pub decedent_name: String,
    pub declaration: Declaration,
    pub result: TaxResult,
    pub created_at: DateTime<Utc>,
}

/// For storing new declarations (no id or timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeclarationRecord {
    pub user_id: String,
    pub decedent_name: String,
    pub declaration: Declaration,
    pub result: TaxResult,
}
