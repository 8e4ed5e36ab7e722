use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DeclarationRecord, NewDeclarationRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Storage for submitted declarations and their calculated results, keyed
/// by the submitting user.
#[async_trait]
pub trait DeclarationRepository: Send + Sync {
    async fn create(
        &self,
        record: NewDeclarationRecord,
    ) -> Result<DeclarationRecord, RepositoryError>;

    async fn get(&self, id: i64) -> Result<DeclarationRecord, RepositoryError>;

    /// All records for `user_id`, oldest first.
    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<DeclarationRecord>, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
