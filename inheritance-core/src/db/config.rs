use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::memory::MemoryRepository;
use super::repository::{DeclarationRepository, RepositoryError};

/// Backend names [`StoreConfig::open`] accepts.
pub const BACKENDS: &[&str] = &["memory"];

/// Which declaration store to open at startup.
///
/// The store is opened once and the resulting repository is handed to
/// every request handler; nothing reaches for a global client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// One of [`BACKENDS`], matched case-sensitively.
    pub backend: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
        }
    }
}

impl StoreConfig {
    /// Opens the configured backend.
    ///
    /// # Errors
    /// [`RepositoryError::Configuration`] naming the requested and the
    /// accepted backends when `backend` is not one of [`BACKENDS`].
    pub fn open(&self) -> Result<Arc<dyn DeclarationRepository>, RepositoryError> {
        match self.backend.as_str() {
            "memory" => {
                debug!(backend = "memory", "declaration store opened");
                Ok(Arc::new(MemoryRepository::new()))
            }
            other => Err(RepositoryError::Configuration(format!(
                "unknown backend '{other}'; available: {BACKENDS:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::calculate;
    use crate::models::{Assets, Debts, Declaration, DeductionElections, NewDeclarationRecord};

    #[test]
    fn default_backend_is_memory() {
        assert_eq!(StoreConfig::default().backend, "memory");
    }

    #[test]
    fn unknown_backend_is_configuration_error() {
        let config = StoreConfig {
            backend: "postgres".to_string(),
        };

        let Err(err) = config.open() else {
            panic!("postgres should not open");
        };

        assert_eq!(
            err,
            RepositoryError::Configuration(
                "unknown backend 'postgres'; available: [\"memory\"]".to_string()
            )
        );
    }

    #[test]
    fn backend_name_is_case_sensitive() {
        let config = StoreConfig {
            backend: "Memory".to_string(),
        };

        assert!(matches!(
            config.open(),
            Err(RepositoryError::Configuration(_))
        ));
    }

    #[test]
    fn missing_backend_key_deserializes_to_default() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, StoreConfig::default());
    }

    #[tokio::test]
    async fn each_open_is_an_independent_store() {
        let config = StoreConfig::default();
        let first = config.open().unwrap();
        let second = config.open().unwrap();
        let declaration = Declaration {
            death_date: NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date"),
            heirs_count: 1,
            assets: Assets::default(),
            debts: Debts::default(),
            deductions: DeductionElections::default(),
        };
        let result = calculate(&declaration);

        first
            .create(NewDeclarationRecord {
                user_id: "u1".to_string(),
                decedent_name: "Lee Younghee".to_string(),
                declaration,
                result,
            })
            .await
            .unwrap();

        assert_eq!(first.list_for_user("u1").await.unwrap().len(), 1);
        assert!(second.list_for_user("u1").await.unwrap().is_empty());
    }
}
