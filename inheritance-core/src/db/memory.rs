//! Process-local declaration store.
//!
//! Records live for the lifetime of the process. Ids are assigned from 1
//! in insertion order and never reused.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::repository::{DeclarationRepository, RepositoryError};
use crate::models::{DeclarationRecord, NewDeclarationRecord};

#[derive(Debug, Default)]
struct Records {
    last_id: i64,
    by_id: BTreeMap<i64, DeclarationRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: RwLock<Records>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, RepositoryError> {
        self.records
            .read()
            .map_err(|e| RepositoryError::Database(format!("store lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, RepositoryError> {
        self.records
            .write()
            .map_err(|e| RepositoryError::Database(format!("store lock poisoned: {e}")))
    }
}

#[async_trait]
impl DeclarationRepository for MemoryRepository {
    async fn create(
        &self,
        record: NewDeclarationRecord,
    ) -> Result<DeclarationRecord, RepositoryError> {
        let mut records = self.write()?;
        records.last_id += 1;
        let stored = DeclarationRecord {
            id: records.last_id,
            user_id: record.user_id,
            decedent_name: record.decedent_name,
            declaration: record.declaration,
            result: record.result,
            created_at: Utc::now(),
        };
        records.by_id.insert(stored.id, stored.clone());
        debug!(id = stored.id, "declaration stored");
        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<DeclarationRecord, RepositoryError> {
        self.read()?
            .by_id
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<DeclarationRecord>, RepositoryError> {
        Ok(self
            .read()?
            .by_id
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.write()?
            .by_id
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
