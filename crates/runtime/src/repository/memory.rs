use std::sync::RwLock;

use super::error::{RepositoryError, Result};
use super::{SaveRecord, SetupRepository};

/// In-memory implementation of SetupRepository
#[derive(Debug, Default)]
pub struct InMemorySetupRepository {
    record: RwLock<Option<SaveRecord>>,
}

impl InMemorySetupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SetupRepository for InMemorySetupRepository {
    fn save(&self, record: &SaveRecord) -> Result<()> {
        let mut current = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(*record);
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveRecord>> {
        let current = self
            .record
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(*current)
    }

    fn exists(&self) -> bool {
        self.record.read().map(|r| r.is_some()).unwrap_or(false)
    }

    fn clear(&self) -> Result<()> {
        let mut current = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = None;
        Ok(())
    }
}
