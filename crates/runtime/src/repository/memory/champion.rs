//! In-memory ChampionRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use champion_core::ChampionRecord;

use crate::repository::{ChampionRepository, RepositoryError, Result};

/// In-memory implementation of ChampionRepository.
///
/// Stores records indexed by champion name.
pub struct InMemoryChampionRepo {
    records: RwLock<HashMap<String, ChampionRecord>>,
}

impl InMemoryChampionRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create with records already stored.
    pub fn with_records(records: impl IntoIterator<Item = ChampionRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

impl Default for InMemoryChampionRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ChampionRepository for InMemoryChampionRepo {
    fn save(&self, record: &ChampionRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(record.name.clone(), record.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<ChampionRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(name).cloned())
    }

    fn exists(&self, name: &str) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(name))
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.remove(name);
        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut names: Vec<String> = records.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }
}
