//! Repository contract for saving and loading champion records.

use champion_core::ChampionRecord;

use super::Result;

/// Durable store of champion records keyed by champion name.
///
/// One record per name; saving a record whose name already exists replaces
/// it.
pub trait ChampionRepository: Send + Sync {
    /// Save a record under `record.name`, replacing any previous one.
    fn save(&self, record: &ChampionRecord) -> Result<()>;

    /// Load the record stored under `name`.
    fn load(&self, name: &str) -> Result<Option<ChampionRecord>>;

    /// Check if a record exists.
    fn exists(&self, name: &str) -> bool;

    /// Delete a record. Deleting a missing record is not an error.
    fn delete(&self, name: &str) -> Result<()>;

    /// List all stored champion names, sorted.
    fn list_names(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

impl<R: ChampionRepository + ?Sized> ChampionRepository for Box<R> {
    fn save(&self, record: &ChampionRecord) -> Result<()> {
        (**self).save(record)
    }

    fn load(&self, name: &str) -> Result<Option<ChampionRecord>> {
        (**self).load(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn delete(&self, name: &str) -> Result<()> {
        (**self).delete(name)
    }

    fn list_names(&self) -> Result<Vec<String>> {
        (**self).list_names()
    }
}
