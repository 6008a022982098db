//! Save/load contract between live champions and a repository.
//!
//! Saving writes the champion's record under its name, replacing any
//! previous record. Loading rebuilds the champion from its class template and
//! restores the saved stats; level, experience, and stat points start fresh.

use champion_core::{Champion, ChampionRecord};

use crate::error::{Result, RuntimeError};
use crate::repository::{ChampionRepository, RepositoryError};

/// Persist `champion` through `repository`.
pub fn save_champion<R>(repository: &R, champion: &Champion) -> Result<()>
where
    R: ChampionRepository + ?Sized,
{
    let record = ChampionRecord::from_champion(champion);
    repository.save(&record)?;
    tracing::info!(champion = %champion.name(), class = champion.class_type(), "champion saved");
    Ok(())
}

/// Load the champion saved under `name`.
///
/// A missing record is [`RuntimeError::NotFound`]; a record that cannot be
/// parsed, names an unknown class, race, or gender, or carries a name other
/// than the one it is stored under is [`RuntimeError::CorruptRecord`].
pub fn load_champion<R>(repository: &R, name: &str) -> Result<Champion>
where
    R: ChampionRepository + ?Sized,
{
    let record = match repository.load(name) {
        Ok(Some(record)) => record,
        Ok(None) => return Err(RuntimeError::NotFound(name.to_owned())),
        Err(RepositoryError::Json(reason)) => {
            return Err(RuntimeError::CorruptRecord {
                name: name.to_owned(),
                reason,
            });
        }
        Err(err) => return Err(err.into()),
    };

    if record.name != name {
        return Err(RuntimeError::CorruptRecord {
            name: name.to_owned(),
            reason: format!("record is stored under {name:?} but names {:?}", record.name),
        });
    }

    let champion = record
        .to_champion()
        .map_err(|err| RuntimeError::CorruptRecord {
            name: name.to_owned(),
            reason: err.to_string(),
        })?;

    tracing::info!(champion = %champion.name(), class = champion.class_type(), "champion loaded");
    Ok(champion)
}
