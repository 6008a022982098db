//! Construction errors.
//!
//! Raised before a champion exists; a failed construction never produces a
//! partially initialized value.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChampionError {
    /// Champion names must not be empty.
    #[error("Name must not be empty")]
    EmptyName,

    /// Name exceeds [`GameConfig::MAX_NAME_LEN`] characters.
    #[error("Name can only be {max} characters long (got {length})")]
    NameTooLong { length: usize, max: usize },

    /// Race name did not match any known race.
    #[error("Race must be one of the valid races (got {0:?})")]
    UnknownRace(String),

    /// Gender name did not match any known gender.
    #[error("Gender must be one of the valid genders (got {0:?})")]
    UnknownGender(String),

    /// Class discriminator is not in the archetype catalog.
    #[error("unknown champion class {0:?}")]
    UnknownVariant(String),
}

impl ChampionError {
    pub(crate) fn name_too_long(length: usize) -> Self {
        Self::NameTooLong {
            length,
            max: GameConfig::MAX_NAME_LEN,
        }
    }
}

impl GameError for ChampionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ChampionError::*;
        match self {
            EmptyName => "CHAMPION_EMPTY_NAME",
            NameTooLong { .. } => "CHAMPION_NAME_TOO_LONG",
            UnknownRace(_) => "CHAMPION_UNKNOWN_RACE",
            UnknownGender(_) => "CHAMPION_UNKNOWN_GENDER",
            UnknownVariant(_) => "CHAMPION_UNKNOWN_VARIANT",
        }
    }
}
