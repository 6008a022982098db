//! Persisted champion record.
//!
//! Only the projection `{name, race, gender, stats, class_type}` is saved.
//! Equipment and progression are not part of the record: restoring builds a
//! fresh champion of the saved class through the archetype catalog and then
//! overwrites its stats with the saved ones.
//!
//! ```json
//! {
//!   "name": "Ana",
//!   "race": "HUMAN",
//!   "gender": "FEMALE",
//!   "stats": { "health": 5, "attack": 2, "defense": 5, "magic": 5, "speed": 5 },
//!   "class_type": "CLERIC"
//! }
//! ```

use crate::archetype::{Archetype, create_champion};
use crate::champion::{Champion, ChampionError, ChampionName};
use crate::error::{ErrorSeverity, GameError};
use crate::identity::{Gender, Race};
use crate::stats::StatBlock;

/// Saved form of a champion.
///
/// Enumerated values are kept as their names so a record with an unknown
/// race, gender, or class can still be read and then reported as corrupt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChampionRecord {
    pub name: String,
    pub race: String,
    pub gender: String,
    pub stats: StatBlock,
    pub class_type: String,
}

/// A record that cannot be turned back into a champion.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A field holds a value outside its enumeration.
    #[error("field `{field}` has unknown value {value:?}")]
    UnknownValue { field: &'static str, value: String },

    /// The stored name does not pass name validation.
    #[error("stored name is invalid: {0}")]
    InvalidName(#[source] ChampionError),
}

impl GameError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownValue { .. } => "RECORD_UNKNOWN_VALUE",
            Self::InvalidName(_) => "RECORD_INVALID_NAME",
        }
    }
}

impl ChampionRecord {
    pub fn from_champion(champion: &Champion) -> Self {
        Self {
            name: champion.name().to_owned(),
            race: champion.race().to_string(),
            gender: champion.gender().to_string(),
            stats: *champion.stats(),
            class_type: champion.class_type().to_owned(),
        }
    }

    /// Rebuilds the champion this record describes.
    ///
    /// The result has the archetype's equipment and fresh progression, with
    /// the saved stats in place of the archetype's base stats.
    pub fn to_champion(&self) -> Result<Champion, RecordError> {
        let archetype =
            Archetype::from_class_type(&self.class_type).map_err(|_| RecordError::UnknownValue {
                field: "class_type",
                value: self.class_type.clone(),
            })?;
        let race = self
            .race
            .parse::<Race>()
            .map_err(|_| RecordError::UnknownValue {
                field: "race",
                value: self.race.clone(),
            })?;
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|_| RecordError::UnknownValue {
                field: "gender",
                value: self.gender.clone(),
            })?;
        let name = ChampionName::parse(&self.name).map_err(RecordError::InvalidName)?;

        let mut champion = create_champion(archetype, name, race, gender);
        champion.replace_stats(self.stats);
        Ok(champion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::create;
    use crate::stats::StatAllocation;

    fn record() -> ChampionRecord {
        ChampionRecord {
            name: "Ana".into(),
            race: "HUMAN".into(),
            gender: "FEMALE".into(),
            stats: StatBlock::new(1, 2, 3, 4, 5),
            class_type: "CLERIC".into(),
        }
    }

    #[test]
    fn projection_holds_identity_stats_and_class() {
        let champion = create("FIGHTER", "Bors", "DWARF", "MALE").unwrap();
        let record = champion.to_record();

        assert_eq!(record.name, "Bors");
        assert_eq!(record.race, "DWARF");
        assert_eq!(record.gender, "MALE");
        assert_eq!(record.class_type, "FIGHTER");
        assert_eq!(record.stats, StatBlock::new(8, 4, 10, 3, 8));
    }

    #[test]
    fn restore_keeps_stats_and_resets_progression() {
        let mut champion = create("PALADIN", "Uther", "HUMAN", "MALE").unwrap();
        champion.increase_exp(100);
        champion
            .increase_stats(StatAllocation::new().attack(3))
            .unwrap();

        let restored = champion.to_record().to_champion().unwrap();

        assert_eq!(restored.stats(), champion.stats());
        assert_eq!(restored.class_type(), "PALADIN");
        assert_eq!(restored.name(), "Uther");
        assert_eq!(restored.level(), 0);
        assert_eq!(restored.stat_points(), 0);
        assert_eq!(restored.current_exp(), 0.0);
        assert_eq!(restored.exp_needed(), 100.0);
        assert_eq!(restored.equipment(), champion.equipment());
    }

    #[test]
    fn unknown_class_is_corrupt() {
        let record = ChampionRecord {
            class_type: "RANGE".into(),
            ..record()
        };
        assert_eq!(
            record.to_champion().unwrap_err(),
            RecordError::UnknownValue {
                field: "class_type",
                value: "RANGE".into()
            }
        );
    }

    #[test]
    fn unknown_race_and_gender_are_corrupt() {
        let bad_race = ChampionRecord {
            race: "GOBLIN".into(),
            ..record()
        };
        assert!(matches!(
            bad_race.to_champion(),
            Err(RecordError::UnknownValue { field: "race", .. })
        ));

        let bad_gender = ChampionRecord {
            gender: "".into(),
            ..record()
        };
        assert!(matches!(
            bad_gender.to_champion(),
            Err(RecordError::UnknownValue { field: "gender", .. })
        ));
    }

    #[test]
    fn invalid_name_is_corrupt() {
        let record = ChampionRecord {
            name: "Constantinople".into(),
            ..record()
        };
        let error = record.to_champion().unwrap_err();
        assert!(matches!(error, RecordError::InvalidName(_)));
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape_matches_save_format() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ana",
                "race": "HUMAN",
                "gender": "FEMALE",
                "stats": {"health": 1, "attack": 2, "defense": 3, "magic": 4, "speed": 5},
                "class_type": "CLERIC"
            })
        );
    }
}
