//! Deterministic champion rules shared by the runtime and the command-line client.
//!
//! `champion-core` defines the canonical character model (identity, stat block,
//! equipment, progression), the archetype catalog that is the only way to
//! construct a [`Champion`], the attack resolution algorithm, and the
//! persisted record shape. It performs no I/O; storage lives in the runtime.
pub mod archetype;
pub mod champion;
pub mod combat;
pub mod config;
pub mod equipment;
pub mod error;
pub mod events;
pub mod identity;
pub mod progression;
pub mod record;
pub mod stats;

pub use archetype::{Archetype, ArchetypeTemplate, CATALOG, create, create_champion};
pub use champion::{Champion, ChampionError, ChampionName, ChampionSummary};
pub use combat::{
    AttackOutcome, AttackReport, DamageOutcome, absorb_damage, resolve_attack, resolve_self_attack,
};
pub use config::GameConfig;
pub use equipment::{ArmorSlot, DefenseMode, Equipment, EquipmentBuilder, Weapon};
pub use error::{ErrorSeverity, GameError};
pub use events::ChampionEvent;
pub use identity::{Gender, Race};
pub use progression::{Exp, ExpReport, LevelUp, Progression, ProgressionNotice};
pub use record::{ChampionRecord, RecordError};
pub use stats::{StatAllocation, StatBlock, StatKey, StatValue};
