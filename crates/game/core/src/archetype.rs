//! Archetype catalog.
//!
//! The six champion classes differ only in their starting stats and gear, so
//! the catalog is a static table keyed by [`Archetype`]. [`create`] and
//! [`create_champion`] are the only ways to construct a [`Champion`].

use crate::champion::{Champion, ChampionError, ChampionName};
use crate::equipment::{ArmorSlot, DefenseMode, Equipment, Weapon};
use crate::identity::{Gender, Race};
use crate::stats::StatBlock;

/// Champion class.
///
/// The display form is the class discriminator stored in save records.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Archetype {
    Cleric,
    Fighter,
    Mage,
    Paladin,
    Ranger,
    Rogue,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Cleric,
        Archetype::Fighter,
        Archetype::Mage,
        Archetype::Paladin,
        Archetype::Ranger,
        Archetype::Rogue,
    ];

    /// Resolves a class discriminator such as `"PALADIN"`.
    pub fn from_class_type(class_type: &str) -> Result<Self, ChampionError> {
        class_type
            .parse()
            .map_err(|_| ChampionError::UnknownVariant(class_type.to_owned()))
    }

    pub fn class_type(self) -> &'static str {
        self.template().class_type
    }

    /// Catalog entry for this archetype.
    pub fn template(self) -> &'static ArchetypeTemplate {
        match self {
            Archetype::Cleric => &CATALOG[0],
            Archetype::Fighter => &CATALOG[1],
            Archetype::Mage => &CATALOG[2],
            Archetype::Paladin => &CATALOG[3],
            Archetype::Ranger => &CATALOG[4],
            Archetype::Rogue => &CATALOG[5],
        }
    }
}

/// Starting stats and gear of one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchetypeTemplate {
    pub archetype: Archetype,
    pub class_type: &'static str,
    pub stats: StatBlock,
    pub weapon: Weapon,
    pub defense_mode: DefenseMode,
    pub armor: &'static [ArmorSlot],
}

impl ArchetypeTemplate {
    pub fn equipment(&self) -> Equipment {
        Equipment::builder(self.weapon, self.defense_mode)
            .armor_set(self.armor)
            .build()
    }
}

/// The archetype table, in [`Archetype::ALL`] order.
pub static CATALOG: [ArchetypeTemplate; 6] = [
    ArchetypeTemplate {
        archetype: Archetype::Cleric,
        class_type: "CLERIC",
        stats: StatBlock::new(5, 2, 5, 5, 5),
        weapon: Weapon::Staff,
        defense_mode: DefenseMode::Shield,
        armor: &[ArmorSlot::Helmet, ArmorSlot::Gauntlets],
    },
    ArchetypeTemplate {
        archetype: Archetype::Fighter,
        class_type: "FIGHTER",
        stats: StatBlock::new(8, 4, 10, 3, 8),
        weapon: Weapon::Sword,
        defense_mode: DefenseMode::Shield,
        armor: &[ArmorSlot::Helmet, ArmorSlot::Chest],
    },
    ArchetypeTemplate {
        archetype: Archetype::Mage,
        class_type: "MAGE",
        stats: StatBlock::new(5, 7, 5, 10, 5),
        weapon: Weapon::Staff,
        defense_mode: DefenseMode::NoShield,
        armor: &[ArmorSlot::Helmet],
    },
    ArchetypeTemplate {
        archetype: Archetype::Paladin,
        class_type: "PALADIN",
        stats: StatBlock::new(5, 6, 6, 7, 6),
        weapon: Weapon::Hammer,
        defense_mode: DefenseMode::NoShield,
        armor: &[ArmorSlot::Chest],
    },
    ArchetypeTemplate {
        archetype: Archetype::Ranger,
        class_type: "RANGER",
        stats: StatBlock::new(7, 4, 5, 8, 3),
        weapon: Weapon::Bow,
        defense_mode: DefenseMode::NoShield,
        armor: &[ArmorSlot::Helmet],
    },
    ArchetypeTemplate {
        archetype: Archetype::Rogue,
        class_type: "ROGUE",
        stats: StatBlock::new(6, 4, 5, 5, 10),
        weapon: Weapon::Blades,
        defense_mode: DefenseMode::NoShield,
        armor: &[ArmorSlot::Helmet],
    },
];

/// Builds a champion from already validated parts.
pub fn create_champion(
    archetype: Archetype,
    name: ChampionName,
    race: Race,
    gender: Gender,
) -> Champion {
    tracing::debug!(champion = %name, class = archetype.class_type(), "creating champion");
    Champion::from_template(name, race, gender, archetype.template())
}

/// Builds a champion from the strings an input collector supplies.
///
/// Every argument is validated before anything is constructed: the class
/// must name an archetype, the name must be 1 to 10 characters, and race and
/// gender must be known names.
pub fn create(
    class_type: &str,
    name: &str,
    race: &str,
    gender: &str,
) -> Result<Champion, ChampionError> {
    let archetype = Archetype::from_class_type(class_type)?;
    let name = ChampionName::parse(name)?;
    let race = race
        .parse::<Race>()
        .map_err(|_| ChampionError::UnknownRace(race.to_owned()))?;
    let gender = gender
        .parse::<Gender>()
        .map_err(|_| ChampionError::UnknownGender(gender.to_owned()))?;

    Ok(create_champion(archetype, name, race, gender))
}
