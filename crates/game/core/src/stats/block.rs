//! The five-attribute stat block.

/// Numeric type of a single stat. Stats never go below zero.
pub type StatValue = u32;

/// Addresses one of the five stats.
///
/// Any key may be used as an attack's damage source; combat does not restrict
/// the choice to "offensive" stats.
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKey {
    Health,
    Attack,
    Defense,
    Magic,
    Speed,
}

impl StatKey {
    /// All keys in record order.
    pub const ALL: [StatKey; 5] = [
        StatKey::Health,
        StatKey::Attack,
        StatKey::Defense,
        StatKey::Magic,
        StatKey::Speed,
    ];
}

/// Health, attack, defense, magic and speed of a champion.
///
/// The key set is fixed by the struct shape; deserialization rejects missing
/// or extra keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct StatBlock {
    pub health: StatValue,
    pub attack: StatValue,
    pub defense: StatValue,
    pub magic: StatValue,
    pub speed: StatValue,
}

impl StatBlock {
    pub const fn new(
        health: StatValue,
        attack: StatValue,
        defense: StatValue,
        magic: StatValue,
        speed: StatValue,
    ) -> Self {
        Self {
            health,
            attack,
            defense,
            magic,
            speed,
        }
    }

    pub const fn get(&self, key: StatKey) -> StatValue {
        match key {
            StatKey::Health => self.health,
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
            StatKey::Magic => self.magic,
            StatKey::Speed => self.speed,
        }
    }

    pub fn get_mut(&mut self, key: StatKey) -> &mut StatValue {
        match key {
            StatKey::Health => &mut self.health,
            StatKey::Attack => &mut self.attack,
            StatKey::Defense => &mut self.defense,
            StatKey::Magic => &mut self.magic,
            StatKey::Speed => &mut self.speed,
        }
    }

    pub fn set(&mut self, key: StatKey, value: StatValue) {
        *self.get_mut(key) = value;
    }

    /// Iterates `(key, value)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, StatValue)> + '_ {
        StatKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Sum of all five stats.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, value)| u64::from(value)).sum()
    }
}
