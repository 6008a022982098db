//! Equipment carried by a champion.
//!
//! Equipment is decided by the archetype at construction and is never changed
//! afterwards. It is descriptive only: combat resolution reads stats, not gear.

use arrayvec::ArrayVec;

/// Number of distinct armor slots; an outfit never lists more than this.
pub const MAX_ARMOR_PIECES: usize = 4;

/// Weapon wielded by a champion.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Weapon {
    Bow,
    Sword,
    Staff,
    Hammer,
    Blades,
}

/// Whether the champion carries a shield.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DefenseMode {
    Shield,
    NoShield,
}

/// Body slot covered by a piece of armor.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ArmorSlot {
    Helmet,
    Gauntlets,
    Chest,
    Leg,
}

/// Equipment value attached to a champion.
///
/// Armor keeps the order in which the archetype lists it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    weapon: Weapon,
    defense_mode: DefenseMode,
    armor: ArrayVec<ArmorSlot, MAX_ARMOR_PIECES>,
}

impl Equipment {
    /// Creates a builder for constructing equipment.
    pub fn builder(weapon: Weapon, defense_mode: DefenseMode) -> EquipmentBuilder {
        EquipmentBuilder {
            weapon,
            defense_mode,
            armor: ArrayVec::new(),
        }
    }

    pub fn weapon(&self) -> Weapon {
        self.weapon
    }

    pub fn defense_mode(&self) -> DefenseMode {
        self.defense_mode
    }

    /// Armor pieces in archetype order.
    pub fn armor(&self) -> &[ArmorSlot] {
        &self.armor
    }

    pub fn has_shield(&self) -> bool {
        self.defense_mode == DefenseMode::Shield
    }
}

/// Builder for constructing equipment.
pub struct EquipmentBuilder {
    weapon: Weapon,
    defense_mode: DefenseMode,
    armor: ArrayVec<ArmorSlot, MAX_ARMOR_PIECES>,
}

impl EquipmentBuilder {
    /// Adds an armor piece. A slot already worn is ignored.
    pub fn armor(mut self, slot: ArmorSlot) -> Self {
        if !self.armor.contains(&slot) && !self.armor.is_full() {
            // Slots are distinct and there are MAX_ARMOR_PIECES of them
            self.armor.push(slot);
        }
        self
    }

    /// Adds every piece from `slots` in order.
    pub fn armor_set(self, slots: &[ArmorSlot]) -> Self {
        slots.iter().fold(self, |builder, slot| builder.armor(*slot))
    }

    /// Builds the equipment.
    pub fn build(self) -> Equipment {
        Equipment {
            weapon: self.weapon,
            defense_mode: self.defense_mode,
            armor: self.armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_armor_order() {
        let equipment = Equipment::builder(Weapon::Sword, DefenseMode::Shield)
            .armor(ArmorSlot::Chest)
            .armor(ArmorSlot::Helmet)
            .build();

        assert_eq!(equipment.weapon(), Weapon::Sword);
        assert!(equipment.has_shield());
        assert_eq!(equipment.armor(), &[ArmorSlot::Chest, ArmorSlot::Helmet]);
    }

    #[test]
    fn duplicate_slots_are_ignored() {
        let equipment = Equipment::builder(Weapon::Bow, DefenseMode::NoShield)
            .armor_set(&[ArmorSlot::Helmet, ArmorSlot::Helmet, ArmorSlot::Leg])
            .build();

        assert_eq!(equipment.armor(), &[ArmorSlot::Helmet, ArmorSlot::Leg]);
    }

    #[test]
    fn every_slot_fits() {
        let equipment = Equipment::builder(Weapon::Hammer, DefenseMode::Shield)
            .armor_set(&[
                ArmorSlot::Leg,
                ArmorSlot::Chest,
                ArmorSlot::Gauntlets,
                ArmorSlot::Helmet,
                ArmorSlot::Chest,
            ])
            .build();

        assert_eq!(equipment.armor().len(), MAX_ARMOR_PIECES);
        assert_eq!(equipment.armor()[0], ArmorSlot::Leg);
    }

    #[test]
    fn defense_mode_names() {
        assert_eq!(DefenseMode::NoShield.to_string(), "NO_SHIELD");
        assert_eq!("no_shield".parse::<DefenseMode>(), Ok(DefenseMode::NoShield));
    }
}
