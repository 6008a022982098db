//! The champion entity.
//!
//! A champion bundles identity (name, race, gender), its archetype, the
//! progression counters, a stat block, and equipment. Values are only built by
//! the archetype catalog ([`crate::archetype::create`]) or by reconstructing a
//! saved record, which itself goes through the catalog.
//!
//! # Invariants
//!
//! - `0 <= level <= GameConfig::MAX_LEVEL`
//! - stat allocation never spends more points than are available
//! - `current_exp` is never negative
//! - the archetype never changes after construction

mod error;
mod name;

pub use error::ChampionError;
pub use name::ChampionName;

use crate::archetype::{Archetype, ArchetypeTemplate};
use crate::combat::{self, AttackReport};
use crate::equipment::Equipment;
use crate::events::ChampionEvent;
use crate::identity::{Gender, Race};
use crate::progression::{Exp, ExpReport, LevelUp, Progression, ProgressionNotice};
use crate::record::ChampionRecord;
use crate::stats::{StatAllocation, StatBlock, StatKey, StatValue};

#[derive(Clone, Debug, PartialEq)]
pub struct Champion {
    name: ChampionName,
    race: Race,
    gender: Gender,
    archetype: Archetype,
    progression: Progression,
    stats: StatBlock,
    equipment: Equipment,
}

impl Champion {
    /// Builds a champion from a catalog entry with fresh progression.
    pub(crate) fn from_template(
        name: ChampionName,
        race: Race,
        gender: Gender,
        template: &ArchetypeTemplate,
    ) -> Self {
        Self {
            name,
            race,
            gender,
            archetype: template.archetype,
            progression: Progression::new(),
            stats: template.stats,
            equipment: template.equipment(),
        }
    }

    // ===== identity =====

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Class discriminator used by the save format (`"MAGE"`, ...).
    pub fn class_type(&self) -> &'static str {
        self.archetype.class_type()
    }

    // ===== progression =====

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn exp_needed(&self) -> Exp {
        self.progression.exp_needed()
    }

    pub fn current_exp(&self) -> Exp {
        self.progression.current_exp()
    }

    pub fn total_exp(&self) -> Exp {
        self.progression.total_exp()
    }

    pub fn stat_points(&self) -> u32 {
        self.progression.stat_points()
    }

    // ===== stats and equipment =====

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn stat(&self, key: StatKey) -> StatValue {
        self.stats.get(key)
    }

    pub(crate) fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    /// Overwrites the stat block; used when a saved record is restored.
    pub(crate) fn replace_stats(&mut self, stats: StatBlock) {
        self.stats = stats;
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// A champion is dead while its health is zero. Death does not remove it
    /// from play.
    pub fn is_dead(&self) -> bool {
        self.stats.health == 0
    }

    // ===== operations =====

    /// Advances one level, or reports that the cap is reached.
    pub fn level_up(&mut self) -> Result<LevelUp, ProgressionNotice> {
        let result = self.progression.level_up();
        match &result {
            Ok(level_up) => tracing::info!(
                champion = %self.name,
                level = level_up.level,
                stat_points = level_up.stat_points,
                "champion leveled up"
            ),
            Err(notice) => tracing::info!(champion = %self.name, "{notice}"),
        }
        result
    }

    /// Adds experience; reaching the threshold triggers one level-up.
    pub fn increase_exp(&mut self, amount: u32) -> ExpReport {
        tracing::debug!(champion = %self.name, amount, "granting experience");
        let report = self.progression.increase_exp(amount);
        match &report.level_up {
            Some(Ok(level_up)) => tracing::info!(
                champion = %self.name,
                level = level_up.level,
                stat_points = level_up.stat_points,
                "champion leveled up"
            ),
            Some(Err(notice)) => tracing::info!(champion = %self.name, "{notice}"),
            None => {}
        }
        report
    }

    /// Spends stat points on `allocation` atomically.
    ///
    /// Returns the points left. When the allocation costs more than is
    /// available, or would push a stat past `u32::MAX`, nothing is applied
    /// and no points are spent.
    pub fn increase_stats(&mut self, allocation: StatAllocation) -> Result<u32, ProgressionNotice> {
        let cost = allocation.total();
        if let Err(notice) = self.progression.check_points(cost) {
            tracing::info!(champion = %self.name, "{notice}");
            return Err(notice);
        }

        let stats = match allocation.applied_to(&self.stats) {
            Ok(stats) => stats,
            Err(stat) => {
                let notice = ProgressionNotice::StatOverflow { stat };
                tracing::info!(champion = %self.name, "{notice}");
                return Err(notice);
            }
        };

        self.stats = stats;
        let remaining = self.progression.spend_points(cost)?;
        tracing::debug!(champion = %self.name, spent = cost, remaining, "stats increased");
        Ok(remaining)
    }

    /// Applies the death penalty to current experience.
    pub(crate) fn die(&mut self) -> ChampionEvent {
        let (exp_before, exp_after) = self.progression.apply_death_penalty();
        tracing::info!(champion = %self.name, exp_before, exp_after, "champion died");
        ChampionEvent::Died {
            exp_before,
            exp_after,
        }
    }

    /// Attacks `defender`, drawing the damage pool from this champion's
    /// `source` stat. See [`combat::resolve_attack`].
    pub fn attack(&mut self, source: StatKey, defender: &mut Champion) -> AttackReport {
        combat::resolve_attack(source, self, defender)
    }

    /// Attacks itself. See [`combat::resolve_self_attack`].
    pub fn attack_self(&mut self, source: StatKey) -> AttackReport {
        combat::resolve_self_attack(source, self)
    }

    /// Persisted projection of this champion.
    pub fn to_record(&self) -> ChampionRecord {
        ChampionRecord::from_champion(self)
    }

    /// Read-only view for display.
    pub fn summary(&self) -> ChampionSummary {
        ChampionSummary {
            name: self.name.clone(),
            race: self.race,
            gender: self.gender,
            archetype: self.archetype,
            level: self.level(),
            current_exp: self.current_exp(),
            exp_needed: self.exp_needed(),
            total_exp: self.total_exp(),
            stat_points: self.stat_points(),
            stats: self.stats,
            equipment: self.equipment.clone(),
        }
    }
}

/// Display snapshot of a champion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChampionSummary {
    pub name: ChampionName,
    pub race: Race,
    pub gender: Gender,
    pub archetype: Archetype,
    pub level: u32,
    pub current_exp: Exp,
    pub exp_needed: Exp,
    pub total_exp: Exp,
    pub stat_points: u32,
    pub stats: StatBlock,
    pub equipment: Equipment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::create_champion;
    use crate::error::{ErrorSeverity, GameError};

    fn cleric() -> Champion {
        create_champion(
            Archetype::Cleric,
            ChampionName::parse("Ana").unwrap(),
            Race::Human,
            Gender::Female,
        )
    }

    #[test]
    fn first_level_up_from_exp() {
        let mut champion = cleric();
        let report = champion.increase_exp(100);

        assert!(report.leveled_up());
        assert_eq!(champion.level(), 1);
        assert_eq!(champion.stat_points(), 3);
        assert_eq!(champion.current_exp(), 0.0);
        assert_eq!(champion.exp_needed(), 120.0);
    }

    #[test]
    fn rejected_allocation_changes_nothing() {
        let mut champion = cleric();
        champion.level_up().unwrap();
        let before = champion.clone();

        let notice = champion
            .increase_stats(StatAllocation::new().attack(2).magic(2))
            .unwrap_err();

        assert_eq!(
            notice,
            ProgressionNotice::InsufficientPoints {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(notice.severity(), ErrorSeverity::Recoverable);
        assert_eq!(champion, before);
    }

    #[test]
    fn accepted_allocation_applies_all_deltas() {
        let mut champion = cleric();
        champion.level_up().unwrap();

        let remaining = champion
            .increase_stats(StatAllocation::new().health(1).attack(1).speed(1))
            .unwrap();

        assert_eq!(remaining, 0);
        assert_eq!(champion.stat_points(), 0);
        assert_eq!(*champion.stats(), StatBlock::new(6, 3, 5, 5, 6));
    }

    #[test]
    fn overflowing_allocation_spends_nothing() {
        let mut champion = cleric();
        champion.level_up().unwrap();
        champion.replace_stats(StatBlock::new(5, u32::MAX, 5, 5, 5));
        let before = champion.clone();

        let notice = champion
            .increase_stats(StatAllocation::new().health(1).attack(1))
            .unwrap_err();

        assert_eq!(
            notice,
            ProgressionNotice::StatOverflow {
                stat: StatKey::Attack
            }
        );
        assert_eq!(champion, before);
        assert_eq!(champion.stat_points(), 3);
    }

    #[test]
    fn empty_allocation_is_free() {
        let mut champion = cleric();
        assert_eq!(champion.increase_stats(StatAllocation::new()), Ok(0));
        assert_eq!(*champion.stats(), StatBlock::new(5, 2, 5, 5, 5));
    }

    #[test]
    fn level_up_at_cap_keeps_points() {
        let mut champion = cleric();
        for _ in 0..100 {
            champion.level_up().unwrap();
        }
        let points = champion.stat_points();

        assert_eq!(
            champion.level_up(),
            Err(ProgressionNotice::MaxLevelReached { level: 100 })
        );
        assert_eq!(champion.level(), 100);
        assert_eq!(champion.stat_points(), points);
    }

    #[test]
    fn summary_reflects_state() {
        let champion = cleric();
        let summary = champion.summary();

        assert_eq!(summary.name.as_str(), "Ana");
        assert_eq!(summary.archetype, Archetype::Cleric);
        assert_eq!(summary.level, 0);
        assert_eq!(summary.stats, *champion.stats());
        assert_eq!(&summary.equipment, champion.equipment());
    }
}
