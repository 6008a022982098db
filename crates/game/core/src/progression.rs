//! Leveling and experience state machine.
//!
//! ```text
//! increase_exp(n) ──▶ current_exp += n ──(current_exp >= exp_needed)──▶ level_up()
//!                                                                        │
//!               level == MAX_LEVEL ◀── MaxLevelReached (no change) ◀─────┤
//!                                                                        ▼
//!        level += 1, stat_points += 3, total_exp += current_exp,
//!        current_exp = 0, exp_needed *= 1.2
//! ```
//!
//! A single `increase_exp` call triggers at most one level-up, even when the
//! surplus would cover several thresholds.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::events::ChampionEvent;
use crate::stats::StatKey;

/// Experience quantities are real numbers: thresholds grow by 1.2 and death
/// halves the current amount.
pub type Exp = f64;

/// Recoverable conditions reported by progression operations.
///
/// Returning one of these never changes the champion.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionNotice {
    /// Allocation asked for more points than are available.
    #[error("You only have {available} points to spend (requested {requested})")]
    InsufficientPoints { requested: u64, available: u32 },

    /// Level-up attempted at the level cap.
    #[error("You are in the max level ({level})")]
    MaxLevelReached { level: u32 },

    /// Allocation would push a stat past its maximum value.
    #[error("{stat} cannot be raised any further")]
    StatOverflow { stat: StatKey },
}

impl ProgressionNotice {
    pub fn to_event(&self) -> ChampionEvent {
        match *self {
            Self::InsufficientPoints {
                requested,
                available,
            } => ChampionEvent::InsufficientPoints {
                requested,
                available,
            },
            Self::MaxLevelReached { level } => ChampionEvent::MaxLevelReached { level },
            Self::StatOverflow { stat } => ChampionEvent::StatOverflow { stat },
        }
    }
}

impl GameError for ProgressionNotice {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPoints { .. } => "PROGRESSION_INSUFFICIENT_POINTS",
            Self::MaxLevelReached { .. } => "PROGRESSION_MAX_LEVEL_REACHED",
            Self::StatOverflow { .. } => "PROGRESSION_STAT_OVERFLOW",
        }
    }
}

/// Result of a successful level-up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub level: u32,
    pub stat_points: u32,
    pub exp_needed: Exp,
}

impl From<LevelUp> for ChampionEvent {
    fn from(level_up: LevelUp) -> Self {
        ChampionEvent::LeveledUp {
            level: level_up.level,
            stat_points: level_up.stat_points,
            exp_needed: level_up.exp_needed,
        }
    }
}

/// What one `increase_exp` call did.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpReport {
    pub gained: u32,
    pub current_exp: Exp,
    /// `None` when the threshold was not reached.
    pub level_up: Option<Result<LevelUp, ProgressionNotice>>,
}

impl ExpReport {
    pub fn leveled_up(&self) -> bool {
        matches!(self.level_up, Some(Ok(_)))
    }

    pub fn events(&self) -> Vec<ChampionEvent> {
        let mut events = vec![ChampionEvent::ExperienceGained {
            amount: self.gained,
            current_exp: self.current_exp,
        }];
        match &self.level_up {
            Some(Ok(level_up)) => events.push((*level_up).into()),
            Some(Err(notice)) => events.push(notice.to_event()),
            None => {}
        }
        events
    }
}

/// Progression counters of a champion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    level: u32,
    exp_needed: Exp,
    current_exp: Exp,
    total_exp: Exp,
    stat_points: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    /// Fresh progression: level 0, nothing earned.
    pub fn new() -> Self {
        Self {
            level: 0,
            exp_needed: GameConfig::INITIAL_EXP_NEEDED,
            current_exp: 0.0,
            total_exp: 0.0,
            stat_points: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn exp_needed(&self) -> Exp {
        self.exp_needed
    }

    pub fn current_exp(&self) -> Exp {
        self.current_exp
    }

    pub fn total_exp(&self) -> Exp {
        self.total_exp
    }

    pub fn stat_points(&self) -> u32 {
        self.stat_points
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= GameConfig::MAX_LEVEL
    }

    /// Advances one level unless the cap is reached.
    pub fn level_up(&mut self) -> Result<LevelUp, ProgressionNotice> {
        if self.is_max_level() {
            return Err(ProgressionNotice::MaxLevelReached { level: self.level });
        }

        self.level += 1;
        self.stat_points = self
            .stat_points
            .saturating_add(GameConfig::STAT_POINTS_PER_LEVEL);
        self.total_exp += self.current_exp;
        self.current_exp = 0.0;
        self.exp_needed *= GameConfig::EXP_GROWTH;

        Ok(LevelUp {
            level: self.level,
            stat_points: self.stat_points,
            exp_needed: self.exp_needed,
        })
    }

    /// Adds experience and performs at most one level-up.
    pub fn increase_exp(&mut self, amount: u32) -> ExpReport {
        self.current_exp += Exp::from(amount);
        let current_exp = self.current_exp;

        let level_up = (self.current_exp >= self.exp_needed).then(|| self.level_up());

        ExpReport {
            gained: amount,
            current_exp,
            level_up,
        }
    }

    /// Applies the death penalty and returns `(before, after)`.
    pub fn apply_death_penalty(&mut self) -> (Exp, Exp) {
        let before = self.current_exp;
        self.current_exp *= GameConfig::DEATH_EXP_FACTOR;
        (before, self.current_exp)
    }

    /// Checks that `cost` points are available without spending them.
    pub fn check_points(&self, cost: u64) -> Result<(), ProgressionNotice> {
        if cost > u64::from(self.stat_points) {
            return Err(ProgressionNotice::InsufficientPoints {
                requested: cost,
                available: self.stat_points,
            });
        }
        Ok(())
    }

    /// Spends `cost` points. Fails without change when not enough are available.
    pub fn spend_points(&mut self, cost: u64) -> Result<u32, ProgressionNotice> {
        self.check_points(cost)?;
        // check_points guarantees cost <= stat_points, so it fits in u32
        self.stat_points -= cost as u32;
        Ok(self.stat_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_zero() {
        let progression = Progression::new();
        assert_eq!(progression.level(), 0);
        assert_eq!(progression.exp_needed(), 100.0);
        assert_eq!(progression.current_exp(), 0.0);
        assert_eq!(progression.total_exp(), 0.0);
        assert_eq!(progression.stat_points(), 0);
    }

    #[test]
    fn threshold_triggers_single_level_up() {
        let mut progression = Progression::new();
        let report = progression.increase_exp(100);

        assert!(report.leveled_up());
        assert_eq!(progression.level(), 1);
        assert_eq!(progression.stat_points(), 3);
        assert_eq!(progression.current_exp(), 0.0);
        assert_eq!(progression.total_exp(), 100.0);
        assert_eq!(progression.exp_needed(), 120.0);
    }

    #[test]
    fn below_threshold_only_accumulates() {
        let mut progression = Progression::new();
        let report = progression.increase_exp(99);

        assert_eq!(report.level_up, None);
        assert_eq!(progression.level(), 0);
        assert_eq!(progression.current_exp(), 99.0);
        assert_eq!(
            report.events(),
            vec![ChampionEvent::ExperienceGained {
                amount: 99,
                current_exp: 99.0
            }]
        );
    }

    #[test]
    fn surplus_does_not_cascade() {
        let mut progression = Progression::new();
        // Enough for two thresholds (100 + 120), but only one level is granted.
        progression.increase_exp(500);

        assert_eq!(progression.level(), 1);
        assert_eq!(progression.stat_points(), 3);
        assert_eq!(progression.total_exp(), 500.0);
        assert_eq!(progression.current_exp(), 0.0);
    }

    #[test]
    fn threshold_grows_geometrically() {
        let mut progression = Progression::new();
        progression.level_up().unwrap();
        progression.level_up().unwrap();

        assert_eq!(progression.level(), 2);
        assert_eq!(progression.stat_points(), 6);
        assert!((progression.exp_needed() - 144.0).abs() < 1e-9);
    }

    #[test]
    fn cap_reports_and_leaves_state() {
        let mut progression = Progression::new();
        for _ in 0..GameConfig::MAX_LEVEL {
            progression.level_up().unwrap();
        }
        assert_eq!(progression.level(), 100);
        let before = progression.clone();

        let notice = progression.level_up().unwrap_err();
        assert_eq!(notice, ProgressionNotice::MaxLevelReached { level: 100 });
        assert_eq!(notice.severity(), ErrorSeverity::Recoverable);
        assert_eq!(progression, before);
    }

    #[test]
    fn exp_at_cap_keeps_accumulating() {
        let mut progression = Progression::new();
        for _ in 0..GameConfig::MAX_LEVEL {
            progression.level_up().unwrap();
        }
        // 100 * 1.2^100 is roughly 8.3e9, more than one u32 worth of exp.
        let first = progression.increase_exp(u32::MAX);
        assert_eq!(first.level_up, None);

        let second = progression.increase_exp(u32::MAX);
        assert_eq!(
            second.level_up,
            Some(Err(ProgressionNotice::MaxLevelReached { level: 100 }))
        );
        assert_eq!(progression.current_exp(), 2.0 * Exp::from(u32::MAX));
        assert_eq!(progression.level(), 100);
    }

    #[test]
    fn death_halves_current_exp() {
        let mut progression = Progression::new();
        progression.increase_exp(15);

        let (before, after) = progression.apply_death_penalty();
        assert_eq!(before, 15.0);
        assert_eq!(after, 7.5);
        assert_eq!(progression.current_exp(), 7.5);
        assert_eq!(progression.total_exp(), 0.0);
        assert_eq!(progression.level(), 0);
    }

    #[test]
    fn spending_respects_available_points() {
        let mut progression = Progression::new();
        progression.level_up().unwrap();

        assert_eq!(
            progression.spend_points(4),
            Err(ProgressionNotice::InsufficientPoints {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(progression.stat_points(), 3);
        assert_eq!(progression.spend_points(3), Ok(0));
        assert_eq!(progression.stat_points(), 0);
    }
}
