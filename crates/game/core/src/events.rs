//! Reported events.
//!
//! Operations that would print an informational message (level cap reached,
//! not enough points, a death) report it as a [`ChampionEvent`] instead. Hosts
//! decide how to present them; the runtime logs them through `tracing`.

use crate::progression::Exp;
use crate::stats::{StatKey, StatValue};

/// Something observable that happened to a single champion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChampionEvent {
    /// Experience was added to `current_exp`.
    ExperienceGained { amount: u32, current_exp: Exp },

    /// A level-up completed.
    LeveledUp {
        level: u32,
        stat_points: u32,
        exp_needed: Exp,
    },

    /// A level-up was requested at the cap; nothing changed.
    MaxLevelReached { level: u32 },

    /// A stat allocation was applied.
    StatsIncreased { spent: u32, remaining: u32 },

    /// A stat allocation was rejected; nothing changed.
    InsufficientPoints { requested: u64, available: u32 },

    /// A stat allocation would overflow `stat`; nothing changed.
    StatOverflow { stat: StatKey },

    /// Health reached zero; current experience was scaled down.
    Died { exp_before: Exp, exp_after: Exp },
}

impl ChampionEvent {
    /// Short stable identifier, suitable for log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ExperienceGained { .. } => "experience_gained",
            Self::LeveledUp { .. } => "leveled_up",
            Self::MaxLevelReached { .. } => "max_level_reached",
            Self::StatsIncreased { .. } => "stats_increased",
            Self::InsufficientPoints { .. } => "insufficient_points",
            Self::StatOverflow { .. } => "stat_overflow",
            Self::Died { .. } => "died",
        }
    }

    /// Human-readable message for hosts that print events.
    pub fn message(&self) -> String {
        match self {
            Self::ExperienceGained { amount, current_exp } => {
                format!("gained {amount} exp ({current_exp} current)")
            }
            Self::LeveledUp {
                level,
                stat_points,
                exp_needed,
            } => format!(
                "reached level {level} ({stat_points} stat points, {exp_needed} exp to next level)"
            ),
            Self::MaxLevelReached { level } => format!("already at the max level ({level})"),
            Self::StatsIncreased { spent, remaining } => {
                format!("spent {spent} stat points ({remaining} left)")
            }
            Self::InsufficientPoints { available, .. } => {
                format!("you only have {available} points to spend")
            }
            Self::StatOverflow { stat } => format!("{stat} cannot be raised any further"),
            Self::Died {
                exp_before,
                exp_after,
            } => format!("died, current exp {exp_before} -> {exp_after}"),
        }
    }
}
