//! Damage application.

use crate::stats::{StatBlock, StatValue};

/// How a damage pool was spent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Size of the pool.
    pub pool: StatValue,
    /// Defense points removed.
    pub defense_lost: StatValue,
    /// Health points removed.
    pub health_lost: StatValue,
    /// Units that hit nothing because defense and health were both zero.
    pub wasted: StatValue,
}

/// Spends `pool` units of damage against `stats`.
///
/// Each unit first removes a defense point if any remain. Then, if defense
/// is zero, it removes a health point. The unit that brings defense to zero
/// therefore also costs one health.
///
/// ```text
/// while pool > 0:
///     if defense > 0: defense -= 1
///     if defense == 0 and health > 0: health -= 1
///     pool -= 1
/// ```
///
/// Once both defense and health are zero the rest of the pool is wasted.
pub fn absorb_damage(stats: &mut StatBlock, pool: StatValue) -> DamageOutcome {
    let mut outcome = DamageOutcome {
        pool,
        ..DamageOutcome::default()
    };
    let mut remaining = pool;

    while remaining > 0 {
        if stats.defense == 0 && stats.health == 0 {
            break;
        }

        if stats.defense > 0 {
            stats.defense -= 1;
            outcome.defense_lost += 1;
        }

        if stats.defense == 0 && stats.health > 0 {
            stats.health -= 1;
            outcome.health_lost += 1;
        }

        remaining -= 1;
    }

    outcome.wasted = remaining;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn defender(health: StatValue, defense: StatValue) -> StatBlock {
        StatBlock::new(health, 0, defense, 0, 0)
    }

    #[test]
    fn zeroing_unit_also_costs_health() {
        let mut stats = defender(3, 2);
        let outcome = absorb_damage(&mut stats, 5);

        assert_eq!(stats.defense, 0);
        assert_eq!(stats.health, 0);
        assert_eq!(outcome.defense_lost, 2);
        assert_eq!(outcome.health_lost, 3);
        assert_eq!(outcome.wasted, 1);
    }

    #[test]
    fn pool_equal_to_defense_still_hurts() {
        let mut stats = defender(5, 3);
        absorb_damage(&mut stats, 3);

        assert_eq!(stats.defense, 0);
        assert_eq!(stats.health, 4);
    }

    #[test]
    fn pool_below_defense_only_wears_armor() {
        let mut stats = defender(5, 10);
        let outcome = absorb_damage(&mut stats, 4);

        assert_eq!(stats.defense, 6);
        assert_eq!(stats.health, 5);
        assert_eq!(outcome.health_lost, 0);
        assert_eq!(outcome.wasted, 0);
    }

    #[test]
    fn no_defense_goes_straight_to_health() {
        let mut stats = defender(5, 0);
        absorb_damage(&mut stats, 2);

        assert_eq!(stats.health, 3);
    }

    #[test]
    fn other_stats_are_untouched() {
        let mut stats = StatBlock::new(4, 7, 1, 8, 9);
        absorb_damage(&mut stats, 100);

        assert_eq!(stats, StatBlock::new(0, 7, 0, 8, 9));
    }

    #[test]
    fn empty_pool_does_nothing() {
        let mut stats = defender(3, 2);
        assert_eq!(
            absorb_damage(&mut stats, 0),
            DamageOutcome {
                pool: 0,
                ..DamageOutcome::default()
            }
        );
        assert_eq!(stats, defender(3, 2));
    }

    proptest! {
        #[test]
        fn pool_is_fully_accounted(health in 0u32..200, defense in 0u32..200, pool in 0u32..600) {
            let mut stats = defender(health, defense);
            let outcome = absorb_damage(&mut stats, pool);

            prop_assert_eq!(stats.defense, defense - outcome.defense_lost);
            prop_assert_eq!(stats.health, health - outcome.health_lost);
            prop_assert!(outcome.defense_lost + outcome.wasted <= pool);
            prop_assert!(outcome.health_lost <= pool);
            if outcome.wasted > 0 {
                prop_assert_eq!(stats.defense, 0);
                prop_assert_eq!(stats.health, 0);
            }
        }

        #[test]
        fn matches_closed_form(health in 0u32..200, defense in 0u32..200, pool in 0u32..600) {
            let mut stats = defender(health, defense);
            absorb_damage(&mut stats, pool);

            let expected_defense = defense.saturating_sub(pool);
            let expected_health_loss = if pool == 0 || pool < defense {
                0
            } else if defense == 0 {
                pool.min(health)
            } else {
                (pool - defense + 1).min(health)
            };

            prop_assert_eq!(stats.defense, expected_defense);
            prop_assert_eq!(stats.health, health - expected_health_loss);
        }
    }
}
