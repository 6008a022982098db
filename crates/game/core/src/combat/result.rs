//! Attack resolution and its report.

use crate::champion::Champion;
use crate::config::GameConfig;
use crate::events::ChampionEvent;
use crate::progression::ExpReport;
use crate::stats::StatKey;

use super::damage::{DamageOutcome, absorb_damage};

/// What happened to the defender after the damage was applied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Defender still has health.
    Survived,
    /// Defender's health is zero. It lost experience and the attacker was
    /// rewarded.
    Defeated {
        death: ChampionEvent,
        reward: ExpReport,
    },
}

/// Result of one attack.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// Attacker stat that supplied the damage pool.
    pub source: StatKey,
    pub damage: DamageOutcome,
    pub outcome: AttackOutcome,
}

impl AttackReport {
    pub fn defender_died(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Defeated { .. })
    }

    /// Events for the attacker, in order.
    pub fn attacker_events(&self) -> Vec<ChampionEvent> {
        match &self.outcome {
            AttackOutcome::Survived => Vec::new(),
            AttackOutcome::Defeated { reward, .. } => reward.events(),
        }
    }

    /// Events for the defender, in order.
    pub fn defender_events(&self) -> Vec<ChampionEvent> {
        match &self.outcome {
            AttackOutcome::Survived => Vec::new(),
            AttackOutcome::Defeated { death, .. } => vec![death.clone()],
        }
    }
}

/// Resolves `attacker` attacking `defender` with the `source` stat.
///
/// The damage pool is the attacker's current value of `source`, whichever
/// stat that is; drawing on health or speed is allowed and the attacker's
/// own stat is not spent. After the damage, a defender at zero health dies
/// (current experience scaled by [`GameConfig::DEATH_EXP_FACTOR`]) and the
/// attacker gains [`GameConfig::KILL_REWARD`] experience. This also happens
/// when the defender was already at zero health before the attack.
///
/// Both champions are borrowed mutably, so no other mutation can interleave
/// with the exchange. A champion attacking itself goes through
/// [`resolve_self_attack`].
pub fn resolve_attack(
    source: StatKey,
    attacker: &mut Champion,
    defender: &mut Champion,
) -> AttackReport {
    let pool = attacker.stat(source);
    let damage = absorb_damage(defender.stats_mut(), pool);
    log_damage(attacker.name(), defender.name(), source, &damage);

    let outcome = if defender.is_dead() {
        let death = defender.die();
        let reward = attacker.increase_exp(GameConfig::KILL_REWARD);
        AttackOutcome::Defeated { death, reward }
    } else {
        AttackOutcome::Survived
    };

    AttackReport {
        source,
        damage,
        outcome,
    }
}

/// Resolves `champion` attacking itself with the `source` stat.
///
/// Same steps as [`resolve_attack`] with one champion in both roles: the pool
/// is read before any damage, the champion's own defense and health absorb
/// it, and if health ends at zero it takes the death penalty first and then
/// the kill reward.
pub fn resolve_self_attack(source: StatKey, champion: &mut Champion) -> AttackReport {
    let pool = champion.stat(source);
    let damage = absorb_damage(champion.stats_mut(), pool);
    log_damage(champion.name(), champion.name(), source, &damage);

    let outcome = if champion.is_dead() {
        let death = champion.die();
        let reward = champion.increase_exp(GameConfig::KILL_REWARD);
        AttackOutcome::Defeated { death, reward }
    } else {
        AttackOutcome::Survived
    };

    AttackReport {
        source,
        damage,
        outcome,
    }
}

fn log_damage(attacker: &str, defender: &str, source: StatKey, damage: &DamageOutcome) {
    tracing::debug!(
        attacker,
        defender,
        %source,
        pool = damage.pool,
        defense_lost = damage.defense_lost,
        health_lost = damage.health_lost,
        "attack resolved"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::create;
    use crate::stats::StatBlock;

    fn pair() -> (Champion, Champion) {
        let attacker = create("MAGE", "Merlin", "HUMAN", "MALE").unwrap();
        let defender = create("ROGUE", "Pip", "HOBBIT", "MALE").unwrap();
        (attacker, defender)
    }

    #[test]
    fn lethal_attack_triggers_death_and_reward() {
        let (mut attacker, mut defender) = pair();
        *attacker.stats_mut() = StatBlock::new(5, 5, 5, 5, 5);
        *defender.stats_mut() = StatBlock::new(3, 1, 2, 1, 1);
        defender.increase_exp(40);

        let report = attacker.attack(StatKey::Attack, &mut defender);

        assert_eq!(defender.stats().defense, 0);
        assert_eq!(defender.stats().health, 0);
        assert!(report.defender_died());
        assert_eq!(defender.current_exp(), 20.0);
        assert_eq!(attacker.current_exp(), 15.0);
        assert_eq!(
            report.defender_events(),
            vec![ChampionEvent::Died {
                exp_before: 40.0,
                exp_after: 20.0
            }]
        );
    }

    #[test]
    fn surviving_defender_keeps_exp() {
        let (mut attacker, mut defender) = pair();
        defender.increase_exp(40);

        // Mage attack 7 vs rogue defense 5 / health 6: defense 0, health 3.
        let report = attacker.attack(StatKey::Attack, &mut defender);

        assert_eq!(report.outcome, AttackOutcome::Survived);
        assert_eq!(report.damage.pool, 7);
        assert_eq!(defender.stats().defense, 0);
        assert_eq!(defender.stats().health, 3);
        assert_eq!(defender.current_exp(), 40.0);
        assert_eq!(attacker.current_exp(), 0.0);
        assert!(report.attacker_events().is_empty());
    }

    #[test]
    fn any_stat_can_feed_the_pool() {
        let (mut attacker, mut defender) = pair();

        // Mage speed is 5: defense 5 -> 0 and one health point.
        let report = attacker.attack(StatKey::Speed, &mut defender);

        assert_eq!(report.source, StatKey::Speed);
        assert_eq!(defender.stats().defense, 0);
        assert_eq!(defender.stats().health, 5);
        // The attacker's own stat is only read.
        assert_eq!(attacker.stats().speed, 5);
    }

    #[test]
    fn attacking_a_dead_champion_kills_again() {
        let (mut attacker, mut defender) = pair();
        *defender.stats_mut() = StatBlock::new(0, 4, 0, 5, 10);
        defender.increase_exp(8);

        let first = attacker.attack(StatKey::Magic, &mut defender);
        let second = attacker.attack(StatKey::Magic, &mut defender);

        assert!(first.defender_died());
        assert!(second.defender_died());
        assert_eq!(first.damage.wasted, 10);
        assert_eq!(defender.current_exp(), 2.0);
        assert_eq!(attacker.current_exp(), 30.0);
    }

    #[test]
    fn self_attack_drains_own_stats() {
        let (mut champion, _) = pair();
        *champion.stats_mut() = StatBlock::new(3, 5, 2, 1, 1);
        champion.increase_exp(40);

        let report = champion.attack_self(StatKey::Attack);

        assert_eq!(report.damage.pool, 5);
        assert_eq!(report.damage.wasted, 1);
        assert_eq!(*champion.stats(), StatBlock::new(0, 5, 0, 1, 1));
        assert!(report.defender_died());
        // 40 halved on death, then the 15 point reward
        assert_eq!(champion.current_exp(), 35.0);
        assert_eq!(
            report.defender_events(),
            vec![ChampionEvent::Died {
                exp_before: 40.0,
                exp_after: 20.0
            }]
        );
    }

    #[test]
    fn self_attack_reads_pool_before_damage() {
        let (mut champion, _) = pair();
        *champion.stats_mut() = StatBlock::new(3, 0, 2, 0, 0);

        // Pool is the starting health of 3, not what is left mid-attack.
        let report = champion.attack_self(StatKey::Health);

        assert_eq!(report.damage.pool, 3);
        assert_eq!(report.outcome, AttackOutcome::Survived);
        assert_eq!(champion.stats().defense, 0);
        assert_eq!(champion.stats().health, 1);
    }

    #[test]
    fn kill_reward_can_level_up_attacker() {
        let (mut attacker, mut defender) = pair();
        attacker.increase_exp(90);
        *defender.stats_mut() = StatBlock::new(1, 0, 0, 0, 0);

        let report = attacker.attack(StatKey::Attack, &mut defender);

        assert_eq!(attacker.level(), 1);
        assert_eq!(attacker.stat_points(), 3);
        assert_eq!(attacker.total_exp(), 105.0);
        assert!(matches!(
            report.attacker_events().last(),
            Some(ChampionEvent::LeveledUp { level: 1, .. })
        ));
    }
}
