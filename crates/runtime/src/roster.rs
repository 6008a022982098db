//! Live champions behind a single lock.
//!
//! The roster owns every loaded champion. Each operation takes the lock once
//! and runs to completion, so an attack between two champions never
//! interleaves with another mutation of either of them.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use champion_core::{
    AttackReport, Champion, ChampionEvent, ChampionSummary, ExpReport, StatAllocation, StatKey,
    create,
};

use crate::error::{Result, RuntimeError};
use crate::persistence::{load_champion, save_champion};
use crate::repository::ChampionRepository;

/// Live champions keyed by name, backed by a repository.
pub struct Roster<R> {
    repository: R,
    champions: Mutex<HashMap<String, Champion>>,
}

impl<R: ChampionRepository> Roster<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            champions: Mutex::new(HashMap::new()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Champion>>> {
        self.champions.lock().map_err(|_| RuntimeError::LockPoisoned)
    }

    /// Create a champion from input strings and add it to the roster.
    ///
    /// An existing live champion with the same name is replaced. Nothing is
    /// saved until [`Roster::save`] is called.
    pub fn create(
        &self,
        class_type: &str,
        name: &str,
        race: &str,
        gender: &str,
    ) -> Result<ChampionSummary> {
        let champion = create(class_type, name, race, gender)?;
        let summary = champion.summary();
        self.lock()?.insert(champion.name().to_owned(), champion);
        Ok(summary)
    }

    /// Add an already built champion, replacing any with the same name.
    pub fn insert(&self, champion: Champion) -> Result<()> {
        self.lock()?.insert(champion.name().to_owned(), champion);
        Ok(())
    }

    /// Load `name` from the repository into the roster.
    pub fn load(&self, name: &str) -> Result<ChampionSummary> {
        let champion = load_champion(&self.repository, name)?;
        let summary = champion.summary();
        self.lock()?.insert(champion.name().to_owned(), champion);
        Ok(summary)
    }

    /// Save the live champion `name`.
    pub fn save(&self, name: &str) -> Result<()> {
        let champions = self.lock()?;
        let champion = champions
            .get(name)
            .ok_or_else(|| RuntimeError::NotFound(name.to_owned()))?;
        save_champion(&self.repository, champion)
    }

    /// Save every live champion.
    pub fn save_all(&self) -> Result<usize> {
        let champions = self.lock()?;
        for champion in champions.values() {
            save_champion(&self.repository, champion)?;
        }
        Ok(champions.len())
    }

    /// Copy of the live champion `name`.
    pub fn get(&self, name: &str) -> Result<Champion> {
        self.lock()?
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::NotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.lock()?.contains_key(name))
    }

    /// Names of live champions, sorted.
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.lock()?.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }

    /// Drop `name` from the roster. The saved record is left alone.
    pub fn remove(&self, name: &str) -> Result<Champion> {
        self.lock()?
            .remove(name)
            .ok_or_else(|| RuntimeError::NotFound(name.to_owned()))
    }

    /// Grant experience to `name`.
    pub fn grant_exp(&self, name: &str, amount: u32) -> Result<ExpReport> {
        let mut champions = self.lock()?;
        let champion = champions
            .get_mut(name)
            .ok_or_else(|| RuntimeError::NotFound(name.to_owned()))?;
        let report = champion.increase_exp(amount);
        log_events(name, &report.events());
        Ok(report)
    }

    /// Level `name` up directly.
    pub fn level_up(&self, name: &str) -> Result<ChampionEvent> {
        let mut champions = self.lock()?;
        let champion = champions
            .get_mut(name)
            .ok_or_else(|| RuntimeError::NotFound(name.to_owned()))?;
        let event = match champion.level_up() {
            Ok(level_up) => level_up.into(),
            Err(notice) => notice.to_event(),
        };
        log_events(name, std::slice::from_ref(&event));
        Ok(event)
    }

    /// Spend stat points of `name`. A rejected allocation is reported as an
    /// event, not an error.
    pub fn allocate(&self, name: &str, allocation: StatAllocation) -> Result<ChampionEvent> {
        let mut champions = self.lock()?;
        let champion = champions
            .get_mut(name)
            .ok_or_else(|| RuntimeError::NotFound(name.to_owned()))?;
        let event = match champion.increase_stats(allocation) {
            Ok(remaining) => ChampionEvent::StatsIncreased {
                // allocation fit in the available u32 points
                spent: allocation.total() as u32,
                remaining,
            },
            Err(notice) => notice.to_event(),
        };
        log_events(name, std::slice::from_ref(&event));
        Ok(event)
    }

    /// `attacker` attacks `defender` using its `source` stat.
    ///
    /// Both names are resolved before anything changes. An unknown attacker
    /// is [`RuntimeError::NotFound`]; a defender that is not a live champion
    /// is [`RuntimeError::TypeMismatch`]. A champion may attack itself.
    pub fn attack(&self, attacker: &str, defender: &str, source: StatKey) -> Result<AttackReport> {
        let mut champions = self.lock()?;
        if !champions.contains_key(defender) {
            return Err(RuntimeError::TypeMismatch(defender.to_owned()));
        }

        let report = if attacker == defender {
            champions
                .get_mut(attacker)
                .map(|champion| champion.attack_self(source))
                .ok_or_else(|| RuntimeError::NotFound(attacker.to_owned()))?
        } else {
            let mut attacking = champions
                .remove(attacker)
                .ok_or_else(|| RuntimeError::NotFound(attacker.to_owned()))?;
            let report = match champions.get_mut(defender) {
                Some(defending) => Ok(attacking.attack(source, defending)),
                None => Err(RuntimeError::TypeMismatch(defender.to_owned())),
            };
            champions.insert(attacker.to_owned(), attacking);
            report?
        };

        tracing::info!(
            attacker,
            defender,
            source = %source,
            pool = report.damage.pool,
            defense_lost = report.damage.defense_lost,
            health_lost = report.damage.health_lost,
            "attack resolved"
        );
        log_events(defender, &report.defender_events());
        log_events(attacker, &report.attacker_events());

        Ok(report)
    }
}

fn log_events(champion: &str, events: &[ChampionEvent]) {
    for event in events {
        tracing::info!(champion, event = event.kind(), "{}", event.message());
    }
}
