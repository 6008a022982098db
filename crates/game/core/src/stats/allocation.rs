//! Stat-point purchases.

use super::block::{StatBlock, StatKey, StatValue};

/// Non-negative deltas for each of the five stats.
///
/// Built fluently and handed to [`Champion::increase_stats`], which checks the
/// total against the available stat points before applying anything.
///
/// [`Champion::increase_stats`]: crate::Champion::increase_stats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatAllocation {
    deltas: StatBlock,
}

impl StatAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `points` to the delta for `key`.
    pub fn with(mut self, key: StatKey, points: StatValue) -> Self {
        let delta = self.deltas.get_mut(key);
        *delta = delta.saturating_add(points);
        self
    }

    pub fn health(self, points: StatValue) -> Self {
        self.with(StatKey::Health, points)
    }

    pub fn attack(self, points: StatValue) -> Self {
        self.with(StatKey::Attack, points)
    }

    pub fn defense(self, points: StatValue) -> Self {
        self.with(StatKey::Defense, points)
    }

    pub fn magic(self, points: StatValue) -> Self {
        self.with(StatKey::Magic, points)
    }

    pub fn speed(self, points: StatValue) -> Self {
        self.with(StatKey::Speed, points)
    }

    pub fn get(&self, key: StatKey) -> StatValue {
        self.deltas.get(key)
    }

    /// Points this allocation costs.
    pub fn total(&self) -> u64 {
        self.deltas.total()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `stats` with every delta added, or the first stat that would
    /// overflow.
    pub(crate) fn applied_to(&self, stats: &StatBlock) -> Result<StatBlock, StatKey> {
        let mut result = *stats;
        for (key, delta) in self.deltas.iter() {
            let value = result.get_mut(key);
            *value = value.checked_add(delta).ok_or(key)?;
        }
        Ok(result)
    }
}
