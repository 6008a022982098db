//! One champion attacks another.

use anyhow::{Result, anyhow};
use clap::Parser;

use champion_core::StatKey;

use super::FileRoster;
use crate::render;

/// One champion attacks another; both are saved afterwards
#[derive(Parser, Debug)]
pub struct Duel {
    /// Attacking champion
    pub attacker: String,

    /// Defending champion
    pub defender: String,

    /// Attacker stat used as the damage pool (health, attack, defense, magic, speed)
    #[arg(short, long, default_value = "attack")]
    pub stat: String,

    /// Number of attacks to make
    #[arg(short = 'n', long, default_value_t = 1)]
    pub rounds: u32,
}

impl Duel {
    pub fn execute(self, roster: &FileRoster) -> Result<()> {
        let source: StatKey = self
            .stat
            .parse()
            .map_err(|_| anyhow!("unknown stat {:?}", self.stat))?;

        roster.load(&self.attacker)?;
        if self.defender != self.attacker {
            roster.load(&self.defender)?;
        }

        for _ in 0..self.rounds.max(1) {
            let report = roster.attack(&self.attacker, &self.defender, source)?;
            render::print_attack(&self.attacker, &self.defender, &report);
        }

        roster.save(&self.attacker)?;
        roster.save(&self.defender)?;
        Ok(())
    }
}
