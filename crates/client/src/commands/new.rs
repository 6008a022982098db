//! Create a champion and save it.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use champion_runtime::ChampionRepository;

use super::FileRoster;
use crate::render;

/// Create a champion and save it
#[derive(Parser, Debug)]
pub struct New {
    /// Champion name (1 to 10 characters)
    pub name: String,

    /// Class: CLERIC, FIGHTER, MAGE, PALADIN, RANGER, ROGUE
    #[arg(short, long)]
    pub class: String,

    /// Race: HUMAN, ELF, DWARF, HOBBIT, ORC
    #[arg(short, long)]
    pub race: String,

    /// Gender: MALE, FEMALE, OTHER
    #[arg(short, long)]
    pub gender: String,

    /// Overwrite a saved champion with the same name
    #[arg(short, long)]
    pub force: bool,
}

impl New {
    pub fn execute(self, roster: &FileRoster) -> Result<()> {
        let summary = roster.create(&self.class, &self.name, &self.race, &self.gender)?;
        let name = summary.name.as_str();

        if !self.force && roster.repository().exists(name) {
            bail!("champion {name:?} already exists (use --force to overwrite)");
        }

        roster.save(name)?;

        println!("{} Created champion", style("✓").green().bold());
        render::print_summary(&summary);
        Ok(())
    }
}
