//! List saved champions.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use champion_runtime::ChampionRepository;

use super::FileRoster;

/// List saved champions
#[derive(Parser, Debug)]
pub struct List {}

impl List {
    pub fn execute(self, roster: &FileRoster) -> Result<()> {
        let repository = roster.repository();
        let names = repository.list_names().with_context(|| {
            format!(
                "Failed to read save directory: {}",
                repository.base_dir().display()
            )
        })?;

        if names.is_empty() {
            println!("{}", style("No saved champions").dim());
            return Ok(());
        }

        for name in names {
            match roster.load(&name) {
                Ok(summary) => println!(
                    "  {} {:<10} {:<8} {}",
                    style("→").cyan(),
                    style(&summary.name).bold(),
                    summary.archetype,
                    style(format!("{} {}", summary.race, summary.gender)).dim()
                ),
                Err(err) => println!(
                    "  {} {:<10} {}",
                    style("✗").red(),
                    style(&name).bold(),
                    style(err).red()
                ),
            }
        }
        Ok(())
    }
}
