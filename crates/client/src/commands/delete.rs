//! Delete a saved champion.
//!
//! Prompts for confirmation unless `--yes` is given.

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use champion_runtime::ChampionRepository;

use super::FileRoster;

/// Delete a saved champion
#[derive(Parser, Debug)]
pub struct Delete {
    /// Champion name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Delete {
    pub fn execute(self, roster: &FileRoster) -> Result<()> {
        let repository = roster.repository();
        if !repository.exists(&self.name) {
            bail!("no champion named {:?}", self.name);
        }

        if !self.yes && !self.confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        repository.delete(&self.name)?;
        println!(
            "{} Deleted {}",
            style("✓").green().bold(),
            style(&self.name).cyan()
        );
        Ok(())
    }

    /// Prompt user for confirmation
    fn confirm(&self) -> Result<bool> {
        print!(
            "{} ",
            style(format!("Delete {}? [y/N]", self.name)).yellow().bold()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}
