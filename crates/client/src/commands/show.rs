//! Show a saved champion.

use anyhow::Result;
use clap::Parser;

use super::FileRoster;
use crate::render;

/// Show a saved champion
#[derive(Parser, Debug)]
pub struct Show {
    /// Champion name
    pub name: String,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Show {
    pub fn execute(self, roster: &FileRoster) -> Result<()> {
        let summary = roster.load(&self.name)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            render::print_summary(&summary);
        }
        Ok(())
    }
}
