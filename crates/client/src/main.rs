//! Command-line front end for creating, inspecting, and dueling champions.
//!
//! Champions are stored as JSON records in the save directory
//! (`CHAMPIONS_SAVE_DIR`, or the platform data directory).

mod commands;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Delete, Duel, List, New, Show};

use champion_core::GameError;
use champion_runtime::{FileChampionRepository, Roster, RuntimeConfig, RuntimeError};

/// Create, inspect, and duel champions
#[derive(Parser)]
#[command(name = "champions")]
#[command(about = "Champion roster and duels", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to a file in the log directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create a champion and save it
    New(New),

    /// Show a saved champion
    Show(Show),

    /// List saved champions
    List(List),

    /// One champion attacks another; both are saved afterwards
    Duel(Duel),

    /// Delete a saved champion
    Delete(Delete),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CHAMPIONS_SAVE_DIR and CHAMPIONS_LOG_DIR)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();

    logging::setup_logging(cli.log_file.then_some(config.log_dir.as_path()))?;

    let repository = FileChampionRepository::new(&config.save_dir).with_context(|| {
        format!(
            "Failed to open save directory: {}",
            config.save_dir.display()
        )
    })?;
    let roster = Roster::new(repository);

    let result = match cli.command {
        Command::New(cmd) => cmd.execute(&roster),
        Command::Show(cmd) => cmd.execute(&roster),
        Command::List(cmd) => cmd.execute(&roster),
        Command::Duel(cmd) => cmd.execute(&roster),
        Command::Delete(cmd) => cmd.execute(&roster),
    };

    if let Err(err) = &result
        && let Some(runtime_err) = err.downcast_ref::<RuntimeError>()
    {
        tracing::debug!(
            code = runtime_err.error_code(),
            severity = runtime_err.severity().as_str(),
            "command failed"
        );
    }

    result
}
