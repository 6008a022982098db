//! Command implementations for the champions CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod delete;
mod duel;
mod list;
mod new;
mod show;

pub use delete::Delete;
pub use duel::Duel;
pub use list::List;
pub use new::New;
pub use show::Show;

use champion_runtime::{FileChampionRepository, Roster};

pub type FileRoster = Roster<FileChampionRepository>;
