//! Repository layer for champion records.
//!
//! Repositories hold the durable copy of a champion: one
//! [`ChampionRecord`](champion_core::ChampionRecord) per name, overwritten on
//! every save. Live champions are held by the roster, not here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileChampionRepository;
pub use memory::InMemoryChampionRepo;
pub use traits::ChampionRepository;
