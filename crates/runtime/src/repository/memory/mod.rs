//! In-memory repository implementations for testing and development.

mod champion;

pub use champion::InMemoryChampionRepo;
