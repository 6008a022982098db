//! File-based repository implementations.

mod champion;

pub use champion::FileChampionRepository;
