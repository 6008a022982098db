//! Runtime services around the champion rules.
//!
//! This crate wires the pure rules in `champion-core` to durable storage and
//! serializes mutation of live champions. Consumers embed a [`Roster`] over a
//! [`ChampionRepository`] implementation.
//!
//! Modules are organized by responsibility:
//! - [`repository`] stores champion records keyed by name
//! - [`persistence`] implements the save/load contract on top of a repository
//! - [`roster`] owns live champions and runs every operation under one lock
//! - [`config`] resolves storage and log locations from the environment
pub mod config;
pub mod error;
pub mod persistence;
pub mod repository;
pub mod roster;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use persistence::{load_champion, save_champion};
pub use repository::{
    ChampionRepository, FileChampionRepository, InMemoryChampionRepo, RepositoryError,
};
pub use roster::Roster;
