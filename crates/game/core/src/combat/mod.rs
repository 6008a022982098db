//! Combat resolution system.
//!
//! An attack draws a damage pool from one of the attacker's stats and spends
//! it unit by unit against the defender's defense and health. All combat
//! logic is deterministic.
//!
//! # Core Functions
//!
//! - `absorb_damage`: spends a damage pool against a stat block
//! - `resolve_attack`: full exchange (damage, death check, kill reward)
//! - `resolve_self_attack`: the same exchange with one champion in both roles

pub mod damage;
pub mod result;

pub use damage::{DamageOutcome, absorb_damage};
pub use result::{AttackOutcome, AttackReport, resolve_attack, resolve_self_attack};
