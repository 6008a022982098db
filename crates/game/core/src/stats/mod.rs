//! Stat system.
//!
//! A champion has exactly five stats. [`StatBlock`] stores them, [`StatKey`]
//! addresses them, and [`StatAllocation`] describes a stat-point purchase
//! applied by the leveling rules.
//!
//! ```text
//! [ StatKey ] ──get/get_mut──▶ [ StatBlock ] ◀──apply── [ StatAllocation ]
//! ```

pub mod allocation;
pub mod block;

pub use allocation::StatAllocation;
pub use block::{StatBlock, StatKey, StatValue};
