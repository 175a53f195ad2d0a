//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the item record and the visibility filter.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod filter;
pub mod item;
