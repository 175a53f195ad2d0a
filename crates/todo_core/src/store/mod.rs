//! In-memory item state and its persisted snapshot.

pub mod item_store;
pub mod snapshot;
