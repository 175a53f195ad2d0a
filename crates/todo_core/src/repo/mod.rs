//! Storage slot abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the two-method durable slot contract.
//! - Isolate SQLite query details from snapshot and service code.
//!
//! # Invariants
//! - Slot values are opaque text at this layer; encoding lives in
//!   `store::snapshot`.

pub mod slot_repo;
