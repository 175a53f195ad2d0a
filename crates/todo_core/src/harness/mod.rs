//! Conformance harness.
//!
//! # Responsibility
//! - Drive a to-do surface through scripted scenarios.
//! - Assert on visible state and on the persisted snapshot.
//!
//! # Invariants
//! - Scenarios only act through `TodoDriver`; they never touch the store
//!   or storage directly.

pub mod catalog;
pub mod driver;
pub mod model_driver;
pub mod scenario;
