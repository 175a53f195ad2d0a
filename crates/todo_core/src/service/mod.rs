//! Core use-case services.
//!
//! # Responsibility
//! - Turn user intents into store mutations and snapshot writes.
//! - Keep CLI and harness layers decoupled from storage details.

pub mod navigation;
pub mod todo_service;
