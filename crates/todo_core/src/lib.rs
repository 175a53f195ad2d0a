//! Core domain logic for the to-do list.
//! This crate is the single source of truth for item, filter and
//! persistence invariants.

pub mod config;
pub mod db;
pub mod harness;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use config::{TodoConfig, DEFAULT_SLOT_KEY};
pub use harness::catalog::builtin_scenarios;
pub use harness::driver::{HarnessError, HarnessResult, TodoDriver};
pub use harness::model_driver::ModelDriver;
pub use harness::scenario::{
    run_scenario, run_suite, Action, Expectation, Scenario, ScenarioReport, SuiteReport,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::Filter;
pub use model::item::{normalize_title, Item, ItemId, ItemValidationError};
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
};
pub use service::todo_service::{
    EditSession, Intent, Outcome, ServiceError, ServiceResult, TodoService,
};
pub use store::item_store::ItemStore;
pub use store::snapshot::{decode_snapshot, encode_snapshot, SnapshotError, SnapshotStore};
pub use view::filter_view::{remaining_label, visible_items, ItemView, TodoView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
