//! Runtime configuration defaults.
//!
//! The CLI fills `TodoConfig` from flags and environment; library callers
//! can start from `TodoConfig::default()`.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::default_log_level;
use rusqlite::Connection;
use std::path::PathBuf;

/// Slot key the TodoMVC React demo stores its list under.
pub const DEFAULT_SLOT_KEY: &str = "react-todos";

/// Default SQLite file name when no path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "todos.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Storage slot holding the persisted snapshot.
    pub slot_key: String,
    /// SQLite file; `None` opens an in-memory database.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl TodoConfig {
    /// Returns an error message when a field cannot be used.
    pub fn validate(&self) -> Result<(), String> {
        let key = self.slot_key.trim();
        if key.is_empty() || key != self.slot_key {
            return Err(format!(
                "slot key must be non-empty without surrounding whitespace, got `{}`",
                self.slot_key
            ));
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(format!(
                    "log_dir must be an absolute path, got `{}`",
                    dir.display()
                ));
            }
        }
        Ok(())
    }

    /// Opens the configured database, or an in-memory one when
    /// `db_path` is `None`.
    pub fn open_db(&self) -> DbResult<Connection> {
        match &self.db_path {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }
}
