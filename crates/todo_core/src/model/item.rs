//! To-do item domain model.
//!
//! # Responsibility
//! - Define the canonical record held by the item store and persisted in
//!   snapshots.
//! - Own the title normalization rule shared by add and edit paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `title` is non-empty and carries no leading/trailing whitespace.
//! - Items decoded from external input are validated before use.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one to-do item.
pub type ItemId = Uuid;

/// Validation failures for item invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// `id` must not be the nil UUID.
    NilId,
    /// `title` is empty after trimming.
    EmptyTitle,
    /// `title` still carries leading or trailing whitespace.
    UntrimmedTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
            Self::EmptyTitle => write!(f, "item title must not be empty"),
            Self::UntrimmedTitle => {
                write!(f, "item title must not have leading or trailing whitespace")
            }
        }
    }
}

impl Error for ItemValidationError {}

/// One to-do entry.
///
/// Serialized as `{"id", "title", "completed"}`, the persisted snapshot
/// record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

/// Unvalidated wire shape; converted into `Item` through `TryFrom`.
#[derive(Deserialize)]
struct ItemRecord {
    id: ItemId,
    title: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let item = Item {
            id: record.id,
            title: record.title,
            completed: record.completed,
        };
        item.validate()?;
        Ok(item)
    }
}

impl Item {
    /// Creates an active item with a generated id from raw user text.
    ///
    /// Returns `None` when the text is empty after normalization.
    pub fn new(text: &str) -> Option<Self> {
        let title = normalize_title(text)?;
        Some(Self {
            id: Uuid::new_v4(),
            title,
            completed: false,
        })
    }

    /// Checks id and title invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }
        if self.title.trim() != self.title {
            return Err(ItemValidationError::UntrimmedTitle);
        }
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Trims leading/trailing whitespace from user text.
///
/// Returns `None` when nothing is left. Internal whitespace is kept
/// verbatim.
pub fn normalize_title(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
