//! Driver contract between the conformance runner and a to-do surface.
//!
//! # Responsibility
//! - Name the gestures a scenario can perform and the state it can read.
//! - Address rows by position in the visible list, as a rendered list
//!   would be queried.
//!
//! # Invariants
//! - Indexes are zero-based positions in the current visible list.
//! - An out-of-range index is a driver error, never a silent no-op.

use crate::model::filter::Filter;
use crate::model::item::Item;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type HarnessResult<T> = Result<T, HarnessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// No visible row at the requested position.
    NoSuchRow { index: usize, visible: usize },
    /// Edit gesture without an open edit field.
    NotEditing,
    /// Underlying surface failed.
    Driver(String),
}

impl Display for HarnessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchRow { index, visible } => {
                write!(f, "no visible row at index {index} ({visible} visible)")
            }
            Self::NotEditing => write!(f, "no row is in edit mode"),
            Self::Driver(message) => write!(f, "driver failure: {message}"),
        }
    }
}

impl Error for HarnessError {}

/// Surface the conformance runner acts on and observes.
///
/// Implemented in-process by `ModelDriver`; a browser-backed driver would
/// map the same calls onto DOM gestures and queries.
pub trait TodoDriver {
    /// Types `text` into the new-todo field and commits it.
    fn add(&mut self, text: &str) -> HarnessResult<()>;
    /// Clicks the completion toggle of one row.
    fn toggle_at(&mut self, index: usize) -> HarnessResult<()>;
    /// Checks or unchecks the master toggle.
    fn set_all(&mut self, completed: bool) -> HarnessResult<()>;
    /// Opens the edit field of one row.
    fn begin_edit_at(&mut self, index: usize) -> HarnessResult<()>;
    /// Replaces the text of the open edit field.
    fn type_edit(&mut self, text: &str) -> HarnessResult<()>;
    /// Commits the open edit field (enter or blur).
    fn commit_edit(&mut self) -> HarnessResult<()>;
    /// Abandons the open edit field (escape).
    fn cancel_edit(&mut self) -> HarnessResult<()>;
    fn destroy_at(&mut self, index: usize) -> HarnessResult<()>;
    fn clear_completed(&mut self) -> HarnessResult<()>;
    fn select_filter(&mut self, filter: Filter) -> HarnessResult<()>;
    fn back(&mut self) -> HarnessResult<()>;
    fn forward(&mut self) -> HarnessResult<()>;
    /// Ends the session and starts a new one from persisted storage.
    fn reload(&mut self) -> HarnessResult<()>;

    /// Visible row titles in display order.
    fn labels(&self) -> HarnessResult<Vec<String>>;
    /// Visible row completion flags in display order.
    fn completed_flags(&self) -> HarnessResult<Vec<bool>>;
    /// Remaining-count text, `None` while the footer is hidden.
    fn counter_text(&self) -> HarnessResult<Option<String>>;
    fn clear_completed_visible(&self) -> HarnessResult<bool>;
    fn toggle_all_checked(&self) -> HarnessResult<bool>;
    fn selected_filter(&self) -> HarnessResult<Filter>;
    fn new_todo_value(&self) -> HarnessResult<String>;
    /// Visible position of the row in edit mode.
    fn editing_index(&self) -> HarnessResult<Option<usize>>;
    /// Items as stored in the durable slot.
    fn persisted_items(&self) -> HarnessResult<Vec<Item>>;
}
