//! To-do command processor.
//!
//! # Responsibility
//! - Translate discrete user intents into item store operations.
//! - Mirror every committed mutation to the snapshot slot.
//! - Track transient UI state: active filter history, edit session and
//!   the new-todo input.
//!
//! # Invariants
//! - Exactly one writer: intents run to completion one at a time.
//! - Unknown ids and blank adds never mutate the store or write storage.
//! - An edit commit that trims to nothing deletes the edited item.

use crate::model::filter::Filter;
use crate::model::item::{normalize_title, Item, ItemId};
use crate::repo::slot_repo::{RepoError, SlotRepository};
use crate::service::navigation::FilterHistory;
use crate::store::item_store::ItemStore;
use crate::store::snapshot::SnapshotStore;
use crate::view::filter_view::TodoView;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for intent processing.
#[derive(Debug)]
pub enum ServiceError {
    /// Snapshot write failed after the in-memory mutation was applied.
    Persist(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persist(err) => write!(f, "failed to persist snapshot: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Persist(value)
    }
}

/// Discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Commit the new-todo input.
    Add(String),
    ToggleOne(ItemId),
    /// Master toggle.
    ToggleAll(bool),
    /// Enter edit mode on one item (double click).
    BeginEdit(ItemId),
    /// Commit the edit field (enter or blur).
    EditCommit { id: ItemId, text: String },
    /// Abandon the edit field (escape).
    EditCancel(ItemId),
    /// Per-item destroy control.
    Destroy(ItemId),
    ClearCompleted,
    SetFilter(Filter),
    NavigateBack,
    NavigateForward,
}

impl Intent {
    fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::ToggleOne(_) => "toggle_one",
            Self::ToggleAll(_) => "toggle_all",
            Self::BeginEdit(_) => "begin_edit",
            Self::EditCommit { .. } => "edit_commit",
            Self::EditCancel(_) => "edit_cancel",
            Self::Destroy(_) => "destroy",
            Self::ClearCompleted => "clear_completed",
            Self::SetFilter(_) => "set_filter",
            Self::NavigateBack => "navigate_back",
            Self::NavigateForward => "navigate_forward",
        }
    }
}

/// Whether an intent changed the item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Mutated,
    Unchanged,
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Mutated
        } else {
            Self::Unchanged
        }
    }

    pub fn is_mutated(self) -> bool {
        self == Self::Mutated
    }
}

/// In-progress edit of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ItemId,
    pub draft: String,
}

/// One to-do session over a snapshot slot.
pub struct TodoService<R: SlotRepository> {
    snapshots: SnapshotStore<R>,
    store: ItemStore,
    history: FilterHistory,
    editing: Option<EditSession>,
    new_todo_input: String,
}

impl<R: SlotRepository> TodoService<R> {
    /// Starts a session seeded from the persisted snapshot.
    ///
    /// A missing or malformed snapshot starts an empty session.
    pub fn open(repo: R, slot_key: impl Into<String>) -> Self {
        let snapshots = SnapshotStore::new(repo, slot_key);
        // `load` only returns validated, id-unique sequences.
        let store = ItemStore::from_items(snapshots.load()).unwrap_or_default();
        info!(
            "event=session_open module=service status=ok slot={} items={}",
            snapshots.slot_key(),
            store.len()
        );
        Self {
            snapshots,
            store,
            history: FilterHistory::default(),
            editing: None,
            new_todo_input: String::new(),
        }
    }

    /// Restarts the session: all in-memory state is discarded and the
    /// store is rebuilt from the persisted snapshot alone.
    pub fn reload(&mut self) {
        self.store = ItemStore::from_items(self.snapshots.load()).unwrap_or_default();
        self.history = FilterHistory::default();
        self.editing = None;
        self.new_todo_input.clear();
        info!(
            "event=session_reload module=service status=ok slot={} items={}",
            self.snapshots.slot_key(),
            self.store.len()
        );
    }

    /// Applies one intent and persists the result when the store changed.
    ///
    /// # Errors
    /// - `ServiceError::Persist` when the snapshot write fails. The
    ///   in-memory mutation is kept.
    pub fn apply(&mut self, intent: Intent) -> ServiceResult<Outcome> {
        let name = intent.name();
        let outcome = self.dispatch(intent);

        if outcome.is_mutated() {
            if let Err(err) = self.snapshots.save(self.store.all()) {
                error!(
                    "event=intent_applied module=service intent={name} status=error error_code=snapshot_write_failed error={err}"
                );
                return Err(err.into());
            }
            info!(
                "event=intent_applied module=service intent={name} status=mutated items={} remaining={}",
                self.store.len(),
                self.store.active_count()
            );
        } else {
            debug!("event=intent_applied module=service intent={name} status=unchanged");
        }

        Ok(outcome)
    }

    fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Add(text) => {
                self.new_todo_input.clear();
                let added = Item::new(&text).is_some_and(|item| self.store.append(item));
                Outcome::from_changed(added)
            }
            Intent::ToggleOne(id) => Outcome::from_changed(self.store.update(id, Item::toggle)),
            Intent::ToggleAll(completed) => {
                Outcome::from_changed(self.store.toggle_all(completed) > 0)
            }
            Intent::BeginEdit(id) => {
                if let Some(item) = self.store.get(id) {
                    self.editing = Some(EditSession {
                        id,
                        draft: item.title.clone(),
                    });
                }
                Outcome::Unchanged
            }
            Intent::EditCommit { id, text } => {
                if !self.is_editing(id) {
                    return Outcome::Unchanged;
                }
                self.editing = None;
                let changed = match normalize_title(&text) {
                    Some(title) => self.store.update(id, |item| item.title = title),
                    None => self.store.remove(id),
                };
                Outcome::from_changed(changed)
            }
            Intent::EditCancel(id) => {
                if self.is_editing(id) {
                    self.editing = None;
                }
                Outcome::Unchanged
            }
            Intent::Destroy(id) => {
                let removed = self.store.remove(id);
                self.drop_stale_edit();
                Outcome::from_changed(removed)
            }
            Intent::ClearCompleted => {
                let removed = self.store.clear_completed();
                self.drop_stale_edit();
                Outcome::from_changed(removed > 0)
            }
            Intent::SetFilter(filter) => {
                self.history.push(filter);
                Outcome::Unchanged
            }
            Intent::NavigateBack => {
                self.history.back();
                Outcome::Unchanged
            }
            Intent::NavigateForward => {
                self.history.forward();
                Outcome::Unchanged
            }
        }
    }

    fn is_editing(&self, id: ItemId) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }

    fn drop_stale_edit(&mut self) {
        if let Some(session) = &self.editing {
            if self.store.get(session.id).is_none() {
                self.editing = None;
            }
        }
    }

    /// Replaces the new-todo input text (typing before commit).
    pub fn set_new_todo_input(&mut self, text: impl Into<String>) {
        self.new_todo_input = text.into();
    }

    pub fn new_todo_input(&self) -> &str {
        &self.new_todo_input
    }

    /// Replaces the draft of the active edit session, if any.
    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = text.into();
        }
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn filter(&self) -> Filter {
        self.history.current()
    }

    pub fn items(&self) -> &[Item] {
        self.store.all()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Current render data.
    pub fn view(&self) -> TodoView {
        TodoView::build(
            &self.store,
            self.filter(),
            self.editing.as_ref().map(|session| session.id),
        )
    }

    /// Reads the persisted sequence as a fresh session would see it.
    pub fn persisted_items(&self) -> Vec<Item> {
        self.snapshots.load()
    }
}
