//! Ordered in-memory item collection.
//!
//! # Responsibility
//! - Hold the authoritative to-do state for one session.
//! - Report whether each mutation actually changed anything.
//!
//! # Invariants
//! - Order is insertion order; no operation reorders surviving items.
//! - `id` values are unique within the store.
//! - Operations on unknown ids are no-ops.

use crate::model::item::{Item, ItemId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from restored items.
    ///
    /// Returns `None` when the sequence contains duplicate ids.
    pub fn from_items(items: Vec<Item>) -> Option<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        if items.iter().all(|item| seen.insert(item.id)) {
            Some(Self { items })
        } else {
            None
        }
    }

    /// Appends an item at the end.
    ///
    /// Returns `false` (and leaves the store untouched) when the id is
    /// already present.
    pub fn append(&mut self, item: Item) -> bool {
        if self.get(item.id).is_some() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the item with `id`; returns whether one was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Applies `mutator` to the item with `id`.
    ///
    /// Returns whether the item exists. The id is restored after the
    /// mutator runs so callers cannot break uniqueness.
    pub fn update(&mut self, id: ItemId, mutator: impl FnOnce(&mut Item)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                mutator(item);
                item.id = id;
                true
            }
            None => false,
        }
    }

    /// Sets `completed` on every item; returns how many items changed.
    pub fn toggle_all(&mut self, completed: bool) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|item| item.completed != completed) {
            item.completed = completed;
            changed += 1;
        }
        changed
    }

    /// Removes every completed item; returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Items with `completed == false`.
    pub fn active_count(&self) -> usize {
        self.items.len() - self.completed_count()
    }

    /// `true` when the store is non-empty and every item is completed.
    pub fn all_completed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.completed)
    }
}
