//! Filter projection and derived display data.
//!
//! # Responsibility
//! - Project the item sequence through the active filter.
//! - Derive counters and control states the UI renders.
//!
//! # Invariants
//! - Projection never mutates its input and preserves order.
//! - The remaining counter counts active items, not all items.

use crate::model::filter::Filter;
use crate::model::item::{Item, ItemId};
use crate::store::item_store::ItemStore;

/// Items visible under `filter`, in store order.
pub fn visible_items(items: &[Item], filter: Filter) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| filter.accepts(item.completed))
        .collect()
}

/// Remaining-count label: `1 item left`, otherwise `N items left`.
pub fn remaining_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{count} items left")
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
    /// Row is in edit mode; its toggle and label are hidden.
    pub editing: bool,
}

/// Everything the UI needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub filter: Filter,
    pub items: Vec<ItemView>,
    pub total_count: usize,
    pub remaining_count: usize,
    pub remaining_label: String,
    pub completed_count: usize,
    pub show_clear_completed: bool,
    /// Master toggle checked state.
    pub all_completed: bool,
    /// Main list and footer are hidden for an empty store.
    pub show_main: bool,
}

impl TodoView {
    /// Builds a view from the store, filter and current edit target.
    pub fn build(store: &ItemStore, filter: Filter, editing: Option<ItemId>) -> Self {
        let items = visible_items(store.all(), filter)
            .into_iter()
            .map(|item| ItemView {
                id: item.id,
                title: item.title.clone(),
                completed: item.completed,
                editing: editing == Some(item.id),
            })
            .collect();
        let remaining_count = store.active_count();
        let completed_count = store.completed_count();

        Self {
            filter,
            items,
            total_count: store.len(),
            remaining_count,
            remaining_label: remaining_label(remaining_count),
            completed_count,
            show_clear_completed: completed_count > 0,
            all_completed: store.all_completed(),
            show_main: !store.is_empty(),
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{remaining_label, visible_items, TodoView};
    use crate::model::filter::Filter;
    use crate::model::item::Item;
    use crate::store::item_store::ItemStore;

    fn three_with_second_completed() -> ItemStore {
        let mut store = ItemStore::new();
        for title in ["one", "two", "three"] {
            store.append(Item::new(title).unwrap());
        }
        let id = store.all()[1].id;
        store.update(id, |item| item.completed = true);
        store
    }

    #[test]
    fn filters_select_expected_subsets() {
        let store = three_with_second_completed();
        let titles = |filter: Filter| -> Vec<String> {
            visible_items(store.all(), filter)
                .into_iter()
                .map(|item| item.title.clone())
                .collect()
        };

        assert_eq!(titles(Filter::All), vec!["one", "two", "three"]);
        assert_eq!(titles(Filter::Active), vec!["one", "three"]);
        assert_eq!(titles(Filter::Completed), vec!["two"]);
    }

    #[test]
    fn remaining_label_pluralizes_everything_but_one() {
        assert_eq!(remaining_label(0), "0 items left");
        assert_eq!(remaining_label(1), "1 item left");
        assert_eq!(remaining_label(3), "3 items left");
    }

    #[test]
    fn view_derives_control_state() {
        let store = three_with_second_completed();
        let editing = store.all()[0].id;
        let view = TodoView::build(&store, Filter::All, Some(editing));

        assert_eq!(view.remaining_count, 2);
        assert_eq!(view.remaining_label, "2 items left");
        assert!(view.show_clear_completed);
        assert!(!view.all_completed);
        assert!(view.show_main);
        assert!(view.items[0].editing);
        assert!(!view.items[1].editing);
    }

    #[test]
    fn empty_store_hides_main_and_clear_completed() {
        let view = TodoView::build(&ItemStore::new(), Filter::Completed, None);
        assert!(!view.show_main);
        assert!(!view.show_clear_completed);
        assert!(!view.all_completed);
        assert!(view.items.is_empty());
    }
}
