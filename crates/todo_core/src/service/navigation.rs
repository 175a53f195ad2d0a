//! Filter routing history.
//!
//! Every filter selection is a distinct history entry, so back/forward
//! reselect the previously active filter the way browser history does.

use crate::model::filter::Filter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterHistory {
    entries: Vec<Filter>,
    cursor: usize,
}

impl Default for FilterHistory {
    fn default() -> Self {
        Self::new(Filter::All)
    }
}

impl FilterHistory {
    pub fn new(initial: Filter) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> Filter {
        self.entries[self.cursor]
    }

    /// Records a new entry, dropping any forward entries.
    pub fn push(&mut self, filter: Filter) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(filter);
        self.cursor += 1;
    }

    /// Steps back; returns the newly current filter or `None` at the start.
    pub fn back(&mut self) -> Option<Filter> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Steps forward; returns the newly current filter or `None` at the end.
    pub fn forward(&mut self) -> Option<Filter> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the history is seeded with its initial filter.
    /// Kept to pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::FilterHistory;
    use crate::model::filter::Filter;

    #[test]
    fn back_and_forward_walk_entries() {
        let mut history = FilterHistory::default();
        history.push(Filter::Active);
        history.push(Filter::Completed);

        assert_eq!(history.back(), Some(Filter::Active));
        assert_eq!(history.back(), Some(Filter::All));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(Filter::Active));
        assert_eq!(history.current(), Filter::Active);
    }

    #[test]
    fn push_after_back_discards_forward_entries() {
        let mut history = FilterHistory::default();
        history.push(Filter::Active);
        history.push(Filter::Completed);
        history.back();

        history.push(Filter::All);
        assert_eq!(history.forward(), None);
        assert_eq!(history.len(), 3);
        assert_eq!(history.back(), Some(Filter::Active));
    }

    #[test]
    fn fresh_history_holds_initial_entry() {
        let history = FilterHistory::new(Filter::Completed);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.current(), Filter::Completed);
    }

    #[test]
    fn reselecting_same_filter_is_still_an_entry() {
        let mut history = FilterHistory::default();
        history.push(Filter::All);
        assert_eq!(history.len(), 2);
        assert_eq!(history.back(), Some(Filter::All));
    }
}
