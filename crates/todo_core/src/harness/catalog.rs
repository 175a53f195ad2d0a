//! Built-in conformance scenarios for the TodoMVC behaviour.

use crate::harness::scenario::{Action, Expectation, Scenario};
use crate::model::filter::Filter;

pub const TODO_ITEMS: [&str; 3] = [
    "Book doctor appointment",
    "Buy birthday gift for Mom",
    "Find place for vacation",
];

fn labels(titles: &[&str]) -> Expectation {
    Expectation::Labels(titles.iter().map(|title| (*title).to_string()).collect())
}

fn add(text: &str) -> Action {
    Action::Add(text.to_string())
}

/// Full catalog, grouped by suite.
pub fn builtin_scenarios() -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    scenarios.extend(new_todo());
    scenarios.extend(mark_all());
    scenarios.extend(item());
    scenarios.extend(editing());
    scenarios.extend(counter());
    scenarios.extend(clear_completed());
    scenarios.extend(persistence());
    scenarios.extend(routing());
    scenarios
}

fn new_todo() -> Vec<Scenario> {
    const SUITE: &str = "New Todo";
    vec![
        Scenario::new(SUITE, "should allow me to add todo items")
            .act(add(TODO_ITEMS[0]))
            .expect(labels(&TODO_ITEMS[..1]))
            .act(add(TODO_ITEMS[1]))
            .expect(labels(&TODO_ITEMS[..2]))
            .expect(Expectation::RemainingCount(2)),
        Scenario::new(SUITE, "should clear text input field when an item is added")
            .act(add(TODO_ITEMS[0]))
            .expect(Expectation::NewTodoValue(String::new()))
            .expect(Expectation::PersistedLen(1)),
        Scenario::new(SUITE, "should append new items to the bottom of the list")
            .given_items(&TODO_ITEMS)
            .expect(Expectation::CounterText("3 items left".to_string()))
            .expect(labels(&TODO_ITEMS))
            .expect(Expectation::ItemCount(3))
            .expect(Expectation::PersistedLen(3)),
        Scenario::new(SUITE, "should trim text input and ignore blank entries")
            .act(add("   "))
            .expect(Expectation::ItemCount(0))
            .expect(Expectation::NewTodoValue(String::new()))
            .act(add("  X  "))
            .expect(labels(&["X"])),
    ]
}

fn mark_all() -> Vec<Scenario> {
    const SUITE: &str = "Mark all as completed";
    vec![
        Scenario::new(SUITE, "should allow me to mark all items as completed")
            .given_items(&TODO_ITEMS)
            .act(Action::SetAll(true))
            .expect(Expectation::EveryVisible { completed: true })
            .expect(Expectation::PersistedCompleted(3)),
        Scenario::new(SUITE, "should allow me to clear the complete state of all items")
            .given_items(&TODO_ITEMS)
            .act(Action::SetAll(true))
            .act(Action::SetAll(false))
            .expect(Expectation::EveryVisible { completed: false })
            .expect(Expectation::PersistedCompleted(0)),
        Scenario::new(
            SUITE,
            "complete all checkbox should update state when items are completed / cleared",
        )
        .given_items(&TODO_ITEMS)
        .act(Action::SetAll(true))
        .expect(Expectation::ToggleAllChecked(true))
        .act(Action::Toggle(0))
        .expect(Expectation::ToggleAllChecked(false))
        .act(Action::Toggle(0))
        .expect(Expectation::ToggleAllChecked(true)),
    ]
}

fn item() -> Vec<Scenario> {
    const SUITE: &str = "Item";
    vec![
        Scenario::new(SUITE, "should allow me to mark items as complete")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(0))
            .expect(Expectation::CompletedAt {
                index: 0,
                completed: true,
            })
            .act(Action::Toggle(1))
            .expect(Expectation::CompletedAt {
                index: 1,
                completed: true,
            }),
        Scenario::new(SUITE, "should allow me to un-mark items as complete")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(0))
            .act(Action::Toggle(0))
            .expect(Expectation::CompletedAt {
                index: 0,
                completed: false,
            }),
        Scenario::new(SUITE, "should allow me to edit an item")
            .given_items(&TODO_ITEMS)
            .act(Action::BeginEdit(1))
            .act(Action::TypeEdit("buy some sausages".to_string()))
            .act(Action::CommitEdit)
            .expect(labels(&[TODO_ITEMS[0], "buy some sausages", TODO_ITEMS[2]])),
        Scenario::new(SUITE, "should allow me to destroy an item")
            .given_items(&TODO_ITEMS)
            .act(Action::Destroy(1))
            .expect(labels(&[TODO_ITEMS[0], TODO_ITEMS[2]]))
            .expect(Expectation::PersistedLen(2)),
    ]
}

fn editing() -> Vec<Scenario> {
    const SUITE: &str = "Editing";
    vec![
        Scenario::new(SUITE, "should hide other controls when editing")
            .given_items(&TODO_ITEMS)
            .act(Action::BeginEdit(1))
            .expect(Expectation::EditingIndex(Some(1))),
        Scenario::new(SUITE, "should save edits on blur")
            .given_items(&TODO_ITEMS)
            .act(Action::BeginEdit(1))
            .act(Action::TypeEdit("buy some sausages".to_string()))
            .act(Action::CommitEdit)
            .expect(Expectation::LabelAt {
                index: 1,
                title: "buy some sausages".to_string(),
            })
            .expect(Expectation::EditingIndex(None)),
        Scenario::new(SUITE, "should trim entered text")
            .given_items(&TODO_ITEMS)
            .act(Action::BeginEdit(1))
            .act(Action::TypeEdit("    buy some sausages    ".to_string()))
            .act(Action::CommitEdit)
            .expect(Expectation::LabelAt {
                index: 1,
                title: "buy some sausages".to_string(),
            }),
        Scenario::new(SUITE, "should remove the item if an empty text string was entered")
            .given_items(&TODO_ITEMS)
            .act(Action::BeginEdit(1))
            .act(Action::TypeEdit(String::new()))
            .act(Action::CommitEdit)
            .expect(Expectation::ItemCount(2))
            .expect(Expectation::PersistedLen(2)),
        Scenario::new(SUITE, "should cancel edits on escape")
            .given_items(&TODO_ITEMS)
            .act(Action::BeginEdit(1))
            .act(Action::TypeEdit(format!("{}buy some sausages", TODO_ITEMS[1])))
            .act(Action::CancelEdit)
            .expect(Expectation::LabelAt {
                index: 1,
                title: TODO_ITEMS[1].to_string(),
            })
            .expect(Expectation::EditingIndex(None)),
    ]
}

fn counter() -> Vec<Scenario> {
    vec![
        Scenario::new("Counter", "should display the current number of todo items")
            .act(add(TODO_ITEMS[0]))
            .expect(Expectation::CounterText("1 item left".to_string()))
            .act(add(TODO_ITEMS[1]))
            .expect(Expectation::CounterText("2 items left".to_string())),
    ]
}

fn clear_completed() -> Vec<Scenario> {
    const SUITE: &str = "Clear completed button";
    vec![
        Scenario::new(SUITE, "should display the correct text")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(0))
            .expect(Expectation::ClearCompletedVisible(true)),
        Scenario::new(SUITE, "should remove completed items when clicked")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(1))
            .act(Action::ClearCompleted)
            .expect(Expectation::ItemCount(2))
            .expect(labels(&[TODO_ITEMS[0], TODO_ITEMS[2]])),
        Scenario::new(SUITE, "should be hidden when there are no items that are completed")
            .given_items(&TODO_ITEMS)
            .expect(Expectation::ClearCompletedVisible(false))
            .act(Action::Toggle(0))
            .act(Action::Toggle(0))
            .expect(Expectation::ClearCompletedVisible(false)),
    ]
}

fn persistence() -> Vec<Scenario> {
    const SUITE: &str = "Persistence";
    vec![
        Scenario::new(SUITE, "should persist its data")
            .given_items(&TODO_ITEMS[..2])
            .act(Action::Toggle(0))
            .expect(Expectation::CompletedAt {
                index: 0,
                completed: true,
            })
            .expect(labels(&TODO_ITEMS[..2]))
            .expect(Expectation::PersistedCompleted(1))
            .act(Action::Reload)
            .expect(Expectation::CompletedAt {
                index: 0,
                completed: true,
            })
            .expect(labels(&TODO_ITEMS[..2])),
        Scenario::new(SUITE, "should not persist the active filter")
            .given_items(&TODO_ITEMS)
            .act(Action::SelectFilter(Filter::Completed))
            .act(Action::Reload)
            .expect(Expectation::SelectedFilter(Filter::All))
            .expect(Expectation::ItemCount(3)),
    ]
}

fn routing() -> Vec<Scenario> {
    const SUITE: &str = "Routing";
    vec![
        Scenario::new(SUITE, "should allow me to display active items")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(1))
            .act(Action::SelectFilter(Filter::Active))
            .expect(Expectation::ItemCount(2))
            .expect(labels(&[TODO_ITEMS[0], TODO_ITEMS[2]])),
        Scenario::new(SUITE, "should allow me to display completed items")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(1))
            .act(Action::SelectFilter(Filter::Completed))
            .expect(Expectation::ItemCount(1))
            .expect(labels(&[TODO_ITEMS[1]])),
        Scenario::new(SUITE, "should allow me to display all items")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(1))
            .act(Action::SelectFilter(Filter::Active))
            .act(Action::SelectFilter(Filter::Completed))
            .act(Action::SelectFilter(Filter::All))
            .expect(Expectation::ItemCount(3)),
        Scenario::new(SUITE, "should respect the back button")
            .given_items(&TODO_ITEMS)
            .act(Action::Toggle(1))
            .act(Action::SelectFilter(Filter::All))
            .expect(Expectation::ItemCount(3))
            .act(Action::SelectFilter(Filter::Active))
            .expect(Expectation::ItemCount(2))
            .act(Action::SelectFilter(Filter::Completed))
            .expect(Expectation::ItemCount(1))
            .act(Action::Back)
            .expect(Expectation::ItemCount(2))
            .act(Action::Back)
            .expect(Expectation::ItemCount(3))
            .act(Action::Forward)
            .expect(Expectation::SelectedFilter(Filter::Active)),
        Scenario::new(SUITE, "should highlight the currently applied filter")
            .given_items(&TODO_ITEMS)
            .expect(Expectation::SelectedFilter(Filter::All))
            .act(Action::SelectFilter(Filter::Active))
            .expect(Expectation::SelectedFilter(Filter::Active))
            .act(Action::SelectFilter(Filter::Completed))
            .expect(Expectation::SelectedFilter(Filter::Completed))
            .act(Action::SelectFilter(Filter::All))
            .expect(Expectation::SelectedFilter(Filter::All)),
    ]
}

#[cfg(test)]
mod tests {
    use super::builtin_scenarios;
    use std::collections::HashSet;

    #[test]
    fn scenario_names_are_unique() {
        let scenarios = builtin_scenarios();
        let names: HashSet<_> = scenarios.iter().map(|scenario| scenario.full_name()).collect();
        assert_eq!(names.len(), scenarios.len());
    }
}
