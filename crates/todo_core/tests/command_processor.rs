use todo_core::{Filter, Intent, MemorySlotRepository, Outcome, TodoService};
use uuid::Uuid;

const KEY: &str = "react-todos";
const TODO_ITEMS: [&str; 3] = [
    "Book doctor appointment",
    "Buy birthday gift for Mom",
    "Find place for vacation",
];

fn service_with<'a>(
    repo: &'a MemorySlotRepository,
    titles: &[&str],
) -> TodoService<&'a MemorySlotRepository> {
    let mut service = TodoService::open(repo, KEY);
    for title in titles {
        service.apply(Intent::Add((*title).to_string())).unwrap();
    }
    service
}

fn commit_edit(
    service: &mut TodoService<&MemorySlotRepository>,
    index: usize,
    text: &str,
) -> Outcome {
    let id = service.items()[index].id;
    service.apply(Intent::BeginEdit(id)).unwrap();
    service
        .apply(Intent::EditCommit {
            id,
            text: text.to_string(),
        })
        .unwrap()
}

#[test]
fn adds_keep_order_and_count_remaining() {
    let repo = MemorySlotRepository::new();
    let service = service_with(&repo, &TODO_ITEMS[..2]);

    let view = service.view();
    assert_eq!(view.titles(), TODO_ITEMS[..2].to_vec());
    assert_eq!(view.remaining_count, 2);
    assert_eq!(view.remaining_label, "2 items left");
}

#[test]
fn active_filter_shows_uncompleted_items() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS);
    let second = service.items()[1].id;

    service.apply(Intent::ToggleOne(second)).unwrap();
    service.apply(Intent::SetFilter(Filter::Active)).unwrap();
    assert_eq!(service.view().titles(), vec![TODO_ITEMS[0], TODO_ITEMS[2]]);

    service.apply(Intent::SetFilter(Filter::Completed)).unwrap();
    assert_eq!(service.view().titles(), vec![TODO_ITEMS[1]]);
}

#[test]
fn edit_commit_trims_title() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS);

    let outcome = commit_edit(&mut service, 1, "   buy some sausages   ");
    assert_eq!(outcome, Outcome::Mutated);
    assert_eq!(service.items()[1].title, "buy some sausages");
    assert_eq!(service.persisted_items()[1].title, "buy some sausages");
}

#[test]
fn edit_commit_with_blank_text_removes_item() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS);
    let removed = service.items()[1].id;

    commit_edit(&mut service, 1, "");
    assert_eq!(service.items().len(), 2);
    assert!(service.store().get(removed).is_none());
    assert_eq!(service.persisted_items().len(), 2);
}

#[test]
fn committing_unchanged_text_is_a_normal_update() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS);
    assert_eq!(commit_edit(&mut service, 0, TODO_ITEMS[0]), Outcome::Mutated);
    assert_eq!(service.items()[0].title, TODO_ITEMS[0]);
}

#[test]
fn master_toggle_tracks_individual_toggles() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS);
    let first = service.items()[0].id;

    service.apply(Intent::ToggleAll(true)).unwrap();
    assert!(service.view().all_completed);

    service.apply(Intent::ToggleOne(first)).unwrap();
    assert!(!service.view().all_completed);

    service.apply(Intent::ToggleOne(first)).unwrap();
    assert!(service.view().all_completed);
}

#[test]
fn unknown_ids_leave_state_and_storage_untouched() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS);
    let before = service.items().to_vec();
    let stranger = Uuid::new_v4();

    for intent in [
        Intent::ToggleOne(stranger),
        Intent::Destroy(stranger),
        Intent::BeginEdit(stranger),
        Intent::EditCancel(stranger),
    ] {
        assert_eq!(service.apply(intent).unwrap(), Outcome::Unchanged);
    }
    assert_eq!(service.items(), before.as_slice());
    assert_eq!(service.persisted_items(), before);
}

#[test]
fn clear_completed_visibility_and_effect() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS);
    assert!(!service.view().show_clear_completed);

    let second = service.items()[1].id;
    service.apply(Intent::ToggleOne(second)).unwrap();
    assert!(service.view().show_clear_completed);

    assert_eq!(
        service.apply(Intent::ClearCompleted).unwrap(),
        Outcome::Mutated
    );
    assert_eq!(service.view().titles(), vec![TODO_ITEMS[0], TODO_ITEMS[2]]);
    assert!(!service.view().show_clear_completed);
    assert_eq!(
        service.apply(Intent::ClearCompleted).unwrap(),
        Outcome::Unchanged
    );
}

#[test]
fn reload_rebuilds_from_storage_only() {
    let repo = MemorySlotRepository::new();
    let mut service = service_with(&repo, &TODO_ITEMS[..2]);
    let first = service.items()[0].id;
    service.apply(Intent::ToggleOne(first)).unwrap();
    service.apply(Intent::SetFilter(Filter::Completed)).unwrap();
    service.apply(Intent::BeginEdit(first)).unwrap();

    service.reload();
    assert_eq!(service.filter(), Filter::All);
    assert!(service.editing().is_none());
    assert_eq!(service.items().len(), 2);
    assert!(service.items()[0].completed);
    assert_eq!(service.items()[0].id, first);
}
