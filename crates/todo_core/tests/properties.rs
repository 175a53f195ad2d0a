use proptest::prelude::*;
use todo_core::{
    decode_snapshot, encode_snapshot, normalize_title, visible_items, Filter, Intent, Item, ItemId,
    MemorySlotRepository, TodoService,
};

const KEY: &str = "todos";

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    ToggleAll(bool),
    Edit(usize, String),
    Destroy(usize),
    ClearCompleted,
}

fn arb_text() -> impl Strategy<Value = String> {
    "[ a-z]{0,10}"
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_text().prop_map(Op::Add),
        2 => (0usize..8).prop_map(Op::Toggle),
        1 => any::<bool>().prop_map(Op::ToggleAll),
        1 => (0usize..8, arb_text()).prop_map(|(index, text)| Op::Edit(index, text)),
        1 => (0usize..8).prop_map(Op::Destroy),
        1 => Just(Op::ClearCompleted),
    ]
}

fn id_at(service: &TodoService<&MemorySlotRepository>, index: usize) -> Option<ItemId> {
    service.items().get(index).map(|item| item.id)
}

fn apply_op(service: &mut TodoService<&MemorySlotRepository>, op: &Op) {
    match op {
        Op::Add(text) => {
            service.apply(Intent::Add(text.clone())).unwrap();
        }
        Op::Toggle(index) => {
            if let Some(id) = id_at(service, *index) {
                service.apply(Intent::ToggleOne(id)).unwrap();
            }
        }
        Op::ToggleAll(completed) => {
            service.apply(Intent::ToggleAll(*completed)).unwrap();
        }
        Op::Edit(index, text) => {
            if let Some(id) = id_at(service, *index) {
                service.apply(Intent::BeginEdit(id)).unwrap();
                service
                    .apply(Intent::EditCommit {
                        id,
                        text: text.clone(),
                    })
                    .unwrap();
            }
        }
        Op::Destroy(index) => {
            if let Some(id) = id_at(service, *index) {
                service.apply(Intent::Destroy(id)).unwrap();
            }
        }
        Op::ClearCompleted => {
            service.apply(Intent::ClearCompleted).unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn adds_preserve_intent_order(texts in prop::collection::vec(arb_text(), 0..12)) {
        let repo = MemorySlotRepository::new();
        let mut service = TodoService::open(&repo, KEY);
        for text in &texts {
            service.apply(Intent::Add(text.clone())).unwrap();
        }

        let expected: Vec<String> = texts.iter().filter_map(|text| normalize_title(text)).collect();
        let actual: Vec<String> = service.items().iter().map(|item| item.title.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn counter_and_storage_follow_every_operation(ops in prop::collection::vec(arb_op(), 0..40)) {
        let repo = MemorySlotRepository::new();
        let mut service = TodoService::open(&repo, KEY);

        for op in &ops {
            apply_op(&mut service, op);

            let active = service.items().iter().filter(|item| !item.completed).count();
            let view = service.view();
            prop_assert_eq!(view.remaining_count, active);
            prop_assert_eq!(view.show_clear_completed, active < service.items().len());
            let persisted = service.persisted_items();
            prop_assert_eq!(persisted.as_slice(), service.items());
            for item in service.items() {
                prop_assert!(item.validate().is_ok());
            }
        }
    }

    #[test]
    fn removals_never_reorder_survivors(ops in prop::collection::vec(arb_op(), 0..40)) {
        let repo = MemorySlotRepository::new();
        let mut service = TodoService::open(&repo, KEY);

        for op in &ops {
            let before: Vec<_> = service.items().iter().map(|item| item.id).collect();
            apply_op(&mut service, op);
            let after: Vec<_> = service.items().iter().map(|item| item.id).collect();

            // Survivors of `before` appear in `after` in the same relative order.
            let survivors: Vec<_> = before.iter().filter(|id| after.contains(id)).copied().collect();
            let kept: Vec<_> = after.iter().filter(|id| before.contains(id)).copied().collect();
            prop_assert_eq!(survivors, kept);
        }
    }

    #[test]
    fn filters_partition_the_store(ops in prop::collection::vec(arb_op(), 0..30)) {
        let repo = MemorySlotRepository::new();
        let mut service = TodoService::open(&repo, KEY);
        for op in &ops {
            apply_op(&mut service, op);
        }

        let items = service.items();
        let all = visible_items(items, Filter::All);
        let active = visible_items(items, Filter::Active);
        let completed = visible_items(items, Filter::Completed);

        prop_assert_eq!(all.len(), items.len());
        prop_assert_eq!(active.len() + completed.len(), all.len());
        for item in &all {
            prop_assert!(active.contains(item) != completed.contains(item));
        }
    }

    #[test]
    fn snapshot_round_trips(entries in prop::collection::vec(("[a-z][ a-z]{0,8}[a-z]", any::<bool>()), 0..10)) {
        let items: Vec<Item> = entries
            .iter()
            .map(|(title, completed)| {
                let mut item = Item::new(title).unwrap();
                item.completed = *completed;
                item
            })
            .collect();

        prop_assert_eq!(decode_snapshot(&encode_snapshot(&items).unwrap()).unwrap(), items);
    }

    #[test]
    fn trim_law_holds_for_padded_text(core in "[a-z]([ a-z]{0,6}[a-z])?", left in " {0,4}", right in "[ \t]{0,4}") {
        let repo = MemorySlotRepository::new();
        let mut service = TodoService::open(&repo, KEY);
        service.apply(Intent::Add(format!("{left}{core}{right}"))).unwrap();
        prop_assert_eq!(service.items()[0].title.as_str(), core.as_str());
    }
}
