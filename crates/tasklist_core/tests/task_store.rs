use proptest::prelude::*;
use std::cell::Cell;
use tasklist_core::store::task_store::{load, save};
use tasklist_core::{
    IdGenerator, KvError, KvResult, KvStore, MemoryKvStore, SqliteKvStore, StoreError, Task,
    TaskId, TaskStore, TODOS_KEY,
};

fn fixed_ids(now: i64) -> IdGenerator {
    IdGenerator::new(Box::new(move || now))
}

#[test]
fn load_missing_slot_yields_empty() {
    let kv = MemoryKvStore::new();
    assert!(load(&kv).unwrap().is_empty());

    let store = TaskStore::open(&kv).unwrap();
    assert!(store.is_empty());
    assert_eq!(kv.raw(TODOS_KEY), None, "opening must not write the slot");
}

#[test]
fn load_malformed_slot_yields_empty() {
    for raw in ["not json", "{\"id\": 1}", "[{\"id\": \"x\"}]", ""] {
        let kv = MemoryKvStore::with_value(TODOS_KEY, raw);
        assert!(load(&kv).unwrap().is_empty(), "input {raw:?}");
    }
}

#[test]
fn load_reads_existing_slot_in_order() {
    let kv = MemoryKvStore::with_value(
        TODOS_KEY,
        r#"[{"id":3,"text":"c","isEditing":false},{"id":1,"text":"a","isEditing":true}]"#,
    );
    let tasks = load(&kv).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, TaskId::new(3));
    assert_eq!(tasks[1].id, TaskId::new(1));
    assert!(tasks[1].is_editing);
}

#[test]
fn add_blank_text_leaves_sequence_unchanged() {
    let kv = MemoryKvStore::new();
    let mut store = TaskStore::open(&kv).unwrap();

    assert_eq!(store.add("  ").unwrap(), None);
    assert_eq!(store.add("").unwrap(), None);
    assert!(store.is_empty());
    assert_eq!(kv.raw(TODOS_KEY), None);
}

#[test]
fn add_two_tasks_keeps_order_and_distinct_ids() {
    let kv = MemoryKvStore::new();
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(1_000)).unwrap();

    let first = store.add("Buy milk").unwrap().unwrap();
    let second = store.add("Walk dog").unwrap().unwrap();

    assert_ne!(first, second);
    let texts: Vec<&str> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["Buy milk", "Walk dog"]);
    assert_eq!(load(&kv).unwrap(), store.tasks());
}

#[test]
fn add_stores_trimmed_text_with_clock_id() {
    let kv = MemoryKvStore::new();
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(1_700_000_000_000)).unwrap();

    let id = store.add("  Call mom  ").unwrap().unwrap();
    assert_eq!(id, TaskId::new(1_700_000_000_000));
    assert_eq!(
        kv.raw(TODOS_KEY).as_deref(),
        Some(r#"[{"id":1700000000000,"text":"Call mom","isEditing":false}]"#)
    );
}

#[test]
fn ids_never_collide_with_loaded_tasks() {
    let kv = MemoryKvStore::with_value(
        TODOS_KEY,
        r#"[{"id":5000,"text":"old","isEditing":false}]"#,
    );
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(10)).unwrap();

    let id = store.add("new").unwrap().unwrap();
    assert_eq!(id, TaskId::new(5001));
}

#[test]
fn add_refuses_when_largest_id_is_taken() {
    let kv = MemoryKvStore::with_value(
        TODOS_KEY,
        r#"[{"id":9223372036854775807,"text":"last","isEditing":false}]"#,
    );
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(10)).unwrap();
    let slot_before = kv.raw(TODOS_KEY);

    let err = store.add("next").unwrap_err();
    assert!(matches!(err, StoreError::IdsExhausted));
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].id, TaskId::new(i64::MAX));
    assert_eq!(kv.raw(TODOS_KEY), slot_before);
}

#[test]
fn remove_missing_id_is_noop() {
    let kv = MemoryKvStore::new();
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(1)).unwrap();
    store.add("keep").unwrap();
    let before = store.tasks().to_vec();
    let slot_before = kv.raw(TODOS_KEY);

    assert!(!store.remove(TaskId::new(999)).unwrap());
    assert_eq!(store.tasks(), before.as_slice());
    assert_eq!(kv.raw(TODOS_KEY), slot_before);
}

#[test]
fn remove_existing_id_persists() {
    let kv = MemoryKvStore::new();
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(1)).unwrap();
    let a = store.add("a").unwrap().unwrap();
    let b = store.add("b").unwrap().unwrap();

    assert!(store.remove(a).unwrap());
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, b);
    assert_eq!(load(&kv).unwrap(), store.tasks());
}

#[test]
fn update_changes_only_text() {
    let kv = MemoryKvStore::new();
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(1)).unwrap();
    let a = store.add("a").unwrap().unwrap();
    let b = store.add("b").unwrap().unwrap();
    let c = store.add("c").unwrap().unwrap();

    assert!(store.update(b, "  bee ").unwrap());
    let ids: Vec<TaskId> = store.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, [a, b, c]);
    assert_eq!(store.find_by_id(b).unwrap().text, "bee");
    assert_eq!(store.find_by_id(a).unwrap().text, "a");
    assert_eq!(load(&kv).unwrap(), store.tasks());

    assert!(!store.update(TaskId::new(404), "x").unwrap());
}

#[test]
fn saving_same_sequence_twice_is_idempotent() {
    let kv = MemoryKvStore::new();
    let tasks = vec![
        Task::new(TaskId::new(1), "one"),
        Task::new(TaskId::new(2), "two"),
    ];

    save(&kv, &tasks).unwrap();
    let first = kv.raw(TODOS_KEY);
    save(&kv, &tasks).unwrap();

    assert_eq!(kv.raw(TODOS_KEY), first);
    assert_eq!(load(&kv).unwrap(), tasks);
}

#[test]
fn reload_picks_up_external_writes() {
    let kv = MemoryKvStore::new();
    let mut store = TaskStore::open(&kv).unwrap();
    save(&kv, &[Task::new(TaskId::new(8), "from elsewhere")]).unwrap();

    store.reload().unwrap();
    assert_eq!(store.tasks()[0].text, "from elsewhere");
}

#[test]
fn sqlite_backend_round_trips_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.sqlite3");

    let added = {
        let kv = SqliteKvStore::open(&path).unwrap();
        let mut store = TaskStore::open(&kv).unwrap();
        store.add("Buy milk").unwrap().unwrap()
    };

    let kv = SqliteKvStore::open(&path).unwrap();
    let store = TaskStore::open(&kv).unwrap();
    assert_eq!(store.find_by_id(added).unwrap().text, "Buy milk");
}

/// Fails every write after the first `allowed` ones.
struct FlakyKv {
    inner: MemoryKvStore,
    allowed: Cell<u32>,
}

impl KvStore for FlakyKv {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> KvResult<()> {
        if self.allowed.get() == 0 {
            return Err(KvError::Backend("disk full".to_string()));
        }
        self.allowed.set(self.allowed.get() - 1);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> KvResult<()> {
        self.inner.remove(key)
    }
}

#[test]
fn failed_save_leaves_memory_in_sync_with_slot() {
    let kv = FlakyKv {
        inner: MemoryKvStore::new(),
        allowed: Cell::new(1),
    };
    let mut store = TaskStore::open_with_ids(&kv, fixed_ids(1)).unwrap();
    let id = store.add("saved").unwrap().unwrap();

    let err = store.add("lost").unwrap_err();
    assert!(matches!(err, StoreError::Kv(KvError::Backend(_))));
    assert!(store.update(id, "changed").is_err());
    assert!(store.remove(id).is_err());

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text, "saved");
    assert_eq!(load(&kv).unwrap(), store.tasks());
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(usize),
    Update(usize, String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-z]{0,8}".prop_map(Op::Add),
        (0usize..12).prop_map(Op::Remove),
        ((0usize..12), "[ a-z]{0,8}").prop_map(|(index, text)| Op::Update(index, text)),
    ]
}

proptest! {
    #[test]
    fn memory_matches_slot_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let kv = MemoryKvStore::new();
        let mut store = TaskStore::open_with_ids(&kv, fixed_ids(1_000)).unwrap();

        for op in ops {
            // Indices past the end target ids that do not exist.
            let pick = |store: &TaskStore<'_>, index: usize| {
                store
                    .tasks()
                    .get(index)
                    .map_or(TaskId::new(-1), |task| task.id)
            };
            match op {
                Op::Add(text) => {
                    let before = store.len();
                    let added = store.add(&text).unwrap();
                    prop_assert_eq!(added.is_some(), !text.trim().is_empty());
                    prop_assert_eq!(store.len(), before + usize::from(added.is_some()));
                }
                Op::Remove(index) => {
                    let id = pick(&store, index);
                    store.remove(id).unwrap();
                }
                Op::Update(index, text) => {
                    let id = pick(&store, index);
                    store.update(id, &text).unwrap();
                }
            }

            let reloaded = TaskStore::open(&kv).unwrap();
            prop_assert_eq!(reloaded.tasks(), store.tasks());
        }

        let mut ids: Vec<TaskId> = store.tasks().iter().map(|task| task.id).collect();
        let count = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
    }
}
