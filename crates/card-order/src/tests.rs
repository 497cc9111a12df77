//! Card Set Scenario Tests
//!
//! Drives `OrderedCardSet` through whole drag gestures against an
//! in-memory store, including reloads.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    CardItem, CardSetConfig, JsonOrderStore, KeyValueStore, MemoryStore, OrderedCardSet,
    PersistenceAdapter,
};

const KEY: &str = "folio.projects.order";

fn cards(ids: &[&str]) -> Vec<CardItem> {
    ids.iter()
        .map(|id| CardItem::new(*id, format!("Project {}", id), format!("About project {}", id)))
        .collect()
}

fn persisted(ids: &[&str], store: &MemoryStore) -> OrderedCardSet<JsonOrderStore<MemoryStore>> {
    OrderedCardSet::new(
        cards(ids),
        CardSetConfig::new().persist_to(KEY),
        JsonOrderStore::new(store.clone()),
    )
}

#[test]
fn test_drag_hover_drop_persists_and_raises_notice() {
    let store = MemoryStore::new();
    let mut set = persisted(&["1", "2", "3"], &store);

    set.begin_drag(0);
    set.hover_slot(2);
    assert!(set.commit_drop(2));

    assert_eq!(set.ids(), vec!["2", "3", "1"]);
    assert!(set.pending_notice());
    assert_eq!(store.raw(KEY).as_deref(), Some(r#"["2","3","1"]"#));
    assert_eq!(
        JsonOrderStore::new(store.clone()).load(KEY),
        Some(vec!["2".to_string(), "3".to_string(), "1".to_string()])
    );
}

#[test]
fn test_reload_restores_saved_order() {
    let store = MemoryStore::new();
    {
        let mut set = persisted(&["1", "2", "3", "4"], &store);
        set.begin_drag(3);
        set.commit_drop(0);
    }

    let reloaded = persisted(&["1", "2", "3", "4"], &store);
    assert_eq!(reloaded.ids(), vec!["4", "1", "2", "3"]);
    assert!(!reloaded.pending_notice());
}

#[test]
fn test_reload_reconciles_stale_order() {
    let store = MemoryStore::new();
    store.set(KEY, r#"["C","A","Z"]"#).unwrap();

    let set = persisted(&["A", "B", "C", "D", "E"], &store);

    assert_eq!(set.ids(), vec!["C", "A", "B", "D", "E"]);
}

#[test]
fn test_reset_restores_canonical_and_clears_storage() {
    let store = MemoryStore::new();
    let mut set = persisted(&["1", "2", "3"], &store);
    set.begin_drag(0);
    set.commit_drop(2);
    set.begin_drag(0);
    set.commit_drop(1);
    assert!(store.raw(KEY).is_some());

    set.reset_to_default();

    assert_eq!(set.ids(), vec!["1", "2", "3"]);
    assert!(!set.pending_notice());
    assert_eq!(store.raw(KEY), None);
    assert_eq!(JsonOrderStore::new(store.clone()).load(KEY), None);

    let reloaded = persisted(&["1", "2", "3"], &store);
    assert_eq!(reloaded.ids(), vec!["1", "2", "3"]);
}

#[test]
fn test_dismiss_keeps_order() {
    let store = MemoryStore::new();
    let mut set = persisted(&["1", "2", "3"], &store);
    set.begin_drag(2);
    set.commit_drop(0);

    set.dismiss_notice();

    assert!(!set.pending_notice());
    assert_eq!(set.ids(), vec!["3", "1", "2"]);
    assert_eq!(store.raw(KEY).as_deref(), Some(r#"["3","1","2"]"#));
}

#[test]
fn test_failed_save_keeps_in_memory_order() {
    let store = MemoryStore::new();
    store.set_fail_writes(true);
    let mut set = persisted(&["1", "2", "3"], &store);

    set.begin_drag(0);
    assert!(set.commit_drop(1));

    assert_eq!(set.ids(), vec!["2", "1", "3"]);
    assert!(store.is_empty());

    set.reset_to_default();
    assert_eq!(set.ids(), vec!["1", "2", "3"]);
}

#[test]
fn test_failed_load_falls_back_to_canonical() {
    let store = MemoryStore::new();
    store.set(KEY, r#"["3","2","1"]"#).unwrap();
    store.set_fail_reads(true);

    let set = persisted(&["1", "2", "3"], &store);

    assert_eq!(set.ids(), vec!["1", "2", "3"]);
}

#[test]
fn test_corrupt_value_falls_back_to_canonical() {
    let store = MemoryStore::new();
    store.set(KEY, "{broken").unwrap();

    let set = persisted(&["1", "2", "3"], &store);

    assert_eq!(set.ids(), vec!["1", "2", "3"]);
}

#[test]
fn test_disabled_persistence_never_touches_store() {
    let store = MemoryStore::new();
    store.set(KEY, r#"["3","2","1"]"#).unwrap();
    let mut set = OrderedCardSet::new(
        cards(&["1", "2", "3"]),
        CardSetConfig::from_flags(false, Some(KEY.to_string())).unwrap(),
        JsonOrderStore::new(store.clone()),
    );
    assert_eq!(set.ids(), vec!["1", "2", "3"]);

    set.begin_drag(0);
    set.commit_drop(2);
    assert!(!set.pending_notice());
    set.reset_to_default();

    assert_eq!(store.raw(KEY).as_deref(), Some(r#"["3","2","1"]"#));
}

#[test]
fn test_listener_sees_every_committed_order() {
    let store = MemoryStore::new();
    let seen = Rc::new(RefCell::new(Vec::<Vec<String>>::new()));
    let sink = seen.clone();
    let mut set = OrderedCardSet::new(
        cards(&["1", "2", "3"]),
        CardSetConfig::new()
            .persist_to(KEY)
            .on_order_change(move |order| sink.borrow_mut().push(order.to_vec())),
        JsonOrderStore::new(store.clone()),
    );

    set.begin_drag(0);
    set.commit_drop(2);
    set.begin_drag(1);
    set.commit_drop(1);
    set.begin_drag(1);
    set.cancel_drag();
    set.begin_drag(2);
    set.commit_drop(0);

    assert_eq!(
        *seen.borrow(),
        vec![
            vec!["2".to_string(), "3".to_string(), "1".to_string()],
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
        ]
    );
}

#[test]
fn test_sets_with_different_keys_are_isolated() {
    let store = MemoryStore::new();
    let mut projects = OrderedCardSet::new(
        cards(&["a", "b", "c"]),
        CardSetConfig::new().persist_to("projects"),
        JsonOrderStore::new(store.clone()),
    );
    let mut skills = OrderedCardSet::new(
        cards(&["x", "y", "z"]),
        CardSetConfig::new().persist_to("skills"),
        JsonOrderStore::new(store.clone()),
    );

    projects.begin_drag(0);
    skills.begin_drag(2);
    skills.hover_slot(0);
    projects.commit_drop(1);
    assert_eq!(skills.dragged_index(), Some(2));
    skills.commit_drop(0);
    skills.reset_to_default();

    assert_eq!(projects.ids(), vec!["b", "a", "c"]);
    assert_eq!(skills.ids(), vec!["x", "y", "z"]);
    assert_eq!(store.raw("projects").as_deref(), Some(r#"["b","a","c"]"#));
    assert_eq!(store.raw("skills"), None);
    assert!(projects.pending_notice());
    assert!(!skills.pending_notice());
}

#[test]
fn test_drop_past_end_on_persisted_board_appends_and_saves() {
    let store = MemoryStore::new();
    let mut set = persisted(&["1", "2", "3"], &store);

    set.begin_drag(0);
    set.hover_slot(3);
    assert_eq!(set.drag_over_index(), None);
    assert!(set.commit_drop(3));

    assert_eq!(set.ids(), vec!["2", "3", "1"]);
    assert!(set.pending_notice());
    assert_eq!(store.raw(KEY).as_deref(), Some(r#"["2","3","1"]"#));
}
