//! Contract tests for `TodoStore`, driven only through the public API.
//!
//! # Design
//! Each test builds its own store, so no state leaks between cases. The
//! concurrency tests hammer one store from plain threads and check that
//! no update is lost and no delete observes a half-finished write.

use std::sync::Arc;
use std::thread;

use todo_core::{StoreError, TodoItem, TodoStore};

#[test]
fn crud_lifecycle() {
    let store = TodoStore::new();

    // Step 1: create.
    let created = store
        .create(TodoItem::new(1, "First task").with_description("Just description"))
        .unwrap();
    assert_eq!(created.id, 1);

    // Step 2: get returns the same fields.
    let fetched = store.get(1).unwrap();
    assert_eq!(fetched, created);

    // Step 3: update changes name and description only.
    let updated = store
        .update(TodoItem::new(1, "New name").with_description("New description"))
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "New name");
    assert_eq!(updated.description.as_deref(), Some("New description"));
    assert_eq!(store.get(1).unwrap(), updated);

    // Step 4: delete returns the last-updated item.
    let deleted = store.delete(1).unwrap();
    assert_eq!(deleted, updated);

    // Step 5: the id is gone.
    let err = store.get(1).unwrap_err();
    assert_eq!(err.to_string(), "Item with ID: 1 is not found.");

    // Step 6: deleting again is NotFound, not a panic.
    assert_eq!(store.delete(1).unwrap_err(), StoreError::NotFound(1));
}

#[test]
fn get_unknown_id_mentions_that_id() {
    let store = TodoStore::new();
    store.create(TodoItem::new(1, "present")).unwrap();
    for id in [0, 2, -1, i32::MAX] {
        let err = store.get(id).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains(&id.to_string()), "{err}");
    }
}

#[test]
fn update_unknown_id_is_not_found() {
    let store = TodoStore::new();
    let err = store.update(TodoItem::new(9, "ghost")).unwrap_err();
    assert_eq!(err, StoreError::NotFound(9));
}

#[test]
fn update_can_clear_description() {
    let store = TodoStore::new();
    store
        .create(TodoItem::new(4, "task").with_description("details"))
        .unwrap();
    let updated = store.update(TodoItem::new(4, "task")).unwrap();
    assert_eq!(updated.description, None);
}

#[test]
fn stores_are_isolated() {
    let first = TodoStore::new();
    let second = TodoStore::new();
    first.create(TodoItem::new(1, "only in first")).unwrap();
    assert!(second.get(1).unwrap_err().is_not_found());
}

#[test]
fn concurrent_creates_are_all_kept() {
    let store = Arc::new(TodoStore::new());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for n in 0..50 {
                    let id = worker * 1000 + n;
                    store.create(TodoItem::new(id, format!("task {id}"))).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for worker in 0..8 {
        for n in 0..50 {
            let id = worker * 1000 + n;
            assert_eq!(store.get(id).unwrap().name, format!("task {id}"));
        }
    }
}

#[test]
fn concurrent_deletes_remove_each_item_exactly_once() {
    let store = Arc::new(TodoStore::new());
    for id in 0..100 {
        store.create(TodoItem::new(id, "shared")).unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || (0..100).filter(|id| store.delete(*id).is_ok()).count())
        })
        .collect();
    let removed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(removed, 100);
    for id in 0..100 {
        assert!(store.get(id).unwrap_err().is_not_found());
    }
}

#[test]
fn concurrent_updates_leave_a_complete_write() {
    let store = Arc::new(TodoStore::new());
    store.create(TodoItem::new(1, "start")).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for n in 0..100 {
                    let tag = format!("{worker}-{n}");
                    store
                        .update(TodoItem::new(1, tag.clone()).with_description(tag))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // name and description always come from the same write
    let item = store.get(1).unwrap();
    assert_eq!(item.id, 1);
    assert_eq!(item.description.as_deref(), Some(item.name.as_str()));
}
