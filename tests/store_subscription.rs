use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tuido::store::Store;
use tuido::todo::{TodoAction, TodoReducer, VisibilityFilter};

fn add(id: u64, text: &str) -> TodoAction {
    TodoAction::Add {
        id,
        text: text.to_string(),
    }
}

#[test]
fn dispatch_replaces_state() {
    let store = Store::<TodoReducer>::new();
    store.dispatch(add(0, "a"));
    let state = store.state();
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos[0].text, "a");
}

#[test]
fn snapshots_are_stable_across_dispatches() {
    let store = Store::<TodoReducer>::new();
    store.dispatch(add(0, "a"));
    let snapshot = store.state();
    store.dispatch(add(1, "b"));
    assert_eq!(snapshot.todos.len(), 1);
    assert_eq!(store.state().todos.len(), 2);
}

#[test]
fn each_listener_runs_exactly_once_per_dispatch() {
    let store = Store::<TodoReducer>::new();
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = Arc::clone(&count);
    let _sub = store.subscribe(move || {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    store.dispatch(add(0, "a"));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    store.dispatch(TodoAction::Toggle { id: 0 });
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn listeners_are_notified_in_subscription_order() {
    let store = Store::<TodoReducer>::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let log_a = Arc::clone(&log);
    let _first = store.subscribe(move || log_a.lock().push("first"));
    let log_b = Arc::clone(&log);
    let _second = store.subscribe(move || log_b.lock().push("second"));
    let log_c = Arc::clone(&log);
    let _third = store.subscribe(move || log_c.lock().push("third"));

    store.dispatch(add(0, "a"));
    assert_eq!(*log.lock(), vec!["first", "second", "third"]);
}

#[test]
fn dropping_a_subscription_silences_only_that_listener() {
    let store = Store::<TodoReducer>::new();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let first_clone = Arc::clone(&first);
    let sub_first = store.subscribe(move || {
        first_clone.fetch_add(1, Ordering::SeqCst);
    });
    let second_clone = Arc::clone(&second);
    let _sub_second = store.subscribe(move || {
        second_clone.fetch_add(1, Ordering::SeqCst);
    });

    store.dispatch(add(0, "a"));
    drop(sub_first);
    store.dispatch(add(1, "b"));

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[test]
fn explicit_unsubscribe_stops_notifications() {
    let store = Store::<TodoReducer>::new();
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = Arc::clone(&count);
    let sub = store.subscribe(move || {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    sub.unsubscribe();
    store.dispatch(add(0, "a"));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn subscription_outliving_the_store_is_harmless() {
    let store = Store::<TodoReducer>::new();
    let sub = store.subscribe(|| {});
    drop(store);
    // Drop after the store is gone; must not panic.
    drop(sub);
}

#[test]
fn initial_state_can_be_seeded() {
    let store = Store::<TodoReducer>::with_state(tuido::todo::TodoState {
        todos: Vec::new(),
        filter: VisibilityFilter::Active,
    });
    assert_eq!(store.state().filter, VisibilityFilter::Active);
}

#[test]
#[should_panic(expected = "within a change notification")]
fn dispatch_from_a_listener_is_rejected() {
    let store = Store::<TodoReducer>::new();
    let handle = store.clone();
    let _sub = store.subscribe(move || {
        handle.dispatch(TodoAction::Toggle { id: 0 });
    });
    store.dispatch(add(0, "a"));
}
