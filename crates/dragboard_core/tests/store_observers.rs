use dragboard_core::{
    Project, ProjectStatus, ProjectStore, SharedProjectStore, StoreAccessError,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use uuid::Uuid;

fn call_counter(store: &mut ProjectStore) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    store.add_listener(move |_| seen.set(seen.get() + 1));
    count
}

#[test]
fn add_project_appends_in_call_order() {
    let mut store = ProjectStore::new();
    store.add_project("first", "first item", 1);
    store.add_project("second", "second item", 2);
    store.add_project("third", "third item", 3);

    let titles: Vec<String> = store
        .snapshot()
        .into_iter()
        .map(|project| project.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
    assert!(store.snapshot().iter().all(Project::is_active));
}

#[test]
fn snapshot_is_an_independent_copy() {
    let mut store = ProjectStore::new();
    let id = store.add_project("stable", "stays active", 1);

    let mut snapshot = store.snapshot();
    snapshot[0].status = ProjectStatus::Finished;
    snapshot.clear();

    let fresh = store.snapshot();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].id, id);
    assert_eq!(fresh[0].status, ProjectStatus::Active);
}

#[test]
fn move_to_the_current_status_changes_nothing_and_stays_silent() {
    let mut store = ProjectStore::new();
    let id = store.add_project("task", "some task", 1);
    let count = call_counter(&mut store);
    let before = store.snapshot();

    store.move_project(id, ProjectStatus::Active);

    assert_eq!(store.snapshot(), before);
    assert_eq!(count.get(), 0);
}

#[test]
fn move_with_unknown_id_changes_nothing_and_stays_silent() {
    let mut store = ProjectStore::new();
    store.add_project("task", "some task", 1);
    let count = call_counter(&mut store);
    let before = store.snapshot();

    store.move_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert_eq!(store.snapshot(), before);
    assert_eq!(count.get(), 0);
}

#[test]
fn listeners_fire_in_registration_order_with_identical_snapshots() {
    let mut store = ProjectStore::new();
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let snapshots: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));

    let first_order = Rc::clone(&order);
    let first_snapshots = Rc::clone(&snapshots);
    store.add_listener(move |projects| {
        first_order.borrow_mut().push("first");
        first_snapshots.borrow_mut().push(projects);
    });
    let second_order = Rc::clone(&order);
    let second_snapshots = Rc::clone(&snapshots);
    store.add_listener(move |projects| {
        second_order.borrow_mut().push("second");
        second_snapshots.borrow_mut().push(projects);
    });

    store.add_project("shared", "seen by both", 2);

    assert_eq!(*order.borrow(), ["first", "second"]);
    let delivered = snapshots.borrow();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0], delivered[1]);
    assert_eq!(delivered[0][0].title, "shared");
}

#[test]
fn late_listener_sees_no_replay_of_existing_state() {
    let mut store = ProjectStore::new();
    store.add_project("early", "created before subscribing", 1);

    let count = call_counter(&mut store);
    assert_eq!(count.get(), 0);

    store.add_project("late", "first observed commit", 1);
    assert_eq!(count.get(), 1);
}

#[test]
fn add_then_move_notifies_once_per_mutation() {
    let mut store = ProjectStore::new();
    let count = call_counter(&mut store);

    let id = store.add_project("Build shed", "Wood shed", 3);
    let after_add = store.snapshot();
    assert_eq!(after_add.len(), 1);
    assert_eq!(after_add[0].status, ProjectStatus::Active);

    store.move_project(id, ProjectStatus::Finished);
    let after_move = store.snapshot();
    assert_eq!(after_move.len(), 1);
    assert_eq!(after_move[0].status, ProjectStatus::Finished);

    assert_eq!(count.get(), 2);
}

#[test]
fn moving_a_project_keeps_insertion_order() {
    let mut store = ProjectStore::new();
    let first = store.add_project("first", "first item", 1);
    store.add_project("second", "second item", 1);

    store.move_project(first, ProjectStatus::Finished);

    let titles: Vec<String> = store
        .snapshot()
        .into_iter()
        .map(|project| project.title)
        .collect();
    assert_eq!(titles, ["first", "second"]);
}

#[test]
fn reentrant_mutation_from_a_listener_fails_cleanly() {
    let store = SharedProjectStore::new();
    let inner_results: Rc<RefCell<Vec<StoreAccessError>>> = Rc::new(RefCell::new(Vec::new()));

    let reentrant = store.clone();
    let recorded = Rc::clone(&inner_results);
    store
        .subscribe(move |_| {
            if let Err(err) = reentrant.add_project("sneaky", "from a listener", 1) {
                recorded.borrow_mut().push(err);
            }
            if let Err(err) = reentrant.snapshot() {
                recorded.borrow_mut().push(err);
            }
        })
        .unwrap();

    store.add_project("outer", "legitimate commit", 1).unwrap();

    assert_eq!(
        *inner_results.borrow(),
        [
            StoreAccessError::ReentrantAccess,
            StoreAccessError::ReentrantAccess
        ]
    );
    // The blocked reentrant calls left exactly the one committed project.
    assert_eq!(store.snapshot().unwrap().len(), 1);
}
