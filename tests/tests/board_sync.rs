//! End-to-end behavior of the store-synchronized repository against the
//! in-memory mock store.

use futures::executor::block_on;
use porto_api::{CommentId, Error};
use porto_client::{CommentRepository, DeleteFlow, RemoteSyncedRepository};
use porto_mock_store::MockStore;
use tests::watch_into;

fn repo_on(store: &MockStore) -> RemoteSyncedRepository<MockStore> {
    RemoteSyncedRepository::new(store.clone())
}

#[test]
fn created_comment_appears_through_the_subscription() {
    let store = MockStore::new();
    store.seed("Bob", "earlier comment", 100);
    let repo = repo_on(&store);
    let (_sub, boards) = watch_into(&repo);
    assert_eq!(boards.last().len(), 1);

    let id = block_on(repo.create("Ana", "Nice site!")).unwrap();

    // the new comment is there, sorted ahead of the earlier one
    let board = boards.last();
    assert_eq!(board.len(), 2);
    assert_eq!(board.comments[0].id, id);
    assert_eq!(board.comments[0].name, "Ana");
    assert_eq!(board.comments[1].name, "Bob");
}

#[test]
fn submit_scenario_assigns_key_and_server_timestamp() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let (_sub, boards) = watch_into(&repo);

    let id = block_on(repo.create("Ana", "Nice site!")).unwrap();
    assert_eq!(id, CommentId(String::from("k1")));

    let board = boards.last();
    assert_eq!(board.len(), 1);
    let c = &board.comments[0];
    assert_eq!(c.name, "Ana");
    assert_eq!(c.body, "Nice site!");
    assert_eq!(c.created_at.timestamp_millis(), 1000);
}

#[test]
fn validation_failures_never_reach_the_store() {
    let store = MockStore::new();
    let repo = repo_on(&store);

    assert_eq!(
        block_on(repo.create("", "body")),
        Err(Error::MissingField("name"))
    );
    assert_eq!(
        block_on(repo.create("Ana", "   ")),
        Err(Error::MissingField("comment"))
    );
    assert_eq!(store.push_calls(), 0);
}

#[test]
fn snapshots_are_sorted_newest_first() {
    let store = MockStore::new();
    store.seed("a", "first", 100);
    store.seed("b", "third", 300);
    store.seed("c", "second", 200);
    let repo = repo_on(&store);
    let (_sub, boards) = watch_into(&repo);

    let times = boards
        .last()
        .comments
        .iter()
        .map(|c| c.created_at.timestamp_millis())
        .collect::<Vec<_>>();
    assert_eq!(times, vec![300, 200, 100]);
}

#[test]
fn delete_requires_confirmation_and_calls_the_store_once() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let id = block_on(repo.create("Ana", "delete me")).unwrap();

    let mut flow = DeleteFlow::default();
    flow.request(id.clone());
    // requesting alone must not touch the store
    assert_eq!(store.delete_calls(), 0);

    let confirmed = flow.confirm().unwrap();
    block_on(repo.delete(&confirmed)).unwrap();
    assert_eq!(store.delete_calls(), 1);
    assert_eq!(store.num_records(), 0);
}

#[test]
fn cancelled_delete_leaves_the_store_untouched() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let id = block_on(repo.create("Ana", "keep me")).unwrap();

    let mut flow = DeleteFlow::default();
    flow.request(id);
    flow.cancel();
    assert_eq!(flow.confirm(), None);
    assert_eq!(store.delete_calls(), 0);
    assert_eq!(store.num_records(), 1);
}

#[test]
fn deleting_an_already_deleted_key_is_not_an_error() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let id = block_on(repo.create("Ana", "going twice")).unwrap();

    block_on(repo.delete(&id)).unwrap();
    block_on(repo.delete(&id)).unwrap();
    assert_eq!(store.num_records(), 0);
}

#[test]
fn deletion_becomes_visible_through_the_snapshot_only() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let id = block_on(repo.create("Ana", "short-lived")).unwrap();
    let (_sub, boards) = watch_into(&repo);
    assert!(boards.last().contains(&id));

    block_on(repo.delete(&id)).unwrap();
    assert!(!boards.last().contains(&id));
}

#[test]
fn unsubscribing_stops_notifications() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let (mut sub, boards) = watch_into(&repo);
    let before = boards.len();

    sub.cancel();
    store.seed("Ana", "after unsubscribe", 500);
    assert_eq!(boards.len(), before);

    // cancelling again stays a no-op
    sub.cancel();
    store.seed("Ana", "still nothing", 600);
    assert_eq!(boards.len(), before);
}

#[test]
fn dropped_subscription_is_unregistered() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let (sub, boards) = watch_into(&repo);
    let before = boards.len();
    drop(sub);
    store.seed("Ana", "after drop", 500);
    assert_eq!(boards.len(), before);
}

#[test]
fn failed_create_is_retryable_with_no_partial_state() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    store.fail_next_push();

    let err = block_on(repo.create("Ana", "first try")).unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(store.num_records(), 0);

    block_on(repo.create("Ana", "first try")).unwrap();
    assert_eq!(store.num_records(), 1);
}

#[test]
fn failed_delete_leaves_the_comment_in_place() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let id = block_on(repo.create("Ana", "survivor")).unwrap();
    let (_sub, boards) = watch_into(&repo);

    store.fail_next_delete();
    let err = block_on(repo.delete(&id)).unwrap_err();
    assert!(err.is_retryable());
    assert!(boards.last().contains(&id));

    block_on(repo.delete(&id)).unwrap();
    assert!(!boards.last().contains(&id));
}

#[test]
fn records_removed_by_other_clients_disappear_from_the_view() {
    let store = MockStore::new();
    let repo = repo_on(&store);
    let id = block_on(repo.create("Ana", "seen everywhere")).unwrap();
    let (_sub, boards) = watch_into(&repo);

    store.evict(&id);
    assert!(boards.last().is_empty());
}
