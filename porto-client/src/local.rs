use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::{
    api::{Comment, CommentId, Error, NewComment},
    Board, CommentRepository, Subscription,
};

/// Persistence hook for the local-only variant.
pub trait SnapshotCache {
    fn load(&self) -> Vec<Comment>;
    fn save(&self, comments: &[Arc<Comment>]);
}

/// Browser-local variant of the repository: same capability as the
/// store-synchronized one, but ids and timestamps are fabricated locally and
/// the list is persisted through a cache instead of a remote store. The two
/// variants are alternatives, not layers.
pub struct LocalOnlyRepository<C> {
    inner: Rc<RefCell<Inner<C>>>,
}

struct Inner<C> {
    // kept sorted newest-first at all times
    comments: Vec<Arc<Comment>>,
    cache: C,
    listeners: Vec<(usize, Box<dyn FnMut(Board)>)>,
    next_listener: usize,
    // ids cancelled while their callback was detached for a notification
    dead_listeners: Vec<usize>,
}

impl<C: SnapshotCache + 'static> LocalOnlyRepository<C> {
    pub fn new(cache: C) -> LocalOnlyRepository<C> {
        let comments = Board::from_comments(cache.load().into_iter().map(Arc::new).collect());
        LocalOnlyRepository {
            inner: Rc::new(RefCell::new(Inner {
                comments: comments.comments,
                cache,
                listeners: Vec::new(),
                next_listener: 0,
                dead_listeners: Vec::new(),
            })),
        }
    }

    fn board(inner: &Inner<C>) -> Board {
        Board {
            comments: inner.comments.clone(),
        }
    }

    fn notify(&self) {
        // Callbacks run with the borrow released so they may re-enter the
        // repository, e.g. to cancel their own subscription
        let (board, mut notifying) = {
            let mut inner = self.inner.borrow_mut();
            (Self::board(&inner), std::mem::take(&mut inner.listeners))
        };
        for (_, on_change) in notifying.iter_mut() {
            on_change(board.clone());
        }
        let mut inner = self.inner.borrow_mut();
        notifying.retain(|(id, _)| !inner.dead_listeners.contains(id));
        // listeners registered from inside a callback landed in the fresh vec
        notifying.append(&mut inner.listeners);
        inner.listeners = notifying;
        inner.dead_listeners.clear();
    }

    /// Milliseconds-since-epoch as an id, bumped past any collision so ids
    /// stay unique even for two submissions within the same millisecond.
    fn fabricate_id(comments: &[Arc<Comment>], now_ms: i64) -> (CommentId, i64) {
        let mut ms = now_ms;
        loop {
            let id = CommentId(ms.to_string());
            if !comments.iter().any(|c| c.id == id) {
                return (id, ms);
            }
            ms += 1;
        }
    }
}

#[async_trait(?Send)]
impl<C: SnapshotCache + 'static> CommentRepository for LocalOnlyRepository<C> {
    async fn create(&self, name: &str, body: &str) -> Result<CommentId, Error> {
        let new = NewComment::new(name, body)?;
        let id = {
            let mut inner = self.inner.borrow_mut();
            let now_ms = Utc::now().timestamp_millis();
            let (id, ms) = Self::fabricate_id(&inner.comments, now_ms);
            let comment = Arc::new(Comment {
                id: id.clone(),
                name: new.name,
                body: new.body,
                created_at: Utc
                    .timestamp_millis_opt(ms)
                    .single()
                    .ok_or_else(|| Error::Sync(String::from("local clock out of range")))?,
            });
            inner.comments.insert(0, comment);
            let comments = inner.comments.clone();
            inner.cache.save(&comments);
            id
        };
        self.notify();
        Ok(id)
    }

    async fn delete(&self, id: &CommentId) -> Result<(), Error> {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.comments.len();
            inner.comments.retain(|c| c.id != *id);
            let changed = inner.comments.len() != before;
            if changed {
                let comments = inner.comments.clone();
                inner.cache.save(&comments);
            }
            changed
        };
        if changed {
            self.notify();
        }
        // deleting an absent id is a no-op, same as the remote store
        Ok(())
    }

    fn watch(&self, mut on_change: Box<dyn FnMut(Board)>) -> Subscription {
        // new listeners get the current state right away, with the borrow
        // released in case the callback re-enters the repository
        let board = Self::board(&self.inner.borrow());
        on_change(board);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, on_change));
            id
        };
        let weak: Weak<RefCell<Inner<C>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                inner.listeners.retain(|(i, _)| *i != id);
                inner.dead_listeners.push(id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct NullCache;

    impl SnapshotCache for NullCache {
        fn load(&self) -> Vec<Comment> {
            Vec::new()
        }
        fn save(&self, _comments: &[Arc<Comment>]) {}
    }

    fn watch_into(repo: &LocalOnlyRepository<NullCache>) -> (Subscription, Rc<RefCell<Vec<Board>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            repo.watch(Box::new(move |b| seen.borrow_mut().push(b)))
        };
        (sub, seen)
    }

    #[test]
    fn create_appears_immediately_and_newest_first() {
        let repo = LocalOnlyRepository::new(NullCache);
        let (_sub, seen) = watch_into(&repo);
        block_on(repo.create("Ana", "first")).unwrap();
        block_on(repo.create("Bob", "second")).unwrap();
        let last = seen.borrow().last().cloned().unwrap();
        assert_eq!(last.len(), 2);
        assert_eq!(last.comments[0].name, "Bob");
        assert_eq!(last.comments[1].name, "Ana");
    }

    #[test]
    fn validation_rejects_empty_fields() {
        let repo = LocalOnlyRepository::new(NullCache);
        assert_eq!(
            block_on(repo.create("", "body")),
            Err(Error::MissingField("name"))
        );
        assert!(repo.inner.borrow().comments.is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = LocalOnlyRepository::new(NullCache);
        let id = block_on(repo.create("Ana", "bye")).unwrap();
        block_on(repo.delete(&id)).unwrap();
        block_on(repo.delete(&id)).unwrap();
        assert!(repo.inner.borrow().comments.is_empty());
    }

    #[test]
    fn a_watcher_may_cancel_itself_mid_notification() {
        let repo = LocalOnlyRepository::new(NullCache);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(0usize));
        let sub = {
            let slot = slot.clone();
            let seen = seen.clone();
            repo.watch(Box::new(move |_| {
                *seen.borrow_mut() += 1;
                if let Some(mut sub) = slot.borrow_mut().take() {
                    sub.cancel();
                }
            }))
        };
        *slot.borrow_mut() = Some(sub);
        assert_eq!(*seen.borrow(), 1); // initial state

        // this notification cancels from inside its own callback
        block_on(repo.create("Ana", "one")).unwrap();
        assert_eq!(*seen.borrow(), 2);

        block_on(repo.create("Bob", "two")).unwrap();
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn unsubscribed_watchers_stop_seeing_updates() {
        let repo = LocalOnlyRepository::new(NullCache);
        let (mut sub, seen) = watch_into(&repo);
        assert_eq!(seen.borrow().len(), 1); // initial state
        sub.cancel();
        block_on(repo.create("Ana", "after cancel")).unwrap();
        assert_eq!(seen.borrow().len(), 1);
    }
}
