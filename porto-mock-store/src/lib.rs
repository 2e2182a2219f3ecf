use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

use async_trait::async_trait;
use porto_client::{
    api::{CommentId, CommentRecord, Error, NewComment},
    CommentStore, Snapshot, Subscription,
};

/// In-memory comment store for tests. Behaves like the real one: assigns
/// keys and timestamps server-side, pushes the full snapshot to every live
/// subscriber on each change, and treats deletion of absent keys as a no-op.
#[derive(Clone)]
pub struct MockStore(Rc<RefCell<Inner>>);

struct Inner {
    records: BTreeMap<CommentId, CommentRecord>,

    /// Server clock, in milliseconds; strictly increasing across writes
    clock: i64,
    next_key: usize,

    listeners: Vec<(usize, Box<dyn FnMut(Snapshot)>)>,
    next_listener: usize,
    // ids cancelled while their callback was detached for a broadcast
    dead_listeners: Vec<usize>,

    push_calls: usize,
    delete_calls: usize,
    fail_next_push: bool,
    fail_next_delete: bool,
}

impl MockStore {
    /// Fresh store whose first write gets timestamp 1000.
    pub fn new() -> MockStore {
        MockStore::with_clock(1000)
    }

    pub fn with_clock(start_ms: i64) -> MockStore {
        MockStore(Rc::new(RefCell::new(Inner {
            records: BTreeMap::new(),
            clock: start_ms,
            next_key: 1,
            listeners: Vec::new(),
            next_listener: 0,
            dead_listeners: Vec::new(),
            push_calls: 0,
            delete_calls: 0,
            fail_next_push: false,
            fail_next_delete: false,
        })))
    }

    /// Insert a record as if another client had written it, with an explicit
    /// server timestamp. Notifies subscribers like any other write.
    pub fn seed(&self, name: &str, body: &str, created_at: i64) -> CommentId {
        let id = {
            let mut inner = self.0.borrow_mut();
            let id = inner.assign_key();
            inner.records.insert(
                id.clone(),
                CommentRecord {
                    name: name.to_string(),
                    body: body.to_string(),
                    created_at,
                },
            );
            id
        };
        self.broadcast();
        id
    }

    /// Remove a record out-of-band, bypassing the call counters.
    pub fn evict(&self, id: &CommentId) {
        let removed = self.0.borrow_mut().records.remove(id).is_some();
        if removed {
            self.broadcast();
        }
    }

    pub fn num_records(&self) -> usize {
        self.0.borrow().records.len()
    }

    pub fn push_calls(&self) -> usize {
        self.0.borrow().push_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.0.borrow().delete_calls
    }

    pub fn fail_next_push(&self) {
        self.0.borrow_mut().fail_next_push = true;
    }

    pub fn fail_next_delete(&self) {
        self.0.borrow_mut().fail_next_delete = true;
    }

    fn broadcast(&self) {
        // Callbacks run with the borrow released so they may re-enter the
        // store, e.g. to cancel their own subscription
        let (snapshot, mut notifying) = {
            let mut inner = self.0.borrow_mut();
            (inner.snapshot(), std::mem::take(&mut inner.listeners))
        };
        for (_, on_snapshot) in notifying.iter_mut() {
            on_snapshot(snapshot.clone());
        }
        let mut inner = self.0.borrow_mut();
        notifying.retain(|(id, _)| !inner.dead_listeners.contains(id));
        // listeners registered from inside a callback landed in the fresh vec
        notifying.append(&mut inner.listeners);
        inner.listeners = notifying;
        inner.dead_listeners.clear();
    }
}

impl Default for MockStore {
    fn default() -> MockStore {
        MockStore::new()
    }
}

impl Inner {
    fn snapshot(&self) -> Snapshot {
        self.records
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn assign_key(&mut self) -> CommentId {
        let id = CommentId(format!("k{}", self.next_key));
        self.next_key += 1;
        id
    }

    fn tick(&mut self) -> i64 {
        let now = self.clock;
        self.clock += 1;
        now
    }
}

#[async_trait(?Send)]
impl CommentStore for MockStore {
    async fn push_comment(&self, new: NewComment) -> Result<CommentId, Error> {
        let id = {
            let mut inner = self.0.borrow_mut();
            inner.push_calls += 1;
            if inner.fail_next_push {
                inner.fail_next_push = false;
                return Err(Error::Sync(String::from("injected store failure")));
            }
            let id = inner.assign_key();
            let created_at = inner.tick();
            inner.records.insert(
                id.clone(),
                CommentRecord {
                    name: new.name,
                    body: new.body,
                    created_at,
                },
            );
            id
        };
        self.broadcast();
        Ok(id)
    }

    async fn delete_comment(&self, id: &CommentId) -> Result<(), Error> {
        let removed = {
            let mut inner = self.0.borrow_mut();
            inner.delete_calls += 1;
            if inner.fail_next_delete {
                inner.fail_next_delete = false;
                return Err(Error::Sync(String::from("injected store failure")));
            }
            inner.records.remove(id).is_some()
        };
        if removed {
            self.broadcast();
        }
        Ok(())
    }

    fn subscribe_comments(&self, mut on_snapshot: Box<dyn FnMut(Snapshot)>) -> Subscription {
        // subscribers get the current contents right away, with the borrow
        // released in case the callback re-enters the store
        let snapshot = self.0.borrow().snapshot();
        on_snapshot(snapshot);
        let id = {
            let mut inner = self.0.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, on_snapshot));
            id
        };
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.0);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                inner.listeners.retain(|(i, _)| *i != id);
                inner.dead_listeners.push(id);
            }
        })
    }
}
