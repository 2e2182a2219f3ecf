use async_trait::async_trait;

use crate::{
    api::{CommentId, Error, NewComment},
    Snapshot,
};

/// The remote store contract: an append-only keyed list with server-assigned
/// timestamps. Consumed only; the store itself lives elsewhere.
#[async_trait(?Send)]
pub trait CommentStore {
    /// Create a record. The store assigns both the key and the timestamp.
    /// `Ok` means the store accepted the write, not that subscribers have
    /// seen it yet: visibility always comes through the subscription.
    async fn push_comment(&self, new: NewComment) -> Result<CommentId, Error>;

    /// Remove by key. Removing an already-removed key is a no-op, not an
    /// error.
    async fn delete_comment(&self, id: &CommentId) -> Result<(), Error>;

    /// Register a continuous listener. Every notification carries the
    /// complete current snapshot. Does not block; may fire zero or more
    /// times until the returned handle is cancelled.
    fn subscribe_comments(&self, on_snapshot: Box<dyn FnMut(Snapshot)>) -> Subscription;
}

/// Handle to a live subscription. Cancelling stops further notifications and
/// frees the store-side listener; cancelling twice is fine, and dropping the
/// handle cancels too.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Subscription {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn cancel_runs_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let mut sub = {
            let count = count.clone();
            Subscription::new(move || count.set(count.get() + 1))
        };
        sub.cancel();
        sub.cancel();
        drop(sub);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_cancels() {
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            let _sub = Subscription::new(move || count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }
}
