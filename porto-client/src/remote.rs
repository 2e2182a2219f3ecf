use async_trait::async_trait;

use crate::{
    api::{CommentId, Error, NewComment},
    Board, CommentRepository, CommentStore, Subscription,
};

/// Store-synchronized repository. There is deliberately no local echo of a
/// just-created comment: the subscription snapshot is the single source of
/// truth for what the view shows, so a created comment only appears once the
/// store propagates it back.
pub struct RemoteSyncedRepository<S> {
    store: S,
}

impl<S: CommentStore> RemoteSyncedRepository<S> {
    pub fn new(store: S) -> RemoteSyncedRepository<S> {
        RemoteSyncedRepository { store }
    }
}

#[async_trait(?Send)]
impl<S: CommentStore> CommentRepository for RemoteSyncedRepository<S> {
    async fn create(&self, name: &str, body: &str) -> Result<CommentId, Error> {
        // Validation happens before the store call, so a missing field can
        // never be mistaken for a network failure
        let new = NewComment::new(name, body)?;
        self.store.push_comment(new).await
    }

    async fn delete(&self, id: &CommentId) -> Result<(), Error> {
        self.store.delete_comment(id).await
    }

    fn watch(&self, mut on_change: Box<dyn FnMut(Board)>) -> Subscription {
        self.store
            .subscribe_comments(Box::new(move |snapshot| {
                on_change(Board::from_snapshot(snapshot))
            }))
    }
}
