use async_trait::async_trait;

use crate::{
    api::{CommentId, Error},
    Board, Subscription,
};

/// One capability, two interchangeable backings: the view only ever talks to
/// this trait and does not know whether comments live in the remote store or
/// in browser storage.
#[async_trait(?Send)]
pub trait CommentRepository {
    /// Validate and persist a new comment. Validation errors surface before
    /// anything touches the backing store; store errors are retryable and
    /// leave no partial state behind.
    async fn create(&self, name: &str, body: &str) -> Result<CommentId, Error>;

    /// Remove a comment by key. Idempotent: deleting a key that is already
    /// gone succeeds.
    async fn delete(&self, id: &CommentId) -> Result<(), Error>;

    /// Watch the comment list. The callback receives the full, already-sorted
    /// board on every change until the handle is cancelled.
    fn watch(&self, on_change: Box<dyn FnMut(Board)>) -> Subscription;
}
