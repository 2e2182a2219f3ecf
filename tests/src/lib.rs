//! Shared plumbing for the integration tests: a watcher that records every
//! board the repository hands out.

use std::{cell::RefCell, rc::Rc};

use porto_client::{Board, CommentRepository, Subscription};

pub struct RecordedBoards(Rc<RefCell<Vec<Board>>>);

impl RecordedBoards {
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn last(&self) -> Board {
        self.0
            .borrow()
            .last()
            .cloned()
            .expect("no board recorded yet")
    }
}

/// Watch `repo`, collecting every notification. Keep the subscription alive
/// for as long as the notifications matter.
pub fn watch_into(repo: &dyn CommentRepository) -> (Subscription, RecordedBoards) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sub = {
        let seen = seen.clone();
        repo.watch(Box::new(move |b| seen.borrow_mut().push(b)))
    };
    (sub, RecordedBoards(seen))
}
