use crate::api::{CommentId, Error};

/// How long the "comment added" flash stays up before auto-expiring.
pub const SUCCESS_FLASH_SECS: i64 = 3;

/// Submission state: `Idle -> Submitting -> (Success | Failed)`. While
/// `Submitting` the submit control is disabled, which is what prevents
/// duplicate concurrent writes. `Success` auto-expires; `Failed` sticks
/// around until the next attempt replaces it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success,
    Failed(Error),
}

impl SubmitState {
    pub fn begin(&mut self) {
        *self = SubmitState::Submitting;
    }

    pub fn finish(&mut self, res: Result<(), Error>) {
        *self = match res {
            Ok(()) => SubmitState::Success,
            Err(e) => SubmitState::Failed(e),
        };
    }

    /// No-op unless the flash is still up, so a stale timer cannot clobber
    /// the state of a newer submission.
    pub fn expire_success(&mut self) {
        if *self == SubmitState::Success {
            *self = SubmitState::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmitState::Submitting
    }
}

/// Two-phase deletion: a delete request only marks a candidate; the store
/// call happens on explicit confirmation. One candidate at a time, last
/// request wins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeleteFlow {
    pending: Option<CommentId>,
}

impl DeleteFlow {
    pub fn request(&mut self, id: CommentId) {
        self.pending = Some(id);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Yields the candidate exactly once, whatever the later outcome of the
    /// store call: the view only drops the row when a snapshot without it
    /// arrives.
    pub fn confirm(&mut self) -> Option<CommentId> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&CommentId> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_happy_path() {
        let mut s = SubmitState::Idle;
        s.begin();
        assert!(s.is_submitting());
        s.finish(Ok(()));
        assert_eq!(s, SubmitState::Success);
        s.expire_success();
        assert_eq!(s, SubmitState::Idle);
    }

    #[test]
    fn failure_persists_until_next_attempt() {
        let mut s = SubmitState::Idle;
        s.begin();
        s.finish(Err(Error::Sync(String::from("boom"))));
        assert_eq!(s, SubmitState::Failed(Error::Sync(String::from("boom"))));
        // an expiry timer from an earlier success must not clear the error
        s.expire_success();
        assert_eq!(s, SubmitState::Failed(Error::Sync(String::from("boom"))));
        s.begin();
        assert!(s.is_submitting());
    }

    #[test]
    fn stale_expiry_does_not_clear_a_new_submission() {
        let mut s = SubmitState::Success;
        s.begin();
        s.expire_success();
        assert!(s.is_submitting());
    }

    #[test]
    fn delete_flow_last_request_wins() {
        let mut f = DeleteFlow::default();
        f.request(CommentId(String::from("a")));
        f.request(CommentId(String::from("b")));
        assert_eq!(f.pending(), Some(&CommentId(String::from("b"))));
        assert_eq!(f.confirm(), Some(CommentId(String::from("b"))));
        assert_eq!(f.pending(), None);
    }

    #[test]
    fn delete_flow_cancel_discards_candidate() {
        let mut f = DeleteFlow::default();
        f.request(CommentId(String::from("a")));
        f.cancel();
        assert_eq!(f.confirm(), None);
    }

    #[test]
    fn delete_flow_confirm_yields_once() {
        let mut f = DeleteFlow::default();
        f.request(CommentId(String::from("a")));
        assert_eq!(f.confirm(), Some(CommentId(String::from("a"))));
        assert_eq!(f.confirm(), None);
    }
}
