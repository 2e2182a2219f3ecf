mod board;
pub use board::{Board, Snapshot};

mod flow;
pub use flow::{DeleteFlow, SubmitState, SUCCESS_FLASH_SECS};

mod local;
pub use local::{LocalOnlyRepository, SnapshotCache};

mod remote;
pub use remote::RemoteSyncedRepository;

mod repository;
pub use repository::CommentRepository;

mod store;
pub use store::{CommentStore, Subscription};

pub mod api {
    pub use porto_api::*;
}
