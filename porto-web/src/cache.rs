use std::sync::Arc;

use gloo_storage::{LocalStorage, Storage};
use porto_client::{api::Comment, SnapshotCache};

const KEY_LOCAL_COMMENTS: &str = "portfolio-comments";

/// Browser-storage cache behind the local-only repository. The stored JSON
/// keeps the record field names the site always used, so an existing cache
/// keeps working.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageCache;

impl SnapshotCache for LocalStorageCache {
    fn load(&self) -> Vec<Comment> {
        LocalStorage::get(KEY_LOCAL_COMMENTS).unwrap_or_default()
    }

    fn save(&self, comments: &[Arc<Comment>]) {
        let plain = comments.iter().map(|c| &**c).collect::<Vec<_>>();
        if let Err(e) = LocalStorage::set(KEY_LOCAL_COMMENTS, &plain) {
            tracing::warn!("failed saving comments to local storage: {e}");
        }
    }
}
