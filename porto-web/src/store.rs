use std::collections::HashMap;

use async_trait::async_trait;
use futures::{channel::oneshot, pin_mut, select, FutureExt};
use porto_client::{
    api::{CommentId, CommentRecord, Error, NewComment},
    CommentStore, Snapshot, Subscription,
};
use wasm_bindgen_futures::spawn_local;

use crate::util::sleep_for;

// A fresh full snapshot is fetched every POLL_INTERVAL
const POLL_INTERVAL_SECS: i64 = 5;
// Space each retry after a failed fetch by ATTEMPT_SPACING
const ATTEMPT_SPACING_SECS: i64 = 1;

/// `CommentStore` over the realtime database's REST surface.
#[derive(Clone)]
pub struct RestStore {
    base: String,
}

impl RestStore {
    pub fn new(base: impl Into<String>) -> RestStore {
        RestStore { base: base.into() }
    }

    fn comments_url(&self) -> String {
        format!("{}/comments.json", self.base)
    }

    fn comment_url(&self, id: &CommentId) -> String {
        format!("{}/comments/{}.json", self.base, id.as_str())
    }
}

/// The store answers a push with `{"name": "<new key>"}`.
#[derive(serde::Deserialize)]
struct PushResponse {
    name: String,
}

async fn fetch_snapshot(url: &str) -> anyhow::Result<Snapshot> {
    // An empty list comes back as JSON null, hence the Option
    let raw: Option<HashMap<String, serde_json::Value>> = crate::CLIENT
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let raw = raw.unwrap_or_default();
    let mut snapshot = Snapshot::with_capacity(raw.len());
    for (key, value) in raw {
        match serde_json::from_value::<CommentRecord>(value) {
            Ok(record) => {
                snapshot.insert(CommentId(key), record);
            }
            Err(e) => tracing::warn!(%key, "dropping malformed record from store: {e}"),
        }
    }
    Ok(snapshot)
}

async fn poll_comments(
    url: String,
    mut on_snapshot: Box<dyn FnMut(Snapshot)>,
    mut cancel: oneshot::Sender<()>,
) {
    let mut cancellation = cancel.cancellation().fuse();
    loop {
        {
            let fetch = fetch_snapshot(&url).fuse();
            pin_mut!(fetch);
            let fetched = select! {
                _ = cancellation => {
                    tracing::info!("unsubscribed from comment feed");
                    return;
                }
                res = fetch => res,
            };
            match fetched {
                Ok(snapshot) => on_snapshot(snapshot),
                Err(e) => {
                    tracing::warn!("failed fetching comment snapshot: {e:#}");
                    let spacing = sleep_for(chrono::Duration::seconds(ATTEMPT_SPACING_SECS)).fuse();
                    pin_mut!(spacing);
                    select! {
                        _ = cancellation => return,
                        _ = spacing => continue,
                    }
                }
            }
        }
        let interval = sleep_for(chrono::Duration::seconds(POLL_INTERVAL_SECS)).fuse();
        pin_mut!(interval);
        select! {
            _ = cancellation => {
                tracing::info!("unsubscribed from comment feed");
                return;
            }
            _ = interval => (),
        }
    }
}

#[async_trait(?Send)]
impl CommentStore for RestStore {
    async fn push_comment(&self, new: NewComment) -> Result<CommentId, Error> {
        // the store replaces the ".sv" placeholder with its own clock
        let body = serde_json::json!({
            "name": new.name,
            "comment": new.body,
            "createdAt": { ".sv": "timestamp" },
        });
        let resp = crate::CLIENT
            .post(self.comments_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Sync(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(Error::Sync(format!("store answered {}", resp.status())));
        }
        let resp: PushResponse = resp.json().await.map_err(|e| Error::Sync(e.to_string()))?;
        Ok(CommentId(resp.name))
    }

    async fn delete_comment(&self, id: &CommentId) -> Result<(), Error> {
        // DELETE of an absent key still answers 2xx: deletion is idempotent
        let resp = crate::CLIENT
            .delete(self.comment_url(id))
            .send()
            .await
            .map_err(|e| Error::Sync(e.to_string()))?;
        match resp.status().is_success() {
            true => Ok(()),
            false => Err(Error::Sync(format!("store answered {}", resp.status()))),
        }
    }

    fn subscribe_comments(&self, on_snapshot: Box<dyn FnMut(Snapshot)>) -> Subscription {
        let (cancel_sender, canceller) = oneshot::channel();
        spawn_local(poll_comments(
            self.comments_url(),
            on_snapshot,
            cancel_sender,
        ));
        // dropping the receiver is what wakes the cancellation future inside
        // the polling task
        let mut canceller = Some(canceller);
        Subscription::new(move || {
            canceller.take();
        })
    }
}
