use anyhow::Context;
use chrono::TimeZone;

use crate::{Error, Time};

/// Key of a comment record, assigned by the store at creation time.
#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A comment as shown on the board. Immutable once created: the store only
/// knows creation and deletion, never in-place edits.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    pub name: String,

    /// Named "comment" in the store's record shape
    #[serde(rename = "comment")]
    pub body: String,

    /// Assigned by the store at write time, never fabricated client-side
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: Time,
}

/// Wire shape of a store record, before its key is attached. `created_at`
/// comes back as milliseconds from the store's own clock.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentRecord {
    pub name: String,

    #[serde(rename = "comment")]
    pub body: String,

    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl CommentRecord {
    /// Decode a loosely-typed store record into a `Comment`, failing closed
    /// so that malformed data never reaches the view.
    pub fn decode(self, id: CommentId) -> anyhow::Result<Comment> {
        if self.name.trim().is_empty() {
            anyhow::bail!("record {:?} has an empty name", id);
        }
        if self.body.trim().is_empty() {
            anyhow::bail!("record {:?} has an empty body", id);
        }
        let created_at = chrono::Utc
            .timestamp_millis_opt(self.created_at)
            .single()
            .with_context(|| {
                format!(
                    "record {:?} has out-of-range timestamp {}",
                    id, self.created_at
                )
            })?;
        Ok(Comment {
            id,
            name: self.name,
            body: self.body,
            created_at,
        })
    }
}

/// A validated comment submission. Constructing one is the only validation
/// point: both fields must be non-empty before anything touches the network.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct NewComment {
    pub name: String,

    #[serde(rename = "comment")]
    pub body: String,
}

impl NewComment {
    pub fn new(name: &str, body: &str) -> Result<NewComment, Error> {
        let name = name.trim();
        let body = body.trim();
        if name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        if body.is_empty() {
            return Err(Error::MissingField("comment"));
        }
        Ok(NewComment {
            name: name.to_string(),
            body: body.to_string(),
        })
    }
}
