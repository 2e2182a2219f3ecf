use std::{collections::HashMap, sync::Arc};

use crate::api::{Comment, CommentId, CommentRecord};

/// Full contents of the store's comment list, as delivered to subscribers.
/// The store never sends diffs, only the whole thing.
pub type Snapshot = HashMap<CommentId, CommentRecord>;

/// The locally observable view of the comment list: always sorted
/// newest-first, always replaced wholesale. The store owns the authoritative
/// list; this is read-only derived state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub comments: Vec<Arc<Comment>>,
}

impl Board {
    /// The view before the first snapshot arrives.
    pub fn stub() -> Board {
        Board {
            comments: Vec::new(),
        }
    }

    /// Rebuild the whole board from a store snapshot. Malformed records are
    /// dropped with a warning rather than propagated untyped.
    pub fn from_snapshot(snapshot: Snapshot) -> Board {
        let comments = snapshot
            .into_iter()
            .filter_map(|(id, r)| match r.decode(id) {
                Ok(c) => Some(Arc::new(c)),
                Err(e) => {
                    tracing::warn!("dropping malformed comment record: {e:#}");
                    None
                }
            })
            .collect();
        Board::from_comments(comments)
    }

    pub fn from_comments(mut comments: Vec<Arc<Comment>>) -> Board {
        // Newest first. Store keys are assigned in insertion order, which is
        // as good a tiebreak as any for identical timestamps.
        comments.sort_unstable_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Board { comments }
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn contains(&self, id: &CommentId) -> bool {
        self.comments.iter().any(|c| c.id == *id)
    }

    pub fn get(&self, id: &CommentId) -> Option<&Arc<Comment>> {
        self.comments.iter().find(|c| c.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, body: &str, created_at: i64) -> CommentRecord {
        CommentRecord {
            name: name.to_string(),
            body: body.to_string(),
            created_at,
        }
    }

    fn snapshot(records: Vec<(&str, CommentRecord)>) -> Snapshot {
        records
            .into_iter()
            .map(|(k, r)| (CommentId(k.to_string()), r))
            .collect()
    }

    #[test]
    fn sorts_newest_first() {
        let board = Board::from_snapshot(snapshot(vec![
            ("a", record("x", "first", 100)),
            ("b", record("y", "third", 300)),
            ("c", record("z", "second", 200)),
        ]));
        let times = board
            .comments
            .iter()
            .map(|c| c.created_at.timestamp_millis())
            .collect::<Vec<_>>();
        assert_eq!(times, vec![300, 200, 100]);
    }

    #[test]
    fn equal_timestamps_tiebreak_on_key_order() {
        let board = Board::from_snapshot(snapshot(vec![
            ("b", record("y", "second write", 100)),
            ("a", record("x", "first write", 100)),
        ]));
        let keys = board
            .comments
            .iter()
            .map(|c| c.id.as_str().to_string())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn malformed_records_are_dropped() {
        let board = Board::from_snapshot(snapshot(vec![
            ("a", record("Ana", "fine", 100)),
            ("b", record("", "no name", 200)),
            ("c", record("Bob", "", 300)),
        ]));
        assert_eq!(board.len(), 1);
        assert_eq!(board.comments[0].name, "Ana");
    }

    #[test]
    fn stub_is_empty() {
        assert!(Board::stub().is_empty());
    }
}
