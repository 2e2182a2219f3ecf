use chrono::Utc;

mod comment;
pub use comment::{Comment, CommentId, CommentRecord, NewComment};

mod contact;
pub use contact::ContactMessage;

mod error;
pub use error::Error;

pub type Time = chrono::DateTime<Utc>;
