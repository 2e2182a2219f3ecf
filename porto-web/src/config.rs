/// Which implementation backs the comment board. The two variants are
/// interchangeable behind `CommentRepository`; the board component never
/// knows which one it got.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommentBackend {
    /// Live realtime-database synchronization
    RemoteSynced,
    /// Browser-storage only, no network
    LocalOnly,
}

pub const COMMENT_BACKEND: CommentBackend = CommentBackend::RemoteSynced;

/// Realtime database root; comment records live under `/comments`.
pub const DATABASE_URL: &str = "https://portoiqbal-72517-default-rtdb.firebaseio.com";

/// Third-party relay the contact form posts to.
pub const CONTACT_RELAY_URL: &str = "https://formspree.io/f/mrbqvekz";
