use thiserror::Error;

/// Failures surfaced by feed operations. Persistence failures never appear
/// here; the stores swallow those.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// Title, description, or comment text was blank after trimming.
    #[error("missing info: a title and description are required")]
    MissingInfo,

    /// The session role does not permit the operation.
    #[error("not authorized")]
    NotAuthorized,

    /// No post with the given id.
    #[error("unknown post: {0}")]
    UnknownPost(String),

    /// The feed task could not run to completion.
    #[error("feed task failed: {0}")]
    Internal(String),
}
