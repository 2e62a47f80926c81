use thiserror::Error;

/// Failures from the underlying key-value capability.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("storage lock poisoned")]
    Poisoned,
}

impl From<rusqlite::Error> for KvError {
    fn from(e: rusqlite::Error) -> Self {
        KvError::Backend(e.to_string())
    }
}

/// Everything that can go wrong at the store boundary: either the collection
/// could not be (de)serialized, or the backend read/write failed. Both
/// collapse to log-and-default before reaching callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage operation failure: {0}")]
    Storage(#[from] KvError),
}
