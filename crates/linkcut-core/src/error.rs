use thiserror::Error;

/// Errors related to the core functionality of the URL shortener.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("store is empty and no starting id is configured")]
    EmptyStore,
    #[error("id {id} does not follow the last stored id {last}")]
    NonMonotonicId { id: u64, last: u64 },
    #[error("no ids left after {0}")]
    IdSpaceExhausted(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("snapshot is unreadable: {0}")]
    Unreadable(String),
    #[error("snapshot is unwritable: {0}")]
    Unwritable(String),
}
