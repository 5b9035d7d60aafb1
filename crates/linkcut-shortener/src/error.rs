use linkcut_core::{CoreError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("alias already exists: {0}")]
    AliasConflict(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("store is empty and no starting id is configured")]
    EmptyStore,
    #[error("cannot assign an id: {0}")]
    IdAssignment(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidUrl(message) => Self::InvalidUrl(message),
            CoreError::InvalidShortCode(message) => Self::InvalidShortCode(message),
            CoreError::EmptyStore => Self::EmptyStore,
            other @ (CoreError::NonMonotonicId { .. } | CoreError::IdSpaceExhausted(_)) => {
                Self::IdAssignment(other.to_string())
            }
        }
    }
}
