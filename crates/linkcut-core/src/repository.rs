use crate::error::StorageError;
use crate::record::Store;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the persisted snapshot.
///
/// The redirector only ever needs this half, so it cannot write by accident.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Loads the full snapshot.
    ///
    /// Returns [`StorageError::Unreadable`] if the stored bytes cannot be
    /// parsed as a store.
    async fn load(&self) -> Result<Store>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Replaces the persisted snapshot with `store`.
    ///
    /// Either the whole snapshot is written or the previous one stays intact.
    async fn save(&self, store: &Store) -> Result<()>;
}
