use async_trait::async_trait;
use linkcut_core::repository::Result;
use linkcut_core::{ReadRepository, Repository, Store};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory implementation of the repository traits.
///
/// Loads hand out a copy of the current snapshot and saves replace it
/// wholesale, mirroring the file-backed repository. Clones share the same
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    store: RwLock<Store>,
    saves: AtomicUsize,
}

impl InMemoryRepository {
    /// Creates a repository holding an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `store`.
    pub fn with_store(store: Store) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: RwLock::new(store),
                saves: AtomicUsize::new(0),
            }),
        }
    }

    /// Number of snapshots saved so far.
    pub fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn load(&self) -> Result<Store> {
        Ok(self.inner.store.read().clone())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn save(&self, store: &Store) -> Result<()> {
        *self.inner.store.write() = store.clone();
        self.inner.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
