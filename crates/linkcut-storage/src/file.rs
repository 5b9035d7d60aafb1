use crate::snapshot;
use async_trait::async_trait;
use linkcut_core::repository::Result;
use linkcut_core::{ReadRepository, Repository, StorageError, Store};
use std::fs::Permissions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Keeps the record store in a single JSON file.
///
/// Every load reads the whole file and every save rewrites it. Saves go to a
/// temporary file in the same directory which is then renamed over the
/// target, so a concurrent reader sees either the old or the new snapshot and
/// a failed save leaves the old one in place.
///
/// A missing file loads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReadRepository for JsonFileRepository {
    async fn load(&self) -> Result<Store> {
        trace!(path = %self.path.display(), "loading snapshot");

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "snapshot file missing, starting empty");
                return Ok(Store::new());
            }
            Err(e) => {
                return Err(StorageError::Unreadable(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let store = snapshot::decode(&bytes)?;
        debug!(path = %self.path.display(), records = store.len(), "loaded snapshot");
        Ok(store)
    }
}

#[async_trait]
impl Repository for JsonFileRepository {
    async fn save(&self, store: &Store) -> Result<()> {
        let data = snapshot::encode(store)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || atomic_write(&path, &data))
            .await
            .map_err(|e| StorageError::Unwritable(format!("snapshot writer task failed: {e}")))??;

        debug!(path = %self.path.display(), records = store.len(), "saved snapshot");
        Ok(())
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        StorageError::Unwritable(format!(
            "failed to create temp file in {}: {e}",
            dir.display()
        ))
    })?;
    temp.write_all(data)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| StorageError::Unwritable(format!("failed to write snapshot temp file: {e}")))?;

    // the temp file is created 0600; the snapshot keeps the mode it had
    if let Some(permissions) = snapshot_permissions(path) {
        temp.as_file().set_permissions(permissions).map_err(|e| {
            StorageError::Unwritable(format!("failed to set snapshot permissions: {e}"))
        })?;
    }
    temp.persist(path).map_err(|e| {
        StorageError::Unwritable(format!(
            "failed to persist snapshot to {}: {e}",
            path.display()
        ))
    })?;
    Ok(())
}

/// Permissions for the replacement snapshot: those of the current file, or
/// `0644` for a new one.
fn snapshot_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
