//! Persistence backends for the record store.
//!
//! [`JsonFileRepository`] keeps the snapshot in a single JSON file and
//! replaces it atomically on every save. [`InMemoryRepository`] keeps it in
//! process memory and is meant for tests and ephemeral setups.

pub mod file;
pub mod memory;
mod snapshot;

pub use file::JsonFileRepository;
pub use linkcut_core::{ReadRepository, Repository, StorageError};
pub use memory::InMemoryRepository;
