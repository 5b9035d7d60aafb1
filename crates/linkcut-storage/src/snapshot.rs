use linkcut_core::{StorageError, Store};
use serde::Serialize;

const INDENT: &[u8] = b"    ";

/// Renders a store as a pretty-printed JSON document.
pub(crate) fn encode(store: &Store) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store
        .serialize(&mut serializer)
        .map_err(|e| StorageError::Unwritable(format!("failed to render snapshot: {e}")))?;
    Ok(buf)
}

/// Parses a JSON snapshot document.
pub(crate) fn decode(bytes: &[u8]) -> Result<Store, StorageError> {
    serde_json::from_slice(bytes)
        .map_err(|e| StorageError::Unreadable(format!("failed to parse snapshot: {e}")))
}
