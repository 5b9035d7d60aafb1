use crate::error::{CoreError, Result};
use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// A stored mapping from an id and original address to its short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique, strictly increasing identifier.
    pub id: u64,
    /// The normalized original URL.
    pub address: String,
    /// The code the address is reachable under.
    #[serde(rename = "short", alias = "shortCode")]
    pub short_code: ShortCode,
}

/// The ordered collection of all records, persisted as one snapshot.
///
/// Records are kept in insertion order, which is also id order. A store is
/// never edited in place: appending consumes the store and returns the
/// extended one.
///
/// Deserialization goes through [`Store::from_records`], so a snapshot whose
/// ids are not strictly increasing is rejected instead of loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStore")]
pub struct Store {
    #[serde(rename = "URLs")]
    records: Vec<Record>,
}

/// Snapshot layout before the id order is checked.
#[derive(Deserialize)]
struct RawStore {
    #[serde(rename = "URLs")]
    records: Vec<Record>,
}

impl TryFrom<RawStore> for Store {
    type Error = CoreError;

    fn try_from(raw: RawStore) -> Result<Self> {
        Store::from_records(raw.records)
    }
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from records that are already in strictly increasing
    /// id order.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        for pair in records.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(CoreError::NonMonotonicId {
                    id: pair[1].id,
                    last: pair[0].id,
                });
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Returns the id the next appended record receives: the last id plus one.
    ///
    /// Fails with [`CoreError::EmptyStore`] when there is no record to count
    /// from.
    pub fn next_id(&self) -> Result<u64> {
        let last = self.last().ok_or(CoreError::EmptyStore)?.id;
        last.checked_add(1).ok_or(CoreError::IdSpaceExhausted(last))
    }

    /// Appends a record under the next id and returns the extended store.
    ///
    /// Short-code uniqueness is the caller's concern.
    pub fn append(self, address: impl Into<String>, short_code: ShortCode) -> Result<Self> {
        let id = self.next_id()?;
        self.append_with_id(id, address, short_code)
    }

    /// Appends a record under an explicit id.
    ///
    /// The id must be greater than the last stored id; any id is accepted on
    /// an empty store.
    pub fn append_with_id(
        mut self,
        id: u64,
        address: impl Into<String>,
        short_code: ShortCode,
    ) -> Result<Self> {
        if let Some(last) = self.last() {
            if id <= last.id {
                return Err(CoreError::NonMonotonicId { id, last: last.id });
            }
        }

        self.records.push(Record {
            id,
            address: address.into(),
            short_code,
        });
        Ok(self)
    }

    /// Returns the address of the first record whose short code equals
    /// `code` byte for byte.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.short_code.as_str() == code)
            .map(|record| record.address.as_str())
    }

    /// Checks whether any record already uses `code`.
    pub fn contains_code(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }
}
