use crate::error::{Result, ShortenerError};
use crate::shortener::{ShortenParams, Shortener};
use async_trait::async_trait;
use linkcut_core::{validate_url, Base62Encoder, CoreError, Record, Repository, ShortCode, Store};
use std::sync::Arc;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

/// Settings for a [`ShortenerService`].
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ShortenerSettings {
    /// Encoder used for generated codes.
    #[builder(default)]
    encoder: Base62Encoder,
    /// Id given to the first record of an empty store. Without it, shortening
    /// into an empty store fails with [`ShortenerError::EmptyStore`].
    #[builder(default)]
    start_id: Option<u64>,
}

/// A concrete implementation of the [`Shortener`] trait.
///
/// Each call loads the full snapshot, appends at most one record and saves
/// the snapshot back. Nothing is saved when validation or id assignment
/// fails.
///
/// Short codes are kept unique: a custom alias that is already taken is
/// rejected, and a generated code that collides with an earlier custom alias
/// is skipped by advancing the id.
#[derive(Debug, Clone)]
pub struct ShortenerService<R> {
    repository: Arc<R>,
    settings: ShortenerSettings,
}

impl<R: Repository> ShortenerService<R> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R) -> Self {
        Self::with_settings(repository, ShortenerSettings::default())
    }

    pub fn with_settings(repository: R, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            settings,
        }
    }

    /// Returns the id the next record would receive in `store`.
    fn next_id(&self, store: &Store) -> Result<u64> {
        match store.next_id() {
            Ok(id) => Ok(id),
            Err(CoreError::EmptyStore) => self.settings.start_id.ok_or(ShortenerError::EmptyStore),
            Err(e) => Err(e.into()),
        }
    }

    /// Picks the first id from `id` on whose generated code is still free.
    fn free_generated_code(&self, store: &Store, mut id: u64) -> Result<(u64, ShortCode)> {
        loop {
            let code = ShortCode::generated(&self.settings.encoder, id);
            if !store.contains_code(code.as_str()) {
                return Ok((id, code));
            }
            warn!(id, code = %code, "generated code already taken by a custom alias, skipping id");
            id = id.checked_add(1).ok_or(CoreError::IdSpaceExhausted(id))?;
        }
    }
}

#[async_trait]
impl<R: Repository> Shortener for ShortenerService<R> {
    async fn shorten(&self, params: ShortenParams) -> Result<Record> {
        let address = validate_url(&params.original_url)?;

        let store = self.repository.load().await?;
        let next_id = self.next_id(&store)?;

        let (id, short_code) = match params.custom_alias {
            Some(code) => {
                if store.contains_code(code.as_str()) {
                    return Err(ShortenerError::AliasConflict(code.to_string()));
                }
                (next_id, code)
            }
            None => self.free_generated_code(&store, next_id)?,
        };

        debug!(id, code = %short_code, address = %address, "appending record");
        let store = store.append_with_id(id, address, short_code)?;
        self.repository.save(&store).await?;

        let record = store.last().cloned().ok_or_else(|| {
            ShortenerError::IdAssignment("appended record is missing".to_string())
        })?;
        info!(
            id = record.id,
            code = %record.short_code,
            address = %record.address,
            "stored short code"
        );
        Ok(record)
    }
}
