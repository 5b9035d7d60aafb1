use std::sync::Arc;

use crate::redirector::Redirector;
use crate::Result;
use async_trait::async_trait;
use linkcut_core::ReadRepository;
use tracing::{debug, trace};

/// Strips exactly one leading `/` from a request path.
///
/// Anything after it, including further slashes, is the candidate code.
pub fn candidate_code(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Service for handling URL redirects.
///
/// Uses a read-only repository and loads the full snapshot per resolution.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R: ReadRepository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Resolves a short code to its original address.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(url))` - The original address if a record uses the code
    /// * `Ok(None)` - If no record uses the code
    /// * `Err(e)` - If the snapshot could not be loaded
    pub async fn resolve(&self, code: &str) -> Result<Option<String>> {
        Redirector::resolve(self, code).await
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &str) -> Result<Option<String>> {
        trace!(code = %code, "resolving short code");

        let store = self.repository.load().await?;
        match store.lookup(code) {
            Some(address) => {
                debug!(code = %code, url = %address, "Resolved short code");
                Ok(Some(address.to_string()))
            }
            None => {
                trace!(code = %code, "Short code not found");
                Ok(None)
            }
        }
    }
}
