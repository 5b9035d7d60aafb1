use crate::service::candidate_code;
use crate::{RedirectorError, Result};
use async_trait::async_trait;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its stored address.
    /// Returns `None` if no record uses the code.
    async fn resolve(&self, code: &str) -> Result<Option<String>>;

    /// Resolves an inbound request path such as `/bc` to the address to
    /// redirect to.
    ///
    /// A path that matches no record is [`RedirectorError::NotFound`], never
    /// an empty target.
    async fn redirect_target(&self, path: &str) -> Result<String> {
        let code = candidate_code(path);
        self.resolve(code)
            .await?
            .ok_or_else(|| RedirectorError::NotFound(code.to_string()))
    }
}
