use crate::error::Result;
use async_trait::async_trait;
use linkcut_core::{Record, ShortCode};

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    /// The address to be shortened, as typed by the operator.
    pub original_url: String,
    /// Optional custom alias; the base-62 code of the new id is used otherwise.
    pub custom_alias: Option<ShortCode>,
}

impl ShortenParams {
    /// Parameters for the default flow, where the short code is generated.
    pub fn generated(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            custom_alias: None,
        }
    }

    /// Parameters for storing an address under a caller-chosen code.
    pub fn custom(original_url: impl Into<String>, alias: ShortCode) -> Self {
        Self {
            original_url: original_url.into(),
            custom_alias: Some(alias),
        }
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates the address, stores it under a new record and returns that
    /// record.
    async fn shorten(&self, params: ShortenParams) -> Result<Record>;
}
