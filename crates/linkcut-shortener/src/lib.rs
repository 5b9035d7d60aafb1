//! URL shortener service implementation.
//!
//! Turns an address into a stored record: validate, load the snapshot,
//! assign an id and short code, append, save. Core types are re-exported
//! from `linkcut_core`.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use service::{ShortenerService, ShortenerSettings};
pub use shortener::{ShortenParams, Shortener};
