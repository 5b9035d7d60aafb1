//! Core types and algorithms for the linkcut URL shortener.
//!
//! This crate holds everything both the shortener and the redirector need:
//! the base-62 code alphabet and encoder, URL validation, the record store
//! model with its lookup, and the repository traits that persistence
//! backends implement.

pub mod alphabet;
pub mod base62;
pub mod error;
pub mod record;
pub mod repository;
pub mod shortcode;
pub mod validate;

pub use alphabet::Alphabet;
pub use base62::{encode, Base62Encoder};
pub use error::{CoreError, Result, StorageError};
pub use record::{Record, Store};
pub use repository::{ReadRepository, Repository};
pub use shortcode::ShortCode;
pub use validate::validate_url;
