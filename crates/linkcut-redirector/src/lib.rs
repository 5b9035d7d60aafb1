//! Resolution of inbound redirect paths to stored addresses.
//!
//! A [`RedirectorService`] reads through any [`ReadRepository`]: every
//! resolution loads a fresh snapshot and scans it, so requests share no
//! mutable state and always see the latest saved records.
//!
//! ```rust
//! use linkcut_core::{ShortCode, Store};
//! use linkcut_redirector::{Redirector, RedirectorService};
//! use linkcut_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new().append_with_id(1, "http://a.com/", ShortCode::custom("a")?)?;
//! let service = RedirectorService::new(InMemoryRepository::with_store(store));
//!
//! assert_eq!(service.redirect_target("/a").await?, "http://a.com/");
//! # Ok(())
//! # }
//! ```
//!
//! [`ReadRepository`]: linkcut_core::ReadRepository

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use service::{candidate_code, RedirectorService};
