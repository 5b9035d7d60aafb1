//! HTTP surface of the redirector.
//!
//! A single, method-agnostic route: `/<code>` answers `301 Moved
//! Permanently` with the stored address, `404 Not Found` for unknown codes
//! and `500 Internal Server Error` when the record store cannot be read.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::{serve, App};
pub use error::AppError;
pub use state::AppState;
