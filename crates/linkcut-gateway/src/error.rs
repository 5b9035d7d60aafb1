use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkcut_core::StorageError;
use linkcut_redirector::RedirectorError;
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("short code not found: '{0}'")]
    NotFound(String),
    #[error("record store unavailable: {0}")]
    Storage(#[from] StorageError),
    #[error("stored address cannot be used as a redirect target: '{0}'")]
    InvalidTarget(String),
}

impl From<RedirectorError> for AppError {
    fn from(error: RedirectorError) -> Self {
        match error {
            RedirectorError::NotFound(code) => AppError::NotFound(code),
            RedirectorError::Storage(source) => AppError::Storage(source),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "short code not found").into_response()
            }
            AppError::Storage(ref source) => {
                error!(error = %source, "failed to load record store");
                (StatusCode::INTERNAL_SERVER_ERROR, "record store unavailable").into_response()
            }
            AppError::InvalidTarget(ref address) => {
                warn!(address = %address, "stored address is not a valid Location header");
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid redirect target").into_response()
            }
        }
    }
}
