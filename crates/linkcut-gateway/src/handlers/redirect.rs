use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use tracing::info;

/// Redirects `/<code>` to the address stored under `<code>`.
///
/// Registered as the router fallback so it answers every method and path.
/// The path is percent-decoded first, so `/%61` and `/a` name the same code.
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let path = decoded_path(&uri);
    let address = state.redirector().redirect_target(&path).await?;

    let location = HeaderValue::from_str(&address)
        .map_err(|_| AppError::InvalidTarget(address.clone()))?;

    info!(path = %path, address = %address, "redirecting");
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Percent-decodes the request path. A path that does not decode to UTF-8 is
/// kept as sent; no stored code can match it.
fn decoded_path(uri: &Uri) -> String {
    let raw = uri.path();
    match percent_decode_str(raw).decode_utf8() {
        Ok(path) => path.into_owned(),
        Err(_) => raw.to_string(),
    }
}
