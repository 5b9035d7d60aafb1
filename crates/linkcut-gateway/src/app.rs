use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers::redirect_handler;
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .fallback(redirect_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

/// Serves the redirect router on `listener` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    info!(listen_addr = %listener.local_addr()?, "starting redirect server");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("redirect server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for shutdown signal, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use linkcut_core::{ReadRepository, ShortCode, StorageError, Store};
    use linkcut_redirector::RedirectorService;
    use linkcut_storage::InMemoryRepository;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let store = Store::new()
            .append_with_id(1, "http://a.com/", ShortCode::new_unchecked("a"))
            .and_then(|s| s.append("http://b.com/", ShortCode::new_unchecked("c")))
            .unwrap();
        let redirector = RedirectorService::new(InMemoryRepository::with_store(store));
        App::router(AppState::new(redirector))
    }

    async fn send(router: Router, method: Method, path: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        router.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn known_code_redirects_permanently() {
        let response = send(test_router(), Method::GET, "/c").await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "http://b.com/");
    }

    #[tokio::test]
    async fn any_method_is_accepted() {
        for method in [Method::POST, Method::HEAD, Method::DELETE] {
            let response = send(test_router(), method.clone(), "/a").await;
            assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY, "{method}");
            assert_eq!(response.headers()[header::LOCATION], "http://a.com/");
        }
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let response = send(test_router(), Method::GET, "/zzz").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(body_text(response).await, "short code not found");
    }

    #[tokio::test]
    async fn root_and_nested_paths_are_not_found() {
        for path in ["/", "/a/", "/a/c", "/A"] {
            let response = send(test_router(), Method::GET, path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
        }
    }

    #[tokio::test]
    async fn percent_encoded_code_redirects() {
        let response = send(test_router(), Method::GET, "/%63").await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "http://b.com/");

        let response = send(test_router(), Method::GET, "/%FF").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn query_string_is_ignored() {
        let response = send(test_router(), Method::GET, "/c?utm=x").await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "http://b.com/");
    }

    #[tokio::test]
    async fn unreadable_store_is_server_error() {
        struct Unreadable;

        #[async_trait::async_trait]
        impl ReadRepository for Unreadable {
            async fn load(&self) -> linkcut_core::repository::Result<Store> {
                Err(StorageError::Unreadable("truncated".to_string()))
            }
        }

        let router = App::router(AppState::new(RedirectorService::new(Unreadable)));
        let response = send(router, Method::GET, "/a").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "record store unavailable");
    }

    #[tokio::test]
    async fn non_header_safe_address_is_server_error() {
        // only a hand-edited snapshot can contain this
        let store = Store::new()
            .append_with_id(1, "http://a.com/\nx", ShortCode::new_unchecked("nl"))
            .unwrap();
        let redirector = RedirectorService::new(InMemoryRepository::with_store(store));
        let router = App::router(AppState::new(redirector));

        let response = send(router, Method::GET, "/nl").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
