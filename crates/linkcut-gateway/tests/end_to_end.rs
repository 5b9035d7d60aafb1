use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use linkcut_core::{encode, ReadRepository, Repository, ShortCode, Store};
use linkcut_gateway::{App, AppState};
use linkcut_redirector::RedirectorService;
use linkcut_shortener::{ShortenParams, Shortener, ShortenerService};
use linkcut_storage::JsonFileRepository;
use tower::ServiceExt;

struct Fixture {
    _dir: tempfile::TempDir,
    repo: JsonFileRepository,
}

impl Fixture {
    async fn seeded() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let repo = JsonFileRepository::new(dir.path().join("URLs.json"));

        let store = Store::new()
            .append_with_id(1, "http://a.com/", ShortCode::new_unchecked("a"))
            .expect("seed store");
        repo.save(&store).await.expect("write seed snapshot");

        Self { _dir: dir, repo }
    }

    async fn get(&self, path: &str) -> axum::response::Response {
        let router = App::router(AppState::new(RedirectorService::new(self.repo.clone())));
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        router.oneshot(request).await.unwrap()
    }
}

#[tokio::test]
async fn shorten_then_redirect() {
    let fixture = Fixture::seeded().await;
    let shortener = ShortenerService::new(fixture.repo.clone());

    let record = shortener
        .shorten(ShortenParams::generated("b.com"))
        .await
        .unwrap();
    assert_eq!(record.id, 2);
    assert_eq!(record.address, "http://b.com/");
    assert_eq!(record.short_code, encode(2).as_str());

    let response = fixture.get(&format!("/{}", encode(2))).await;
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[header::LOCATION], "http://b.com/");

    let response = fixture.get("/a").await;
    assert_eq!(response.headers()[header::LOCATION], "http://a.com/");
}

#[tokio::test]
async fn custom_code_then_redirect() {
    let fixture = Fixture::seeded().await;
    let shortener = ShortenerService::new(fixture.repo.clone());

    shortener
        .shorten(ShortenParams::custom(
            "https://github.com/rust-lang",
            ShortCode::custom("rust").unwrap(),
        ))
        .await
        .unwrap();

    let response = fixture.get("/rust").await;
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://github.com/rust-lang/"
    );
}

#[tokio::test]
async fn failed_shorten_leaves_snapshot_untouched() {
    let fixture = Fixture::seeded().await;
    let before = std::fs::read(fixture.repo.path()).unwrap();
    let shortener = ShortenerService::new(fixture.repo.clone());

    assert!(shortener
        .shorten(ShortenParams::generated("nohost."))
        .await
        .is_err());
    assert!(shortener
        .shorten(ShortenParams::custom("b.com", ShortCode::custom("a").unwrap()))
        .await
        .is_err());

    assert_eq!(std::fs::read(fixture.repo.path()).unwrap(), before);
    assert_eq!(fixture.repo.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn miss_never_redirects() {
    let fixture = Fixture::seeded().await;

    let response = fixture.get("/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn corrupt_snapshot_keeps_serving() {
    let fixture = Fixture::seeded().await;
    std::fs::write(fixture.repo.path(), b"{\"URLs\": [").unwrap();

    let response = fixture.get("/a").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let store = Store::new()
        .append_with_id(1, "http://a.com/", ShortCode::new_unchecked("a"))
        .unwrap();
    fixture.repo.save(&store).await.unwrap();

    let response = fixture.get("/a").await;
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
}
