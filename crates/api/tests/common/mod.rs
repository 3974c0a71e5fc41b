//! Shared harness for API integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`)
//! on top of a temp-dir store and a canned HTML fetcher, plus small
//! request helpers around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use oddsmith_api::config::ServerConfig;
use oddsmith_api::state::AppState;
use oddsmith_api::{build_app_router, ws};
use oddsmith_events::ThemeBus;
use oddsmith_extract::fetch::{AttemptOutcome, FetchOutcome, RelayAttempt};
use oddsmith_extract::{FetchHtml, ThemeExtractor};
use oddsmith_store::{BrandStore, KvStore};

/// Fetcher that always returns the configured payload (or nothing).
pub struct StubFetcher {
    pub payload: Option<&'static str>,
}

#[async_trait]
impl FetchHtml for StubFetcher {
    async fn fetch(&self, _target: &str) -> FetchOutcome {
        match self.payload {
            Some(html) => FetchOutcome {
                html: Some(html.to_string()),
                attempts: vec![RelayAttempt {
                    relay: "stub",
                    outcome: AttemptOutcome::Accepted,
                }],
            },
            None => FetchOutcome {
                html: None,
                attempts: vec![RelayAttempt {
                    relay: "stub",
                    outcome: AttemptOutcome::NetworkError("stubbed offline".to_string()),
                }],
            },
        }
    }
}

/// A fully wired application over temporary storage.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<BrandStore>,
    pub bus: Arc<ThemeBus>,
    // Held so the directory outlives the test.
    _data_dir: tempfile::TempDir,
}

/// Build a test app whose extraction fetcher never yields content.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_payload(None).await
}

/// Build a test app with a canned extraction payload.
pub async fn spawn_app_with_payload(payload: Option<&'static str>) -> TestApp {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(data_dir.path().to_path_buf());

    let bus = Arc::new(ThemeBus::default());
    let kv = KvStore::open(data_dir.path()).await.expect("kv open");
    let store = Arc::new(
        BrandStore::open(kv, Arc::clone(&bus))
            .await
            .expect("store open"),
    );

    let fetcher: Box<dyn FetchHtml> = Box::new(StubFetcher { payload });
    let state = AppState {
        store: Arc::clone(&store),
        bus: Arc::clone(&bus),
        ws_manager: Arc::new(ws::WsManager::new()),
        extractor: Arc::new(ThemeExtractor::with_fetcher(fetcher)),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        bus,
        _data_dir: data_dir,
    }
}

fn test_config(data_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        data_dir,
    }
}

/// Issue a GET and return (status, parsed JSON body).
pub async fn get(router: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("request");
    execute(router, request).await
}

/// Issue a DELETE and return (status, parsed JSON body).
pub async fn delete(router: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .body(Body::empty())
        .expect("request");
    execute(router, request).await
}

/// Issue a request with a JSON body and return (status, parsed body).
pub async fn send_json(
    router: &Router,
    method: Method,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    execute(router, request).await
}

/// POST without a body (select, save).
pub async fn post_empty(router: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .body(Body::empty())
        .expect("request");
    execute(router, request).await
}

async fn execute(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router call is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, body)
}
