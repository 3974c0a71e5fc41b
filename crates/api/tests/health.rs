mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_reports_ok_with_live_counters() {
    let app = common::spawn_app().await;
    let (status, body) = common::get(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["brands"], 2);
    assert_eq!(body["ws_connections"], 0);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = common::spawn_app().await;
    let (status, _) = common::get(&app.router, "/api/v1/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
