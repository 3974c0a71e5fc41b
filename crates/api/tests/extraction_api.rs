mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

const RICH_PAGE: &str = r#"<html><head><style>
    .a { color: #c8102e; } .b { color: #c8102e; } .c { color: #c8102e; }
    body { font-family: Lato, sans-serif; }
    </style></head>
    <body><header></header><nav></nav><div>bet on football odds</div></body></html>"#;

#[tokio::test]
async fn extraction_from_fetched_content_is_full() {
    let app = common::spawn_app_with_payload(Some(RICH_PAGE)).await;

    let (status, body) = common::send_json(
        &app.router,
        Method::POST,
        "/api/v1/extract",
        json!({ "url": "https://www.example-book.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["data"];
    assert_eq!(result["success"], true);
    assert_eq!(result["method"], "full");
    assert_eq!(result["theme"]["colors"]["primary"], "#c8102e");
    // The suggestion is complete and ready to apply.
    assert_eq!(result["suggested"]["colors"]["primary"], "#c8102e");
    assert!(result["suggested"]["colors"]["primaryText"].is_string());
    assert!(result["debug"]["htmlLength"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn offline_extraction_falls_back_to_domain_pattern() {
    let app = common::spawn_app().await;

    let (status, body) = common::send_json(
        &app.router,
        Method::POST,
        "/api/v1/extract",
        json!({ "url": "ladbrokes.com/sports" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["data"];
    assert_eq!(result["success"], true);
    assert_eq!(result["method"], "pattern");
    assert_eq!(result["theme"]["colors"]["primary"], "#C8102E");
    assert!(!result["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_domain_gets_generic_fallback() {
    let app = common::spawn_app().await;

    let (_, body) = common::send_json(
        &app.router,
        Method::POST,
        "/api/v1/extract",
        json!({ "url": "https://totally-unknown.example" }),
    )
    .await;

    let result = &body["data"];
    assert_eq!(result["method"], "pattern");
    assert_eq!(result["theme"]["colors"]["primary"], "#1976d2");
}

#[tokio::test]
async fn empty_url_is_a_bad_request() {
    let app = common::spawn_app().await;

    let (status, body) = common::send_json(
        &app.router,
        Method::POST,
        "/api/v1/extract",
        json!({ "url": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn invalid_url_is_reported_inside_the_result() {
    let app = common::spawn_app().await;

    let (status, body) = common::send_json(
        &app.router,
        Method::POST,
        "/api/v1/extract",
        json!({ "url": "ht tp://???" }),
    )
    .await;

    // The pipeline is total: a broken URL is a failed result, not an
    // HTTP error.
    assert_eq!(status, StatusCode::OK);
    let result = &body["data"];
    assert_eq!(result["success"], false);
    assert!(result["error"].is_string());
    assert!(result.get("theme").is_none());
}
