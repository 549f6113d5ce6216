//! Integration tests for the demo app.
//!
//! Each route raises a different error shape; the dispatcher must turn each
//! into the expected status and JSON body.

use apierr_axum::create_app;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = create_app().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_plain_error_is_generic_500() {
    let (status, body) = get("/simple").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_custom_error_from_cause() {
    let (status, body) = get("/complex").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");
    assert_eq!(body["type"], "AUTH_ERROR");
    assert_eq!(body["error_code"], "AUTH_401");
}

#[tokio::test]
async fn test_custom_error_direct() {
    let (status, body) = get("/test").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "code": 400,
            "message": "Invalid request format",
            "type": "BAD_REQUEST",
            "error_code": "BR_400",
            "retryable": false
        })
    );
}

#[tokio::test]
async fn test_wrapped_custom_error() {
    let (status, body) = get("/wrap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid data");
}

#[tokio::test]
async fn test_double_wrapped_custom_error() {
    let (status, body) = get("/double").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "NF_404");
}

#[tokio::test]
async fn test_generated_error_with_metadata() {
    let (status, body) = get("/resources/widget").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "The requested resource could not be found.");
    assert_eq!(body["details"], json!({ "resource": "widget" }));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_metrics_count_responses() {
    let _ = get("/simple").await;

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = create_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("apierr_responses_total"));
    assert!(text.contains("outcome=\"unrecognized\""));
}
