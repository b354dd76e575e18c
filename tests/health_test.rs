//! Integration tests for the health endpoint and error envelope.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn health_check_returns_ok_message() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Health Check - Ok");
}

#[tokio::test]
async fn error_envelope_carries_request_path() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/files/upload", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["path"], "/files/upload");
    assert_eq!(response.body["status"], 401);
    assert!(response.body["message"].is_string());
}
