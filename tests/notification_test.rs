//! Integration tests for notification read endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use vidsnap_core::traits::UserProfile;

use helpers::{TestApp, make_token};

#[tokio::test]
async fn missing_notification_returns_literal_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            &format!("/notifications/{}", Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not Found");
    assert_eq!(response.body["message"], "Notification not found");
}

#[tokio::test]
async fn user_without_notifications_gets_empty_list() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/users/nobody/notifications", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn notification_is_readable_by_id_after_update() {
    let app = TestApp::new();
    app.identity.register(UserProfile {
        id: "user-1".to_string(),
        username: "user-1".to_string(),
        email: None,
        phone_number: None,
    });
    let token = make_token("user-1", None);

    let uploaded = app.upload(&token, "clip.mp4", None).await;
    let file_id = uploaded.body["id"].as_str().unwrap().to_string();
    app.request(
        "PUT",
        &format!("/files/{file_id}"),
        Some(json!({ "compressedFileKey": "x.jpg", "status": "error" })),
        None,
    )
    .await;

    let list = app
        .request("GET", "/users/user-1/notifications", None, None)
        .await;
    let notification_id = list.body[0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/notifications/{notification_id}"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["notificationType"], "error");
    assert_eq!(response.body["fileId"], file_id);
    assert!(app.sms.sent().is_empty());
}
