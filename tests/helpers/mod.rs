//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use vidsnap_api::auth::ClaimsCache;
use vidsnap_api::state::AppState;
use vidsnap_cloud::identity::InMemoryIdentityProvider;
use vidsnap_cloud::queue::InMemoryQueue;
use vidsnap_cloud::sms::InMemorySms;
use vidsnap_cloud::storage::InMemoryStorage;
use vidsnap_core::config::api::ApiConfig;
use vidsnap_core::config::app::{CorsConfig, ServerConfig};
use vidsnap_core::config::auth::AuthConfig;
use vidsnap_core::config::aws::AwsConfig;
use vidsnap_core::config::database::DatabaseConfig;
use vidsnap_core::config::logging::LoggingConfig;
use vidsnap_core::config::AppConfig;
use vidsnap_database::memory::{InMemoryFileStore, InMemoryNotificationStore};
use vidsnap_service::file::FileService;
use vidsnap_service::notification::NotificationService;

/// A response captured from the test router.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

/// Test application wired with in-memory providers.
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<InMemoryStorage>,
    pub queue: Arc<InMemoryQueue>,
    pub sms: Arc<InMemorySms>,
    pub identity: Arc<InMemoryIdentityProvider>,
}

impl TestApp {
    pub fn new() -> Self {
        let storage = Arc::new(InMemoryStorage::new());
        let queue = Arc::new(InMemoryQueue::new());
        let sms = Arc::new(InMemorySms::new());
        let identity = Arc::new(InMemoryIdentityProvider::new());
        let file_store = Arc::new(InMemoryFileStore::new());
        let notification_store = Arc::new(InMemoryNotificationStore::new());

        let config = test_config();

        let notification_service = Arc::new(NotificationService::new(
            notification_store,
            sms.clone(),
            config.api.clone(),
        ));
        let file_service = Arc::new(FileService::new(
            file_store,
            storage.clone(),
            queue.clone(),
            identity.clone(),
            Arc::clone(&notification_service),
        ));

        let state = AppState {
            config: Arc::new(config),
            file_service,
            notification_service,
            claims_cache: Arc::new(ClaimsCache::new(&AuthConfig::default())),
        };

        Self {
            router: vidsnap_api::router::build_router(state),
            storage,
            queue,
            sms,
            identity,
        }
    }

    /// Sends a request and parses the JSON body (null when empty).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Uploads a video through the multipart endpoint.
    pub async fn upload(
        &self,
        token: &str,
        file_name: &str,
        screenshots_time: Option<&str>,
    ) -> TestResponse {
        let (content_type, body) = multipart_body(file_name, b"fake video bytes");
        let mut builder = Request::builder()
            .method("POST")
            .uri("/files/upload")
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", content_type);
        if let Some(value) = screenshots_time {
            builder = builder.header("x-screenshots-time", value);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router request failed");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Builds an unsigned JWT carrying the given subject and phone number.
pub fn make_token(sub: &str, phone_number: Option<&str>) -> String {
    let mut claims = serde_json::json!({ "sub": sub, "cognito:username": sub });
    if let Some(phone) = phone_number {
        claims["phone_number"] = Value::String(phone.to_string());
    }
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
    format!("{header}.{payload}.unsigned")
}

/// Builds a multipart body with a single `file` field.
pub fn multipart_body(file_name: &str, content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "vidsnap-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{file_name}\"\r\nContent-Type: video/mp4\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_upload_size_bytes: 50 * 1024 * 1024,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig::default(),
        aws: AwsConfig {
            provider: "memory".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
            bucket: String::new(),
            queue_url: String::new(),
            identity_url: String::new(),
        },
        api: ApiConfig {
            base_url: "http://localhost:3334".to_string(),
        },
        logging: LoggingConfig::default(),
    }
}
