//! Error envelope middleware.
//!
//! Error bodies are emitted as `{path: null, status, message}` by the
//! `ApiError` mapping; this middleware fills in the request path so the
//! envelope matches what clients expect.

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

/// Upper bound when buffering an error body for rewriting.
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Injects the request path into JSON error envelopes.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return Response::from_parts(parts, Body::empty()),
    };

    let rewritten = match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(serde_json::Value::Object(mut map))
            if map.contains_key("status") && map.contains_key("message") =>
        {
            map.insert("path".to_string(), serde_json::Value::String(path));
            serde_json::to_vec(&map).unwrap_or_else(|_| bytes.to_vec())
        }
        _ => bytes.to_vec(),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(rewritten))
}
