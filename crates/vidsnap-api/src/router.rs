//! Route definitions for the VidSnap HTTP API.
//!
//! Routes are mounted at the root (no prefix). The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_size_bytes as usize;
    let cors = build_cors_layer(&state);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/files/upload", post(handlers::file::upload_file))
        .route("/files", get(handlers::file::list_files))
        .route(
            "/files/{file_id}",
            get(handlers::file::get_file)
                .put(handlers::file::update_file)
                .delete(handlers::file::delete_file),
        )
        .route(
            "/files/{file_id}/download",
            get(handlers::file::download_file),
        )
        .route("/user/files", get(handlers::file::my_files))
        .route("/users/{user_id}/files", get(handlers::file::files_by_user))
        .route(
            "/notifications/{id}",
            get(handlers::notification::get_notification),
        )
        .route(
            "/users/{user_id}/notifications",
            get(handlers::notification::notifications_by_user),
        )
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn(middleware::errors::error_envelope))
        .with_state(state)
}

fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any)
    }
}
