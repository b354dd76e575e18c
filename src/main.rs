//! VidSnap server — video upload and conversion coordination service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use vidsnap_api::auth::ClaimsCache;
use vidsnap_api::state::AppState;
use vidsnap_cloud::factory::CloudProviders;
use vidsnap_core::config::AppConfig;
use vidsnap_core::error::AppError;
use vidsnap_database::connection::DatabasePool;
use vidsnap_database::repositories::{FileRepository, NotificationRepository};
use vidsnap_service::file::FileService;
use vidsnap_service::notification::NotificationService;

#[tokio::main]
async fn main() {
    let env = std::env::var("VIDSNAP_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VidSnap v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db_pool = DatabasePool::connect(&config.database).await?;
    vidsnap_database::migration::run_migrations(db_pool.pool()).await?;

    // ── Cloud providers ──────────────────────────────────────────
    let providers = CloudProviders::build(&config.aws).await?;

    // ── Repositories and services ─────────────────────────────────
    let file_repo = Arc::new(FileRepository::new(db_pool.pool().clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.pool().clone()));

    let notification_service = Arc::new(NotificationService::new(
        notification_repo,
        Arc::clone(&providers.sms),
        config.api.clone(),
    ));
    let file_service = Arc::new(FileService::new(
        file_repo,
        Arc::clone(&providers.storage),
        Arc::clone(&providers.queue),
        Arc::clone(&providers.identity),
        Arc::clone(&notification_service),
    ));

    // ── HTTP server ───────────────────────────────────────────────
    let claims_cache = Arc::new(ClaimsCache::new(&config.auth));
    let state = AppState {
        config: Arc::new(config.clone()),
        file_service,
        notification_service,
        claims_cache,
    };

    let app = vidsnap_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("VidSnap server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("VidSnap server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
