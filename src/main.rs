//! LinkHub Server: multi-tenant URL shortener.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use linkhub_api::{AppState, build_app};
use linkhub_core::config::{AppConfig, StoreBackend};
use linkhub_core::error::AppError;
use linkhub_database::{
    DatabasePool, LinkRepository, LinkStore, MemoryLinkStore, MemoryUserStore, UserRepository,
    UserStore,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("LINKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
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
                .with_thread_ids(true)
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
    tracing::info!("Starting LinkHub v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the built-in placeholder; set LINKHUB__AUTH__JWT_SECRET");
    }
    if config.cookie_blocked_cross_origin() {
        tracing::warn!(
            "Cookie transport with a wildcard CORS origin: cross-site clients will not send the session cookie; list explicit origins in server.cors.allowed_origins"
        );
    }

    // ── Storage ──────────────────────────────────────────────────
    let (user_store, link_store, db_pool) = match config.database.backend {
        StoreBackend::Postgres => {
            let db = DatabasePool::open(&config.database).await?;
            let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db.pool()));
            let links: Arc<dyn LinkStore> = Arc::new(LinkRepository::new(db.pool()));
            (users, links, Some(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
            let links: Arc<dyn LinkStore> = Arc::new(MemoryLinkStore::new());
            (users, links, None)
        }
    };

    // ── HTTP server ──────────────────────────────────────────────
    let addr = config.server.bind_address();
    let app = build_app(AppState::new(config, user_store, link_store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LinkHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(db) = db_pool {
        db.close().await;
    }

    tracing::info!("LinkHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
