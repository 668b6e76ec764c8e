//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use auth_common::{AppConfig, AppError, PasswordHasher, TokenIssuer};
use auth_core::CredentialStore;
use auth_db::{create_pool, run_migrations, PgCredentialStore};
use auth_service::ServiceContextBuilder;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let timeout = state.config().server.request_timeout();
    let router = apply_middleware(create_router(), timeout);
    router.with_state(state)
}

/// Connect to PostgreSQL, apply migrations if configured, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = auth_db::DatabaseConfig {
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..auth_db::DatabaseConfig::new(config.database.url.clone())
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if let Some(dir) = &config.database.migrations_dir {
        run_migrations(&pool, dir)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    }

    let store = Arc::new(PgCredentialStore::new(pool));
    create_app_state_with_store(config, store)
}

/// Create AppState around an already constructed credential store
pub fn create_app_state_with_store(
    config: AppConfig,
    store: Arc<dyn CredentialStore>,
) -> Result<AppState, AppError> {
    let token_issuer = TokenIssuer::from_config(&config.jwt)?;
    let password_hasher = PasswordHasher::new(config.hashing)?;

    let service_context = ServiceContextBuilder::new()
        .credential_store(store)
        .token_issuer(token_issuer)
        .password_hasher(password_hasher)
        .build()
        .map_err(|e| AppError::config(format!("{e:?}")))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(listener: TcpListener, app: Router) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::config(format!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(listener, app).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
