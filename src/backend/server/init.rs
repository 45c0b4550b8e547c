/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite database (created if missing)
 * 2. Run the embedded migrations and create the session table
 * 3. Start the expired-session sweeper
 * 4. Build `AppState` and the session layer
 * 5. Create and configure the router
 */

use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::auth::sessions::session_layer;
use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// How often expired session records are deleted
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Create and configure the Axum application
///
/// Must be called inside a Tokio runtime; it spawns the session sweeper.
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated. Unlike the rest of
/// the server, this is fatal: without storage there is nothing to serve.
pub async fn create_app(config: &ServerConfig) -> BackendResult<Router<()>> {
    tracing::info!("Initializing notekeeper server");

    let db_pool = load_database(&config.database_url).await?;
    tokio::spawn(sweep_expired_sessions(SqliteStore::new(db_pool.clone())));

    Ok(create_app_with_pool(db_pool, config))
}

/// Build the application around an already-open, migrated pool
pub fn create_app_with_pool(db_pool: SqlitePool, config: &ServerConfig) -> Router<()> {
    let sessions = session_layer(SqliteStore::new(db_pool.clone()), config);
    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state, sessions);

    tracing::info!("Router configured");
    app
}

async fn sweep_expired_sessions(store: SqliteStore) {
    let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        if let Err(e) = store.delete_expired().await {
            tracing::warn!("Failed to delete expired sessions: {}", e);
        }
    }
}
