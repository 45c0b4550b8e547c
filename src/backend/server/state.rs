/**
 * Application State Management
 *
 * `AppState` is the dependency bundle handed to every handler: the
 * database pool and the password hashing cost. Sessions travel separately,
 * through the session layer. It replaces process-wide globals.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers extract just the pool,
 * following Axum's recommended pattern.
 *
 * # Example
 *
 * ```rust,no_run
 * use notekeeper::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let _pool = &state.db_pool;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::server::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// bcrypt work factor for new passwords
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build the state from an open pool and the server configuration
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}
