/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Account routes (register, login, logout)
 * 2. Note routes (session required)
 * 3. Fallback handler (404)
 * 4. Session layer
 * 5. Request tracing layer (outermost)
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::routes::page_routes::{configure_auth_routes, configure_note_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool and hashing cost
/// * `sessions` - Session layer backed by the same database
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, sessions: SessionManagerLayer<SqliteStore>) -> Router<()> {
    let router = Router::new();

    let router = configure_auth_routes(router);
    let router = configure_note_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
