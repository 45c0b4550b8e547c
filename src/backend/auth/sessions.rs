/**
 * Session Management
 *
 * Sessions are server-side records in the `tower_sessions` table, keyed by a
 * random id that the browser keeps in the `notekeeper_session` cookie. The
 * record holds the authenticated user id. Logging out deletes the record,
 * so an old cookie is worthless afterwards.
 */

use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, Session, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::server::config::ServerConfig;

/// Name of the cookie that holds the session id
pub const SESSION_COOKIE: &str = "notekeeper_session";

/// Session key for the authenticated user's id
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Build the session layer over the SQLite store
///
/// Sessions expire after `session_ttl_hours` without a request.
pub fn session_layer(store: SqliteStore, config: &ServerConfig) -> SessionManagerLayer<SqliteStore> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.session_cookie_secure)
        .with_expiry(Expiry::OnInactivity(Duration::hours(i64::from(
            config.session_ttl_hours,
        ))))
}

/// Mark the session as belonging to `user_id`
///
/// The session id is replaced first, so an id planted before login is never
/// promoted to an authenticated one.
pub async fn begin(session: &Session, user_id: i64) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    tracing::debug!("Session started for user {}", user_id);
    Ok(())
}

/// The user id stored in the session, if any
pub async fn user_id(session: &Session) -> Result<Option<i64>, tower_sessions::session::Error> {
    session.get::<i64>(SESSION_USER_ID_KEY).await
}

/// Destroy the session record and expire the cookie
pub async fn end(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
