/**
 * Authentication Extractor
 *
 * Protected handlers take a `CurrentUser` argument. It reads the user id
 * from the session and confirms the user still exists. Requests without
 * such a session never reach the handler body; they are redirected to the
 * login page instead of getting an error.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::backend::auth::sessions;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::state::AppState;

/// Session identity of the current request
///
/// The wrapped id always comes from the session store, never from request
/// input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

impl CurrentUser {
    /// The authenticated user's id
    pub fn id(self) -> i64 {
        self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| BackendError::config(message))?;

        match resolve(&session, &state.db_pool).await? {
            Some(user) => Ok(user),
            None => {
                tracing::debug!("No valid session for {}", parts.uri.path());
                Err(BackendError::Unauthenticated)
            }
        }
    }
}

/// Look up the session's user
///
/// A session pointing at a user that no longer exists is destroyed and
/// treated as anonymous.
async fn resolve(session: &Session, pool: &SqlitePool) -> BackendResult<Option<CurrentUser>> {
    let Some(user_id) = sessions::user_id(session).await? else {
        return Ok(None);
    };

    if get_user_by_id(pool, user_id).await?.is_none() {
        tracing::warn!("Session refers to missing user {}", user_id);
        sessions::end(session).await?;
        return Ok(None);
    }

    Ok(Some(CurrentUser(user_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;
    use tower_sessions_sqlx_store::SqliteStore;

    use crate::backend::auth::users::create_user;
    use crate::backend::server::config::{load_database, ServerConfig};

    async fn setup() -> (SqlitePool, Session) {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let store = Arc::new(SqliteStore::new(pool.clone()));
        (pool, Session::new(None, store, None))
    }

    #[tokio::test]
    async fn test_valid_session() {
        let (pool, session) = setup().await;
        let user = create_user(&pool, "alice", "hash").await.unwrap();
        sessions::begin(&session, user.id).await.unwrap();

        let current = resolve(&session, &pool).await.unwrap();
        assert_eq!(current, Some(CurrentUser(user.id)));
    }

    #[tokio::test]
    async fn test_missing_session() {
        let (pool, session) = setup().await;
        assert_eq!(resolve(&session, &pool).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_for_deleted_user_is_dropped() {
        let (pool, session) = setup().await;
        sessions::begin(&session, 42).await.unwrap();

        assert_eq!(resolve(&session, &pool).await.unwrap(), None);
        assert_eq!(sessions::user_id(&session).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_route_without_session_layer_is_internal_error() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let app = Router::new()
            .route("/", get(|user: CurrentUser| async move { user.id().to_string() }))
            .with_state(AppState::new(pool, &ServerConfig::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal Server Error");
    }
}
