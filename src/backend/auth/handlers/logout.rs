/**
 * Logout Handler
 *
 * `GET /logout` destroys the session and redirects to the login page.
 * It needs no session, so calling it while signed out is harmless.
 */

use axum::response::Redirect;
use tower_sessions::Session;

use crate::backend::auth::sessions;
use crate::backend::error::BackendResult;
use crate::backend::routes::LOGIN_PATH;

/// `GET /logout`
pub async fn logout(session: Session) -> BackendResult<Redirect> {
    sessions::end(&session).await?;
    tracing::debug!("Session ended");
    Ok(Redirect::to(LOGIN_PATH))
}
