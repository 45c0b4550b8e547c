/**
 * Login Handler
 *
 * `GET /login` renders the form; `POST /login` checks the credentials,
 * records the user in a fresh session and sends the browser to the notes
 * list.
 *
 * # Security
 *
 * - Unknown username and wrong password get the same `401 Invalid credentials!`
 * - The session cookie is `HttpOnly` and `SameSite=Lax`
 */

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::backend::auth::{accounts, sessions};
use crate::backend::auth::handlers::types::CredentialsForm;
use crate::backend::error::BackendResult;
use crate::backend::routes::NOTES_PATH;
use crate::backend::server::state::AppState;
use crate::backend::views;

/// `GET /login`
pub async fn login_form() -> Html<String> {
    views::login_page()
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> BackendResult<Redirect> {
    let user = accounts::authenticate(&state.db_pool, &form.username, &form.password).await?;
    sessions::begin(&session, user.id).await?;

    Ok(Redirect::to(NOTES_PATH))
}
