/**
 * Register Handler
 *
 * `GET /register` renders the form; `POST /register` creates the account and
 * sends the browser to the login page. Registration never signs the user in.
 *
 * # Errors
 *
 * * `409 Conflict` - `Username already exists!`
 * * `400 Bad Request` - Empty username or password
 */

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};

use crate::backend::auth::accounts;
use crate::backend::auth::handlers::types::CredentialsForm;
use crate::backend::error::BackendResult;
use crate::backend::routes::LOGIN_PATH;
use crate::backend::server::state::AppState;
use crate::backend::views;

/// `GET /register`
pub async fn register_form() -> Html<String> {
    views::register_page()
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> BackendResult<Redirect> {
    tracing::info!("Register request for username: {}", form.username);

    accounts::register(&state.db_pool, state.bcrypt_cost, &form.username, &form.password).await?;

    Ok(Redirect::to(LOGIN_PATH))
}
