/**
 * Page Routes
 *
 * ## Public
 * - `GET /` - Redirect to the login page
 * - `GET|POST /register`
 * - `GET|POST /login`
 * - `GET /logout`
 *
 * ## Session required
 * - `GET|POST /notes`
 * - `POST /delete_note/{id}`
 * - `GET|POST /edit_note/{id}`
 */

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{login, login_form, logout, register, register_form};
use crate::backend::notes::handlers::{
    add_note, delete_note, show_edit_note, show_notes, update_note,
};
use crate::backend::routes::LOGIN_PATH;
use crate::backend::server::state::AppState;

/// Add the account routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(|| async { Redirect::to(LOGIN_PATH) }))
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

/// Add the note routes
///
/// Every handler here extracts `CurrentUser`, which redirects anonymous
/// requests to the login page.
pub fn configure_note_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/notes", get(show_notes).post(add_note))
        .route("/delete_note/{note_id}", post(delete_note))
        .route("/edit_note/{note_id}", get(show_edit_note).post(update_note))
}
