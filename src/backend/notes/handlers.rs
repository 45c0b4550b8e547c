/**
 * Note Handlers
 *
 * HTTP handlers for the note pages. Each takes a `CurrentUser`, so an
 * anonymous request is redirected to the login page before any of these
 * bodies run.
 *
 * # Routes
 *
 * - `GET /notes` - List the user's notes
 * - `POST /notes` - Add a note, then list
 * - `POST /delete_note/{id}` - Delete, always back to the list
 * - `GET /edit_note/{id}` - Edit form
 * - `POST /edit_note/{id}` - Save the edit, back to the list
 *
 * A note id that is not an integer matches no note and gets a 404.
 */

use axum::{
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::CurrentUser;
use crate::backend::notes::service;
use crate::backend::routes::NOTES_PATH;
use crate::backend::views;

/// Note id taken from the `{note_id}` path segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteId(pub i64);

impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(note_id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Unparsable note id in {}: {}", parts.uri.path(), e);
                BackendError::NotFound
            })?;
        Ok(NoteId(note_id))
    }
}

/// New note form
#[derive(Deserialize, Debug)]
pub struct NoteForm {
    /// Note text
    #[serde(default)]
    pub note: String,
}

/// Edit note form
#[derive(Deserialize, Debug)]
pub struct EditNoteForm {
    /// Replacement text
    #[serde(default)]
    pub updated_note: String,
}

/// `GET /notes`
pub async fn show_notes(
    user: CurrentUser,
    State(pool): State<SqlitePool>,
) -> BackendResult<Html<String>> {
    let notes = service::list(&pool, user.id()).await?;
    Ok(views::notes_page(&notes))
}

/// `POST /notes`
pub async fn add_note(
    user: CurrentUser,
    State(pool): State<SqlitePool>,
    Form(form): Form<NoteForm>,
) -> BackendResult<Html<String>> {
    service::create(&pool, user.id(), &form.note).await?;
    let notes = service::list(&pool, user.id()).await?;
    Ok(views::notes_page(&notes))
}

/// `POST /delete_note/{id}`
///
/// Missing notes and notes owned by someone else are ignored; the response
/// is the same redirect either way.
pub async fn delete_note(
    user: CurrentUser,
    State(pool): State<SqlitePool>,
    NoteId(note_id): NoteId,
) -> BackendResult<Redirect> {
    service::delete(&pool, user.id(), note_id).await?;
    Ok(Redirect::to(NOTES_PATH))
}

/// `GET /edit_note/{id}`
pub async fn show_edit_note(
    user: CurrentUser,
    State(pool): State<SqlitePool>,
    NoteId(note_id): NoteId,
) -> BackendResult<Html<String>> {
    let note = service::load_for_edit(&pool, user.id(), note_id).await?;
    Ok(views::edit_note_page(&note))
}

/// `POST /edit_note/{id}`
pub async fn update_note(
    user: CurrentUser,
    State(pool): State<SqlitePool>,
    NoteId(note_id): NoteId,
    Form(form): Form<EditNoteForm>,
) -> BackendResult<Redirect> {
    service::edit(&pool, user.id(), note_id, &form.updated_note).await?;
    Ok(Redirect::to(NOTES_PATH))
}
