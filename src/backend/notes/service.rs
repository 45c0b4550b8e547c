/**
 * Note Operations
 *
 * Every operation is scoped to the session's user id. Ownership rules:
 *
 * - `edit` and `load_for_edit` distinguish a missing note (`NotFound`) from
 *   someone else's note (`Forbidden`).
 * - `delete` treats both cases as a silent no-op.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::notes::db::{
    delete_note_owned_by, get_note, insert_note, list_notes_for_user, update_note_content, Note,
};

fn require_content(content: &str) -> BackendResult<()> {
    if content.trim().is_empty() {
        return Err(BackendError::EmptyContent);
    }
    Ok(())
}

/// All notes owned by the user, in insertion order
pub async fn list(pool: &SqlitePool, user_id: i64) -> BackendResult<Vec<Note>> {
    Ok(list_notes_for_user(pool, user_id).await?)
}

/// Create a note stamped with the current time
///
/// # Errors
///
/// * `EmptyContent` - Content is empty or whitespace
pub async fn create(pool: &SqlitePool, user_id: i64, content: &str) -> BackendResult<Note> {
    require_content(content)?;
    let note = insert_note(pool, user_id, content, Utc::now()).await?;
    tracing::debug!("User {} created note {}", user_id, note.id);
    Ok(note)
}

/// Load a note the user is allowed to edit
///
/// # Errors
///
/// * `NotFound` - No note with this id
/// * `Forbidden` - The note belongs to someone else
pub async fn load_for_edit(pool: &SqlitePool, user_id: i64, note_id: i64) -> BackendResult<Note> {
    let note = get_note(pool, note_id).await?.ok_or(BackendError::NotFound)?;

    if note.user_id != user_id {
        tracing::warn!("User {} denied access to note {}", user_id, note_id);
        return Err(BackendError::Forbidden);
    }

    Ok(note)
}

/// Replace a note's content; `created_at` is left alone
///
/// # Errors
///
/// * `NotFound` - No note with this id
/// * `Forbidden` - The note belongs to someone else
/// * `EmptyContent` - New content is empty or whitespace
pub async fn edit(
    pool: &SqlitePool,
    user_id: i64,
    note_id: i64,
    new_content: &str,
) -> BackendResult<Note> {
    let mut note = load_for_edit(pool, user_id, note_id).await?;
    require_content(new_content)?;

    if update_note_content(pool, note_id, user_id, new_content).await? == 0 {
        // Deleted between the check and the update.
        return Err(BackendError::NotFound);
    }

    note.content = new_content.to_string();
    tracing::debug!("User {} edited note {}", user_id, note_id);
    Ok(note)
}

/// Delete a note if the user owns it
///
/// A missing note or another user's note is ignored without error.
///
/// # Returns
/// Whether a note was removed
pub async fn delete(pool: &SqlitePool, user_id: i64, note_id: i64) -> BackendResult<bool> {
    let removed = delete_note_owned_by(pool, note_id, user_id).await? > 0;
    if removed {
        tracing::debug!("User {} deleted note {}", user_id, note_id);
    } else {
        tracing::debug!("User {} delete of note {} ignored", user_id, note_id);
    }
    Ok(removed)
}
