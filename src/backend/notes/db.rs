/**
 * Database Operations for Notes
 *
 * Raw persistence for the `notes` table. Ownership rules live one level up
 * in `notes::service`; the mutating statements here are still scoped by
 * `user_id` so a row can only change through its owner.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// A note as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    /// Unique note ID
    pub id: i64,
    /// Note text
    pub content: String,
    /// Creation time; never changes on edit
    pub created_at: DateTime<Utc>,
    /// Owning user
    pub user_id: i64,
}

/// Insert a note
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_id` - Owner of the note
/// * `content` - Note text
/// * `created_at` - Creation timestamp
pub async fn insert_note(
    pool: &SqlitePool,
    user_id: i64,
    content: &str,
    created_at: DateTime<Utc>,
) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (content, created_at, user_id)
        VALUES (?, ?, ?)
        RETURNING id, content, created_at, user_id
        "#,
    )
    .bind(content)
    .bind(created_at)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Load all notes owned by a user, oldest first
pub async fn list_notes_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, content, created_at, user_id
        FROM notes
        WHERE user_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Load a note by ID regardless of owner
pub async fn get_note(pool: &SqlitePool, note_id: i64) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, content, created_at, user_id
        FROM notes
        WHERE id = ?
        "#,
    )
    .bind(note_id)
    .fetch_optional(pool)
    .await
}

/// Replace the content of a note owned by `user_id`
///
/// # Returns
/// The number of rows changed (0 or 1)
pub async fn update_note_content(
    pool: &SqlitePool,
    note_id: i64,
    user_id: i64,
    content: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE notes SET content = ? WHERE id = ? AND user_id = ?")
        .bind(content)
        .bind(note_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a note owned by `user_id`
///
/// # Returns
/// The number of rows removed (0 or 1)
pub async fn delete_note_owned_by(
    pool: &SqlitePool,
    note_id: i64,
    user_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
        .bind(note_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
