//! Database test fixtures
//!
//! Every fixture is a fresh in-memory SQLite database with the migrations
//! applied, so tests are isolated and need no external services.

use notekeeper::backend::auth::users::get_user_by_username;
use notekeeper::backend::notes::{service, Note};
use notekeeper::backend::server::config::load_database;
use sqlx::SqlitePool;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new, migrated in-memory database
    pub async fn new() -> Self {
        let pool = load_database("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Id of a registered user
    pub async fn user_id(&self, username: &str) -> i64 {
        get_user_by_username(&self.pool, username)
            .await
            .expect("Failed to query user")
            .unwrap_or_else(|| panic!("User {} not found", username))
            .id
    }

    /// Notes owned by a registered user, read straight from storage
    pub async fn notes_of(&self, username: &str) -> Vec<Note> {
        let user_id = self.user_id(username).await;
        service::list(&self.pool, user_id)
            .await
            .expect("Failed to list notes")
    }

    /// Remove a user and, by cascade, their notes
    pub async fn delete_user(&self, username: &str) {
        sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await
            .expect("Failed to delete user");
    }

    /// Number of notes across all users
    pub async fn note_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count notes");
        count
    }
}
