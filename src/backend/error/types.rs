/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the note server. Every
 * controller operation returns `Result<_, BackendError>`, and every variant
 * is recovered at the handler boundary and turned into a user-facing
 * response (plain text or a redirect).
 *
 * # Error Categories
 *
 * ## Account Errors
 *
 * - `DuplicateUsername` - Registration with a username that is taken
 * - `InvalidCredentials` - Unknown username or wrong password (never says which)
 * - `Unauthenticated` - No valid session on a protected route
 *
 * ## Note Errors
 *
 * - `NotFound` - No note with the requested id
 * - `Forbidden` - The note belongs to another user
 * - `EmptyContent` - Note content is empty or whitespace
 *
 * ## Internal Errors
 *
 * Database, migration, hashing, session store and configuration failures. Their
 * details are logged, never sent to the client.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use notekeeper::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::Forbidden;
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A user with this exact username already exists
    #[error("Username already exists!")]
    DuplicateUsername,

    /// Login failed; unknown user and wrong password are indistinguishable
    #[error("Invalid credentials!")]
    InvalidCredentials,

    /// The request carries no valid session
    #[error("Authentication required")]
    Unauthenticated,

    /// No note exists with the requested id
    #[error("Note not found")]
    NotFound,

    /// The note exists but is owned by someone else
    #[error("Unauthorized")]
    Forbidden,

    /// Note content was empty
    #[error("Note content cannot be empty")]
    EmptyContent,

    /// Invalid form input
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Persistence failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema creation failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// bcrypt failed to produce a digest
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Session record could not be loaded or saved
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The server is wired up wrong, e.g. a route without the session layer
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateUsername` - 409 Conflict
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - `Unauthenticated` - 303 See Other (redirect to the login page)
    /// - `NotFound` - 404 Not Found
    /// - `Forbidden` - 403 Forbidden
    /// - `EmptyContent`, `SharedError` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUsername => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthenticated => StatusCode::SEE_OTHER,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::EmptyContent | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_)
            | Self::Migration(_)
            | Self::PasswordHash(_)
            | Self::Session(_)
            | Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is an internal failure rather than a user mistake
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the message shown to the user
    ///
    /// Internal errors collapse to a generic text so that schema or driver
    /// details never reach the client.
    pub fn message(&self) -> String {
        match self {
            Self::SharedError(err) => err.user_message().to_string(),
            err if err.is_internal() => "Internal Server Error".to_string(),
            err => err.to_string(),
        }
    }
}
