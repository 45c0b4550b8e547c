/**
 * Account Operations
 *
 * Registration and credential checks, independent of HTTP. The handlers in
 * `auth::handlers` call into these and translate the outcome into redirects,
 * cookies and plain-text rejections.
 *
 * # Registration Process
 *
 * 1. Reject empty username or password
 * 2. Reject a username that is already taken (exact match)
 * 3. Hash password using bcrypt
 * 4. Create user in database
 *
 * # Authentication Process
 *
 * 1. Look up user by exact username
 * 2. Verify password using bcrypt
 *
 * An unknown username and a wrong password produce the same
 * `InvalidCredentials` error.
 */

use sqlx::SqlitePool;

use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::users::{create_user, get_user_by_username, User};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::{require_non_blank, SharedError};

/// Register a new account
///
/// # Errors
///
/// * `SharedError` - Username or password is empty
/// * `DuplicateUsername` - The username is taken; no record is created
pub async fn register(
    pool: &SqlitePool,
    bcrypt_cost: u32,
    username: &str,
    password: &str,
) -> BackendResult<User> {
    require_non_blank("username", username)?;
    if password.is_empty() {
        return Err(SharedError::validation("password", "Password cannot be empty").into());
    }

    if get_user_by_username(pool, username).await?.is_some() {
        tracing::warn!("Username already exists: {}", username);
        return Err(BackendError::DuplicateUsername);
    }

    let password_hash = hash_password(password, bcrypt_cost)?;

    // A concurrent registration can still win the race between the check
    // above and this insert; the UNIQUE constraint catches it.
    let user = create_user(pool, username, &password_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                tracing::warn!("Username already exists: {}", username);
                BackendError::DuplicateUsername
            }
            other => BackendError::Database(other),
        })?;

    tracing::info!("User registered: {} (id {})", user.username, user.id);
    Ok(user)
}

/// Check a username/password pair
///
/// # Errors
///
/// * `InvalidCredentials` - Unknown username or wrong password
pub async fn authenticate(pool: &SqlitePool, username: &str, password: &str) -> BackendResult<User> {
    let Some(user) = get_user_by_username(pool, username).await? else {
        tracing::warn!("Login failed: unknown user {}", username);
        return Err(BackendError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash) {
        tracing::warn!("Login failed: wrong password for {}", username);
        return Err(BackendError::InvalidCredentials);
    }

    tracing::info!("User logged in: {} (id {})", user.username, user.id);
    Ok(user)
}
