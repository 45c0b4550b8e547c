/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables and
 * opens the embedded SQLite database.
 *
 * # Configuration Sources
 *
 * | Variable                | Default                    |
 * |-------------------------|----------------------------|
 * | `PORT`                  | `5000`                     |
 * | `DATABASE_URL`          | `sqlite://notekeeper.db`   |
 * | `SESSION_TTL_HOURS`     | `168`                      |
 * | `SESSION_COOKIE_SECURE` | `false`                    |
 * | `BCRYPT_COST`           | `bcrypt::DEFAULT_COST`     |
 *
 * The configuration is an explicit value handed to the router state; nothing
 * here is stored in process-wide globals.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::error::BackendError;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://notekeeper.db";

/// Default session lifetime (one week)
pub const DEFAULT_SESSION_TTL_HOURS: u32 = 7 * 24;

/// Longest accepted session lifetime (ten years)
pub const MAX_SESSION_TTL_HOURS: u32 = 10 * 365 * 24;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// How long an idle session stays valid
    pub session_ttl_hours: u32,
    /// Mark the session cookie `Secure` (HTTPS only)
    pub session_cookie_secure: bool,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            session_cookie_secure: false,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// Unset variables fall back to their defaults; set but unparsable ones
    /// are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        let session_cookie_secure = parse_var(&lookup, "SESSION_COOKIE_SECURE")?
            .unwrap_or(defaults.session_cookie_secure);

        let session_ttl_hours =
            parse_var(&lookup, "SESSION_TTL_HOURS")?.unwrap_or(defaults.session_ttl_hours);
        check_range("SESSION_TTL_HOURS", session_ttl_hours, 1, MAX_SESSION_TTL_HOURS)?;

        let bcrypt_cost = parse_var(&lookup, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost);
        check_range("BCRYPT_COST", bcrypt_cost, MIN_BCRYPT_COST, MAX_BCRYPT_COST)?;

        Ok(Self {
            port,
            database_url,
            session_ttl_hours,
            session_cookie_secure,
            bcrypt_cost,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

fn check_range(name: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Open the SQLite database and create the schema if it is missing
///
/// The database file is created when it does not exist yet. In-memory URLs
/// get a single connection, since every SQLite in-memory connection is a
/// separate database.
///
/// # Errors
///
/// Returns `BackendError::Database` when the URL is invalid, the database
/// cannot be opened or the session table cannot be created, and
/// `BackendError::Migration` when the schema cannot be created.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Opening database {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if database_url.contains(":memory:") {
        // The database lives only as long as its one connection.
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    SqliteStore::new(pool.clone()).migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
