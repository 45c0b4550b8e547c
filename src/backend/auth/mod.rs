//! Authentication Module
//!
//! This module handles user registration, login and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports and documentation
//! ├── users.rs      - User model and database operations
//! ├── password.rs   - bcrypt hashing and verification
//! ├── sessions.rs   - Session layer and the user id stored in it
//! ├── accounts.rs   - register / authenticate operations
//! └── handlers/     - HTTP handlers
//! ```
//!
//! # Session Lifecycle
//!
//! `Anonymous → Authenticated` on a successful login, `Authenticated →
//! Anonymous` on logout or expiry. Registration leaves the browser anonymous.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Sessions are server-side records behind a random cookie id; logout deletes them
//! - Invalid credentials return 401 without saying which part was wrong

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Session layer and session helpers
pub mod sessions;

/// Account operations
pub mod accounts;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use users::User;
