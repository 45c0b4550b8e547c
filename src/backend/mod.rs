//! Backend Module
//!
//! All server-side code: an Axum HTTP server over an embedded SQLite
//! database, with session-cookie authentication and per-user notes.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, sessions, account handlers
//! - **`notes`** - Note storage, ownership-checked operations, handlers
//! - **`middleware`** - Session check for protected routes
//! - **`views`** - HTML pages
//! - **`error`** - Backend error taxonomy and response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── notes/          - Notes
//! ├── middleware/     - Request middleware
//! ├── views.rs        - HTML rendering
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → session check (`CurrentUser`) → controller operation →
//! SQLite → rendered page, redirect, or plain-text rejection.
//!
//! # Example
//!
//! ```rust,no_run
//! use notekeeper::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Per-user notes
pub mod notes;

/// Middleware for request processing
pub mod middleware;

/// HTML rendering
pub mod views;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
