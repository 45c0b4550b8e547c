//! Notekeeper - Main Library
//!
//! A small multi-user note-taking web application. Users register, log in,
//! and manage their own text notes behind cookie-based sessions.
//!
//! # Module Structure
//!
//! - **`shared`** - Input validation and its error type
//! - **`backend`** - Axum server, SQLite persistence, authentication, notes
//!
//! # Usage
//!
//! ```rust,no_run
//! use notekeeper::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::default()).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! - Passwords are stored as salted bcrypt digests
//! - Sessions live in SQLite; the `HttpOnly` cookie only carries a random id
//! - A note is only visible and mutable by its owner

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
