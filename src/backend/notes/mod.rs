//! Notes Module
//!
//! Per-user notes: storage, ownership-checked operations and HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! notes/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Note model and SQL
//! ├── service.rs   - list / create / edit / delete scoped to the session user
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Ownership
//!
//! A note is only visible, editable and deletable by its owner. Editing
//! another user's note is answered with 403; deleting one is silently
//! ignored.

/// Note model and database operations
pub mod db;

/// Note operations
pub mod service;

/// HTTP handlers for note pages
pub mod handlers;

pub use db::Note;
