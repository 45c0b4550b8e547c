//! Shared Module
//!
//! Types that do not depend on the HTTP server: input validation and the
//! errors it produces.

/// Shared error types
pub mod error;

pub use error::{require_non_blank, SharedError};
