//! Middleware Module
//!
//! Request processing that runs before handler bodies.
//!
//! - **`auth`** - Session check for protected routes (`CurrentUser`)

pub mod auth;

pub use auth::CurrentUser;
