//! Common test utilities and helpers
//!
//! - Database fixtures (in-memory SQLite)
//! - Browser-like test servers with cookie jars
//! - Form submission and redirect assertions

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
