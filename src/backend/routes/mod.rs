//! Routes Module
//!
//! HTTP route configuration.
//!
//! ```text
//! routes/
//! ├── mod.rs          - Path constants and exports
//! ├── page_routes.rs  - Account and note routes
//! └── router.rs       - Router assembly
//! ```

/// Account and note routes
pub mod page_routes;

/// Router assembly
pub mod router;

/// Login page; where anonymous requests are sent
pub const LOGIN_PATH: &str = "/login";

/// Notes list; where successful note actions land
pub const NOTES_PATH: &str = "/notes";

pub use router::create_router;
