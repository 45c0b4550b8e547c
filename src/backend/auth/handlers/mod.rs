//! Authentication Handlers Module
//!
//! HTTP handlers for the account pages.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Form types
//! ├── register.rs  - GET/POST /register
//! ├── login.rs     - GET/POST /login
//! └── logout.rs    - GET /logout
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → user created → redirect to `/login`
//! 2. **Login**: username + password → verified → session cookie set → redirect to `/notes`
//! 3. **Logout**: session cookie cleared → redirect to `/login`

/// Form types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use types::CredentialsForm;

pub use login::{login, login_form};
pub use logout::logout;
pub use register::{register, register_form};
