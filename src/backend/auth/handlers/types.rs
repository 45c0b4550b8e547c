/**
 * Authentication Handler Types
 *
 * Form payloads shared by the register and login handlers.
 */

use serde::Deserialize;

/// Username/password form submitted to `/register` and `/login`
///
/// Missing fields deserialize as empty strings and are rejected by
/// validation rather than by the extractor.
#[derive(Deserialize, Debug)]
pub struct CredentialsForm {
    /// Username (exact, case-sensitive)
    #[serde(default)]
    pub username: String,
    /// Plaintext password, hashed or verified immediately and never logged
    #[serde(default)]
    pub password: String,
}
