/**
 * Password Hashing
 *
 * bcrypt digests with a random per-call salt. The same password hashes to a
 * different string every time, so verification goes through `bcrypt::verify`
 * and never through string equality.
 */

use bcrypt::{hash, verify};

/// Hash a password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Check a password against a stored digest
///
/// A malformed digest is treated as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match verify(password, password_hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Stored password hash could not be verified: {}", e);
            false
        }
    }
}
