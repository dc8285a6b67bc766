//! Password hashing with Argon2id.
//!
//! Only PHC-format hashes ever reach the database; the demo endpoints
//! that leak stored rows leak hashes, not plaintext.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

use crate::error::{ApiError, Result};

/// Hash a plaintext password into an Argon2id PHC string for storage
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(rand::thread_rng());

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| ApiError::Internal("Password hashing failed".to_string()))?
        .to_string();

    Ok(hash)
}

/// Check a plaintext password against a stored PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let parsed = PasswordHash::new(hash)
        .map_err(|_| ApiError::Internal("Stored password hash is malformed".to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))
}
