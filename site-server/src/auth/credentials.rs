//! Admin credential verification
//!
//! The configured admin password is hashed once at startup; only the
//! Argon2 hash is kept in memory afterwards.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::utils::{AppError, AppResult};

/// In-memory admin credential set
#[derive(Debug)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    /// Hash the configured password and keep only the hash
    pub fn new(username: impl Into<String>, password: &str) -> AppResult<Self> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)?,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Verify a login attempt
    ///
    /// Username comparison is exact; password goes through Argon2. Both
    /// checks run for every attempt so a wrong username is not
    /// distinguishable by timing from a wrong password.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let password_ok = verify_password(password, &self.password_hash).unwrap_or(false);
        self.username == username && password_ok
    }
}

/// Hash password using argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify password using argon2
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Stored password hash invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
