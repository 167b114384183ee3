//! Password value object.
//!
//! Encapsulates hashing and verification behind a type that never exposes
//! the plaintext and never leaves the hash in debug output.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Salted one-way password hash with a tunable work factor.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with a fresh random salt.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing hash loaded from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext password against this hash.
    ///
    /// An unparsable stored hash verifies as false rather than erroring;
    /// the caller treats that the same as a mismatch.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let password = Password::new("abcdefghij").unwrap();

        assert!(password.verify("abcdefghij"));
        assert!(!password.verify("jihgfedcba"));
    }

    #[test]
    fn restored_hash_still_verifies() {
        let password = Password::new("some password").unwrap();
        let stored = password.as_str().to_string();

        let restored = Password::from_hash(stored);
        assert!(restored.verify("some password"));
    }

    #[test]
    fn same_password_different_salts() {
        let first = Password::new("same password").unwrap();
        let second = Password::new("same password").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify("same password"));
        assert!(second.verify("same password"));
    }

    #[test]
    fn garbage_stored_hash_never_verifies() {
        let stored = Password::from_hash("not-a-phc-string".to_string());
        assert!(!stored.verify("anything"));
    }
}
