//! One-way password hashing.
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool instead of stalling an async worker.

use thiserror::Error;
use tokio::task;

use crate::constants::auth::{DEFAULT_BCRYPT_COST, MAX_PASSWORD_BYTES};

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Password exceeds 72 bytes")]
    TooLong,

    #[error("Password hashing task panicked: {0}")]
    Task(#[from] task::JoinError),
}

/// Salted bcrypt hashing with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password. Each call draws a fresh salt.
    ///
    /// Input longer than bcrypt's 72-byte window is refused rather than
    /// truncated.
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong);
        }

        let password = password.to_string();
        let cost = self.cost;

        let digest = task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(digest)
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// A mismatch is `Ok(false)`; a digest that is not valid bcrypt is an error.
    /// Over-long input never matches, since no stored digest was made from it.
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        let password = password.to_string();
        let digest = digest.to_string();

        let matches = task::spawn_blocking(move || bcrypt::verify(password, &digest)).await??;
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: PasswordHasher = PasswordHasher::new(4);

    #[tokio::test]
    async fn hash_then_verify_same_plaintext() {
        let digest = FAST.hash("hunter22").await.unwrap();
        assert!(digest.starts_with("$2b$04$"));
        assert!(FAST.verify("hunter22", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn different_plaintext_fails() {
        let digest = FAST.hash("hunter22").await.unwrap();
        for other in ["hunter23", "Hunter22", "hunter22 ", "", "hunter2"] {
            assert!(!FAST.verify(other, &digest).await.unwrap(), "{other:?}");
        }
    }

    #[tokio::test]
    async fn shared_72_byte_prefix_does_not_verify() {
        let prefix = "a".repeat(72);
        let digest = FAST.hash(&prefix).await.unwrap();

        assert!(FAST.verify(&prefix, &digest).await.unwrap());
        assert!(!FAST.verify(&format!("{prefix}Y"), &digest).await.unwrap());
    }

    #[tokio::test]
    async fn over_long_password_is_not_hashed() {
        let long = format!("{}X", "a".repeat(72));
        assert!(matches!(
            FAST.hash(&long).await,
            Err(PasswordError::TooLong)
        ));
    }

    #[tokio::test]
    async fn salts_differ_between_calls() {
        let first = FAST.hash("same-password").await.unwrap();
        let second = FAST.hash("same-password").await.unwrap();
        assert_ne!(first, second);
        assert!(!first.contains("same-password"));
    }

    #[tokio::test]
    async fn default_cost_is_ten_rounds() {
        let hasher = PasswordHasher::default();
        assert_eq!(hasher.cost(), 10);

        let digest = hasher.hash("secret1").await.unwrap();
        assert!(digest.starts_with("$2b$10$"));
    }

    #[tokio::test]
    async fn malformed_digest_is_an_error() {
        assert!(FAST.verify("whatever", "not-a-bcrypt-digest").await.is_err());
    }
}
