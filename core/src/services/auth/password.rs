//! Password hashing seam.
//!
//! The core never touches hashing primitives directly; use cases depend on
//! this trait so tests can substitute a deterministic hasher.

use crate::errors::{DomainError, DomainResult};

/// Hashing and verification of user passwords
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, plain: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, plain: &str, hash: &str) -> DomainResult<bool>;
}

/// bcrypt-backed implementation
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> DomainResult<String> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    fn verify(&self, plain: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plain, hash)
            .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let hash = hasher.hash("correct horse battery staple").unwrap();
        assert_ne!(hash, "correct horse battery staple");
        assert!(hasher.verify("correct horse battery staple", &hash).unwrap());
        assert!(!hasher.verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let first = hasher.hash("password123").unwrap();
        let second = hasher.hash("password123").unwrap();
        assert_ne!(first, second);
    }
}
