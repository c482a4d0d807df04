//! Password hashing capability

use async_trait::async_trait;

use crate::errors::DomainResult;

/// One-way password hashing.
///
/// Implementations may be CPU heavy and should not block the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    async fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the hash itself is unusable.
    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}
