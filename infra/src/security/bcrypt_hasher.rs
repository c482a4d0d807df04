//! bcrypt implementation of `PasswordHasher`

use async_trait::async_trait;

use account_core::errors::{DomainError, DomainResult};
use account_core::services::PasswordHasher;

/// Hashes passwords with bcrypt on the blocking thread pool
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to hash password");
                DomainError::internal(format!("bcrypt: {}", e))
            })
    }

    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!(error = %e, "Stored password hash is unusable");
                DomainError::internal(format!("bcrypt: {}", e))
            })
    }
}
