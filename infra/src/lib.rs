//! # Infrastructure Layer
//!
//! Concrete adapters for the capability traits defined in `account_core`:
//! - **Cache**: Redis client and the Redis-backed refresh token revocation store
//! - **Security**: bcrypt password hashing
//! - **Storage**: profile images on the local filesystem

use account_core::errors::DomainError;

/// Cache module - Redis client and revocation store
pub mod cache;

/// Security module - password hashing
pub mod security;

/// Storage module - profile image persistence
pub mod storage;

pub use cache::{RedisClient, RedisRevocationStore};
pub use security::BcryptPasswordHasher;
pub use storage::LocalImageRepository;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
