//! Cache module for Redis-backed storage
//!
//! Provides the Redis connection wrapper and the revocation store that keeps
//! one key per live refresh token.

pub mod redis_client;
pub mod revocation_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

pub use account_shared::config::CacheConfig;
