//! Shared configuration and wire types for the account service
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response envelope and error type codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, Environment, JwtConfig, LoggingConfig, ServerConfig, StorageConfig,
};
pub use errors::{error_codes, ErrorBody, ErrorResponse};
