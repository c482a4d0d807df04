//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing keys and token lifetimes
//! - `cache` - Redis connection used by the revocation store
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server, base path, handler timeout and body limits
//! - `storage` - Profile image storage location

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token configuration
    pub jwt: JwtConfig,

    /// Redis configuration
    pub cache: CacheConfig,

    /// Image storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
            storage: StorageConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}
