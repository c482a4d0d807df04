//! Redis client implementation
//!
//! Wraps a multiplexed async connection and exposes the handful of commands
//! the revocation store needs. Connecting is retried with backoff at startup;
//! individual commands are not retried.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::cache::CacheConfig;
use crate::InfrastructureError;

/// Redis client sharing one multiplexed connection
///
/// Cloning is cheap; clones share the underlying connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl std::fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisClient")
            .field("url", &mask_url(&self.config.url))
            .finish()
    }
}

impl RedisClient {
    /// Connect to Redis
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    ///
    /// # Example
    /// ```no_run
    /// use account_infra::cache::{CacheConfig, RedisClient};
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379");
    ///     let client = RedisClient::new(config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::connect_with_retry(
            client,
            config.connect_attempts.max(1),
            Duration::from_secs(config.connection_timeout),
        )
        .await?;

        info!("Redis client created successfully");

        Ok(Self { connection, config })
    }

    /// Create multiplexed connection, retrying with exponential backoff
    async fn connect_with_retry(
        client: Client,
        max_attempts: u32,
        attempt_timeout: Duration,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay_ms = 100;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let attempt =
                tokio::time::timeout(attempt_timeout, client.get_multiplexed_async_connection())
                    .await;

            let err = match attempt {
                Ok(Ok(connection)) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Ok(Err(e)) => InfrastructureError::Cache(e),
                Err(_) => InfrastructureError::General(format!(
                    "connection attempt timed out after {:?}",
                    attempt_timeout
                )),
            };

            if attempts >= max_attempts {
                error!("Failed to connect to Redis after {} attempts: {}", attempts, err);
                return Err(err);
            }

            warn!(
                "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                attempts, max_attempts, err, delay_ms
            );
            sleep(Duration::from_millis(delay_ms)).await;
            delay_ms = (delay_ms * 2).min(5000);
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// `SET key value EX seconds`
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, expiry_seconds)
            .await
            .map_err(|e| {
                error!("Failed to set key '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })
    }

    /// `DEL key...`, returning how many keys existed
    pub async fn delete(&self, keys: &[String]) -> Result<u64, InfrastructureError> {
        if keys.is_empty() {
            return Ok(0);
        }

        debug!("Deleting {} key(s)", keys.len());
        let mut conn = self.connection.clone();
        conn.del::<_, u64>(keys).await.map_err(|e| {
            error!("Failed to delete keys: {}", e);
            InfrastructureError::Cache(e)
        })
    }

    /// Collect every key matching `pattern` using `SCAN MATCH`
    pub async fn scan_match(&self, pattern: &str) -> Result<Vec<String>, InfrastructureError> {
        debug!("Scanning keys matching '{}'", pattern);
        let mut conn = self.connection.clone();
        let mut iter = conn.scan_match::<_, String>(pattern).await.map_err(|e| {
            error!("Failed to scan '{}': {}", pattern, e);
            InfrastructureError::Cache(e)
        })?;

        let mut keys = Vec::new();
        while let Some(key) = iter.next_item().await {
            keys.push(key);
        }
        Ok(keys)
    }

    /// `EXISTS key`
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.exists::<_, bool>(key).await.map_err(|e| {
            error!("Failed to check key '{}' existence: {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Check if the Redis connection is healthy with a PING
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) if response == "PONG" => Ok(true),
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }
}

/// Mask credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
