//! Redis-backed refresh token revocation store
//!
//! One key per live refresh token: `{prefix:}{uid}:{token_id}` with a TTL equal
//! to the token's lifetime. Rotation deletes the single key; signout scans the
//! user's keys and deletes them with one `DEL`.

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use account_core::context::OpContext;
use account_core::errors::DomainError;
use account_core::repositories::RevocationStore;

use super::redis_client::RedisClient;
use super::CacheConfig;

/// Revocation store persisting entries in Redis
#[derive(Clone, Debug)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

/// Key of one live refresh token
pub(crate) fn entry_key(config: &CacheConfig, uid: Uuid, token_id: Uuid) -> String {
    config.make_key(&format!("{}:{}", uid, token_id))
}

/// SCAN pattern matching every entry of one user
pub(crate) fn user_pattern(config: &CacheConfig, uid: Uuid) -> String {
    config.make_key(&format!("{}:*", uid))
}

/// A `DEL` that removed nothing means the token was already used or revoked
pub(crate) fn require_deleted(deleted: u64, uid: Uuid, token_id: Uuid) -> Result<(), DomainError> {
    if deleted == 0 {
        tracing::debug!(%uid, %token_id, "Refresh token entry not present");
        return Err(DomainError::not_found("refresh_token", token_id.to_string()));
    }
    Ok(())
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn set(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        token_id: Uuid,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        let key = entry_key(self.client.config(), uid, token_id);
        let seconds = ttl.as_secs().max(1);

        ctx.run("revocation set", async {
            self.client.set_with_expiry(&key, "0", seconds).await?;
            Ok(())
        })
        .await
    }

    async fn delete_one(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        token_id: Uuid,
    ) -> Result<(), DomainError> {
        let key = entry_key(self.client.config(), uid, token_id);

        let deleted = ctx
            .run("revocation delete", async {
                Ok(self.client.delete(&[key]).await?)
            })
            .await?;

        require_deleted(deleted, uid, token_id)
    }

    async fn delete_all(&self, ctx: &OpContext, uid: Uuid) -> Result<(), DomainError> {
        let pattern = user_pattern(self.client.config(), uid);

        let removed = ctx
            .run("revocation delete all", async {
                let keys = self.client.scan_match(&pattern).await?;
                Ok(self.client.delete(&keys).await?)
            })
            .await?;

        tracing::debug!(%uid, removed, "Deleted refresh token entries");
        Ok(())
    }
}
