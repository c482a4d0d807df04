//! In-process revocation store backed by a map with per-entry expiry

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::context::OpContext;
use crate::errors::DomainError;

use super::r#trait::RevocationStore;

/// Revocation store for tests and single-process deployments.
///
/// Expired entries are treated as absent and pruned lazily on write.
#[derive(Clone, Default)]
pub struct InMemoryRevocationStore {
    entries: Arc<RwLock<HashMap<(Uuid, Uuid), Instant>>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a live entry exists for the pair
    pub async fn contains(&self, uid: Uuid, token_id: Uuid) -> bool {
        let entries = self.entries.read().await;
        matches!(entries.get(&(uid, token_id)), Some(expires_at) if *expires_at > Instant::now())
    }

    /// Number of live entries for a user
    pub async fn live_count(&self, uid: Uuid) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|((owner, _), expires_at)| *owner == uid && **expires_at > now)
            .count()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn set(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        token_id: Uuid,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        ctx.ensure_active("revocation set")?;

        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, expires_at| *expires_at > now);
        entries.insert((uid, token_id), now + ttl);

        tracing::debug!(%uid, %token_id, ttl_secs = ttl.as_secs(), "Stored refresh token entry");
        Ok(())
    }

    async fn delete_one(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        token_id: Uuid,
    ) -> Result<(), DomainError> {
        ctx.ensure_active("revocation delete")?;

        let mut entries = self.entries.write().await;
        match entries.remove(&(uid, token_id)) {
            Some(expires_at) if expires_at > Instant::now() => Ok(()),
            _ => Err(DomainError::not_found("refresh_token", token_id.to_string())),
        }
    }

    async fn delete_all(&self, ctx: &OpContext, uid: Uuid) -> Result<(), DomainError> {
        ctx.ensure_active("revocation delete all")?;

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|(owner, _), _| *owner != uid);

        tracing::debug!(%uid, removed = before - entries.len(), "Removed refresh token entries");
        Ok(())
    }
}
