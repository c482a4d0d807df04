//! Revocation store trait: the record of which refresh tokens are still live.

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::context::OpContext;
use crate::errors::DomainError;

/// Storage for `(user id, refresh token id)` entries.
///
/// A refresh token is only honoured for rotation while its entry exists. Entries
/// are written when a token is minted, removed one at a time on rotation or all
/// at once on signout, and expire by themselves after their TTL.
///
/// Every operation is a single atomic step that is immediately visible to all
/// other callers. Implementations must check `ctx` before talking to the
/// backend and abandon the call once its deadline passes.
///
/// # Example
/// ```no_run
/// # use std::time::Duration;
/// # use uuid::Uuid;
/// # use account_core::context::OpContext;
/// # use account_core::repositories::RevocationStore;
/// # async fn example(store: &impl RevocationStore) -> Result<(), Box<dyn std::error::Error>> {
/// let ctx = OpContext::with_timeout(Duration::from_secs(5));
/// let (uid, token_id) = (Uuid::new_v4(), Uuid::new_v4());
///
/// store.set(&ctx, uid, token_id, Duration::from_secs(3600)).await?;
/// store.delete_one(&ctx, uid, token_id).await?;
/// store.delete_all(&ctx, uid).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Record `token_id` as live for `uid` for `ttl`.
    ///
    /// # Returns
    /// * `Ok(())` - Entry written
    /// * `Err(DomainError::Internal)` - Backend failure; no entry exists
    /// * `Err(DomainError::ServiceUnavailable)` - Deadline exceeded
    async fn set(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        token_id: Uuid,
        ttl: Duration,
    ) -> Result<(), DomainError>;

    /// Remove exactly one entry.
    ///
    /// # Returns
    /// * `Ok(())` - The entry existed and is now gone
    /// * `Err(DomainError::NotFound)` - No such entry (never set, expired or already deleted)
    /// * `Err(DomainError)` - Backend failure or deadline exceeded
    async fn delete_one(&self, ctx: &OpContext, uid: Uuid, token_id: Uuid)
        -> Result<(), DomainError>;

    /// Remove every entry belonging to `uid`. Succeeds when there are none.
    async fn delete_all(&self, ctx: &OpContext, uid: Uuid) -> Result<(), DomainError>;
}
