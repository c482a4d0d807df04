//! Profile image storage trait.

use async_trait::async_trait;

use crate::context::OpContext;
use crate::errors::DomainError;

/// Object storage for profile images, addressed by object name.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Write (or overwrite) `object_name` and return its public URL
    async fn update_profile(
        &self,
        ctx: &OpContext,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError>;

    /// Delete `object_name`
    async fn delete_profile(&self, ctx: &OpContext, object_name: &str) -> Result<(), DomainError>;
}
