//! In-memory image storage

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::context::OpContext;
use crate::errors::DomainError;

use super::r#trait::ImageRepository;

/// Stored object: content type and bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Image repository keeping objects in a map, URLs are `{base_url}/{object_name}`
#[derive(Clone)]
pub struct InMemoryImageRepository {
    base_url: String,
    objects: Arc<RwLock<HashMap<String, StoredImage>>>,
}

impl InMemoryImageRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, object_name: &str) -> Option<StoredImage> {
        self.objects.read().await.get(object_name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

impl Default for InMemoryImageRepository {
    fn default() -> Self {
        Self::new("http://localhost/images")
    }
}

#[async_trait]
impl ImageRepository for InMemoryImageRepository {
    async fn update_profile(
        &self,
        ctx: &OpContext,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        ctx.ensure_active("image upload")?;
        self.objects.write().await.insert(
            object_name.to_string(),
            StoredImage {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(format!("{}/{}", self.base_url, object_name))
    }

    async fn delete_profile(&self, ctx: &OpContext, object_name: &str) -> Result<(), DomainError> {
        ctx.ensure_active("image delete")?;
        self.objects
            .write()
            .await
            .remove(object_name)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("image", object_name))
    }
}
