//! Filesystem-backed `ImageRepository`

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use account_core::context::OpContext;
use account_core::errors::DomainError;
use account_core::repositories::ImageRepository;
use account_shared::config::StorageConfig;

use crate::InfrastructureError;

/// Writes profile images into a directory and addresses them as
/// `{base_url}/{object_name}`
#[derive(Debug, Clone)]
pub struct LocalImageRepository {
    dir: PathBuf,
    base_url: String,
}

impl LocalImageRepository {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.image_dir, &config.image_base_url)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn object_path(&self, object_name: &str) -> Result<PathBuf, DomainError> {
        let valid = !object_name.is_empty()
            && object_name != "."
            && object_name != ".."
            && !object_name.contains(|c: char| c == '/' || c == '\\');
        if !valid {
            return Err(DomainError::internal(format!(
                "invalid image object name {:?}",
                object_name
            )));
        }
        Ok(self.dir.join(object_name))
    }
}

#[async_trait]
impl ImageRepository for LocalImageRepository {
    async fn update_profile(
        &self,
        ctx: &OpContext,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        let path = self.object_path(object_name)?;

        ctx.run("image upload", async {
            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(InfrastructureError::from)?;
            tokio::fs::write(&path, &bytes)
                .await
                .map_err(InfrastructureError::from)?;
            Ok(())
        })
        .await?;

        tracing::debug!(object_name, content_type, size = bytes.len(), "Stored profile image");
        Ok(format!("{}/{}", self.base_url, object_name))
    }

    async fn delete_profile(&self, ctx: &OpContext, object_name: &str) -> Result<(), DomainError> {
        let path = self.object_path(object_name)?;

        ctx.run("image delete", async {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Err(DomainError::not_found("image", object_name))
                }
                Err(e) => Err(InfrastructureError::from(e).into()),
            }
        })
        .await
    }
}
