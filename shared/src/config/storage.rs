//! Profile image storage configuration

use serde::{Deserialize, Serialize};

/// Where profile images are written and how they are addressed publicly
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory profile images are written to
    pub image_dir: String,

    /// Public URL prefix the object name is appended to
    pub image_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            image_dir: String::from("data/images"),
            image_base_url: String::from("http://localhost:8080/images"),
        }
    }
}

impl StorageConfig {
    /// Create from environment variables (`IMAGE_DIR`, `IMAGE_BASE_URL`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            image_dir: std::env::var("IMAGE_DIR").unwrap_or(defaults.image_dir),
            image_base_url: std::env::var("IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
        }
    }
}
