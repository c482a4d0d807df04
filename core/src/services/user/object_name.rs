use url::Url;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Storage object name for a user's profile image.
///
/// A user without an image gets a fresh random name; otherwise the final path
/// segment of the existing URL is reused so uploads overwrite the old object.
pub fn object_name_from_url(image_url: &str) -> DomainResult<String> {
    if image_url.is_empty() {
        return Ok(Uuid::new_v4().to_string());
    }

    let url = Url::parse(image_url).map_err(|e| {
        tracing::error!(image_url, error = %e, "Failed to parse profile image url");
        DomainError::internal(format!("invalid profile image url: {}", e))
    })?;

    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| DomainError::internal(format!("no object name in url {}", image_url)))
}
