use account_core::User;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request body for updating account details
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DetailsRequest {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    /// Empty clears the website
    #[serde(default)]
    #[validate(custom = "validate_website")]
    pub website: String,
}

fn validate_website(website: &str) -> Result<(), ValidationError> {
    if website.is_empty() {
        return Ok(());
    }
    match url::Url::parse(website) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(ValidationError::new("url")),
    }
}

/// `{"user": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { user }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub image_url: String,
    pub message: String,
}
