use account_core::TokenPair;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for account creation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 30))]
    pub password: String,
}

/// Request body for signing in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 30))]
    pub password: String,
}

/// Request body for exchanging a refresh token
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// `{"tokens": {"idToken": ..., "refreshToken": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensResponse {
    pub tokens: TokenPair,
}

impl From<TokenPair> for TokensResponse {
    fn from(tokens: TokenPair) -> Self {
        Self { tokens }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
