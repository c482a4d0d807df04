//! Configuration for the token service

use account_shared::config::JwtConfig;

/// Token lifetimes used when minting a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenServiceConfig {
    /// Identity token lifetime in seconds
    pub id_token_expiry_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            id_token_expiry_secs: 15 * 60,
            refresh_token_expiry_secs: 3 * 24 * 60 * 60,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            id_token_expiry_secs: config.id_token_expiry,
            refresh_token_expiry_secs: config.refresh_token_expiry,
        }
    }
}
