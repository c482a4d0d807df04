//! Token signing configuration

use serde::{Deserialize, Serialize};

/// Default identity token lifetime: 15 minutes
pub const DEFAULT_ID_TOKEN_EXPIRY_SECS: i64 = 15 * 60;

/// Default refresh token lifetime: 3 days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_SECS: i64 = 3 * 24 * 60 * 60;

/// Signing key locations and token lifetimes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// PEM file holding the RSA private key used to sign identity tokens
    pub private_key_path: String,

    /// PEM file holding the RSA public key used to verify identity tokens
    pub public_key_path: String,

    /// Shared secret for HS256 refresh tokens
    #[serde(skip_serializing)]
    pub refresh_secret: String,

    /// Identity token lifetime in seconds
    pub id_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            private_key_path: String::from("rsa_private.pem"),
            public_key_path: String::from("rsa_public.pem"),
            refresh_secret: String::from("development-refresh-secret-change-me"),
            id_token_expiry: DEFAULT_ID_TOKEN_EXPIRY_SECS,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    ///
    /// Reads `PRIV_KEY_FILE`, `PUB_KEY_FILE`, `REFRESH_SECRET`,
    /// `ID_TOKEN_EXP` and `REFRESH_TOKEN_EXP`. Missing or unparseable values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            private_key_path: std::env::var("PRIV_KEY_FILE")
                .unwrap_or(defaults.private_key_path),
            public_key_path: std::env::var("PUB_KEY_FILE").unwrap_or(defaults.public_key_path),
            refresh_secret: std::env::var("REFRESH_SECRET").unwrap_or(defaults.refresh_secret),
            id_token_expiry: std::env::var("ID_TOKEN_EXP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.id_token_expiry),
            refresh_token_expiry: std::env::var("REFRESH_TOKEN_EXP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
        }
    }

    /// Check if using the development refresh secret
    pub fn is_using_default_secret(&self) -> bool {
        self.refresh_secret == Self::default().refresh_secret
    }
}
