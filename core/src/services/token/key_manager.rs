//! Signing key material for both token types

use std::fs;
use std::path::Path;

use account_shared::config::JwtConfig;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::TokenError;

/// Keys used to sign and verify tokens.
///
/// Identity tokens use an RSA key pair (RS256); refresh tokens use a shared
/// secret (HS256). Loaded once at startup and immutable afterwards.
#[derive(Clone)]
pub struct SigningKeys {
    /// Private key for signing identity tokens
    pub(crate) id_encoding: EncodingKey,
    /// Public key for verifying identity tokens
    pub(crate) id_decoding: DecodingKey,
    /// Secret for signing refresh tokens
    pub(crate) refresh_encoding: EncodingKey,
    /// Secret for verifying refresh tokens
    pub(crate) refresh_decoding: DecodingKey,
    source: String,
}

impl std::fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeys")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl SigningKeys {
    /// Creates signing keys from PEM-encoded RSA keys and a refresh secret
    ///
    /// # Arguments
    ///
    /// * `private_key_pem` - PEM-encoded RSA private key
    /// * `public_key_pem` - PEM-encoded RSA public key
    /// * `refresh_secret` - Secret for HS256 refresh tokens, must not be empty
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKeys)` - Keys parsed successfully
    /// * `Err(TokenError::KeyLoad)` - A key could not be parsed
    pub fn from_pem(
        private_key_pem: &[u8],
        public_key_pem: &[u8],
        refresh_secret: &[u8],
    ) -> Result<Self, TokenError> {
        Self::build(private_key_pem, public_key_pem, refresh_secret, "memory".to_string())
    }

    /// Creates signing keys from PEM files on disk
    ///
    /// # Example
    ///
    /// ```no_run
    /// use account_core::services::token::SigningKeys;
    ///
    /// let keys = SigningKeys::from_files(
    ///     "rsa_private.pem",
    ///     "rsa_public.pem",
    ///     b"refresh-secret",
    /// ).expect("Failed to load keys");
    /// ```
    pub fn from_files<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
        refresh_secret: &[u8],
    ) -> Result<Self, TokenError> {
        let private_key_path = private_key_path.as_ref();
        let public_key_path = public_key_path.as_ref();

        let private_pem = fs::read(private_key_path).map_err(|e| {
            TokenError::KeyLoad(format!(
                "failed to read private key {}: {}",
                private_key_path.display(),
                e
            ))
        })?;
        let public_pem = fs::read(public_key_path).map_err(|e| {
            TokenError::KeyLoad(format!(
                "failed to read public key {}: {}",
                public_key_path.display(),
                e
            ))
        })?;

        Self::build(
            &private_pem,
            &public_pem,
            refresh_secret,
            format!("{}, {}", private_key_path.display(), public_key_path.display()),
        )
    }

    /// Loads keys from the files and secret named in the configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self, TokenError> {
        Self::from_files(
            config.private_key_path.as_str(),
            config.public_key_path.as_str(),
            config.refresh_secret.as_bytes(),
        )
    }

    fn build(
        private_key_pem: &[u8],
        public_key_pem: &[u8],
        refresh_secret: &[u8],
        source: String,
    ) -> Result<Self, TokenError> {
        if refresh_secret.is_empty() {
            return Err(TokenError::KeyLoad("refresh secret is empty".to_string()));
        }

        let id_encoding = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| TokenError::KeyLoad(format!("invalid private key format: {}", e)))?;
        let id_decoding = DecodingKey::from_rsa_pem(public_key_pem)
            .map_err(|e| TokenError::KeyLoad(format!("invalid public key format: {}", e)))?;

        Ok(Self {
            id_encoding,
            id_decoding,
            refresh_encoding: EncodingKey::from_secret(refresh_secret),
            refresh_decoding: DecodingKey::from_secret(refresh_secret),
            source,
        })
    }
}
