//! Encoding and decoding of signed tokens

use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

use crate::domain::entities::token::{IdTokenClaims, RefreshTokenClaims};
use crate::errors::TokenError;

use super::key_manager::SigningKeys;

/// Signs and verifies identity and refresh tokens.
///
/// The algorithm is pinned per token type: a refresh token presented as an
/// identity token (or the reverse) fails to decode. Expiry is checked with
/// zero leeway.
#[derive(Clone)]
pub struct TokenCodec {
    keys: SigningKeys,
    id_validation: Validation,
    refresh_validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").field("keys", &self.keys).finish()
    }
}

fn strict_validation(algorithm: Algorithm) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation
}

fn map_decode_error(err: JwtError) -> TokenError {
    match err.kind() {
        JwtErrorKind::ExpiredSignature => TokenError::Expired,
        JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed(err.to_string()),
    }
}

impl TokenCodec {
    pub fn new(keys: SigningKeys) -> Self {
        Self {
            keys,
            id_validation: strict_validation(Algorithm::RS256),
            refresh_validation: strict_validation(Algorithm::HS256),
        }
    }

    /// Sign identity claims with the RSA private key
    pub fn encode_identity(&self, claims: &IdTokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::RS256), claims, &self.keys.id_encoding)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify and decode an identity token
    ///
    /// # Returns
    ///
    /// * `Ok(IdTokenClaims)` - Structure, signature and expiry all check out
    /// * `Err(TokenError::Malformed)` - Not a well-formed RS256 token
    /// * `Err(TokenError::InvalidSignature)` - Signed by another key or altered
    /// * `Err(TokenError::Expired)` - Current time is past `exp`
    pub fn decode_identity(&self, token: &str) -> Result<IdTokenClaims, TokenError> {
        decode::<IdTokenClaims>(token, &self.keys.id_decoding, &self.id_validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    /// Sign refresh claims with the shared secret
    pub fn encode_refresh(&self, claims: &RefreshTokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.keys.refresh_encoding)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify and decode a refresh token, same failure kinds as [`Self::decode_identity`]
    pub fn decode_refresh(&self, token: &str) -> Result<RefreshTokenClaims, TokenError> {
        decode::<RefreshTokenClaims>(token, &self.keys.refresh_decoding, &self.refresh_validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }
}
