//! Session engine: issues, validates and revokes token pairs

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::context::OpContext;
use crate::domain::entities::token::{
    IdToken, IdTokenClaims, RefreshToken, RefreshTokenClaims, TokenPair,
};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, ErrorKind};
use crate::repositories::RevocationStore;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;
use super::key_manager::SigningKeys;
use super::validator::IdentityValidator;

const IDENTITY_REJECTED: &str = "unable to verify user from identity token";
const REFRESH_REJECTED: &str = "unable to verify user from refresh token";
const PREVIOUS_REJECTED: &str = "invalid refresh token";

/// Service for managing identity and refresh tokens.
///
/// Stateless apart from the revocation store; share it behind an `Arc`.
pub struct TokenService<R: RevocationStore> {
    pub(crate) store: R,
    codec: TokenCodec,
    config: TokenServiceConfig,
}

impl<R: RevocationStore> TokenService<R> {
    /// Creates a new token service
    ///
    /// # Arguments
    ///
    /// * `store` - Revocation store holding live refresh token ids
    /// * `keys` - Signing key material
    /// * `config` - Token lifetimes
    pub fn new(store: R, keys: SigningKeys, config: TokenServiceConfig) -> Self {
        Self {
            store,
            codec: TokenCodec::new(keys),
            config,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Issues a new identity/refresh token pair for `user`.
    ///
    /// When `previous_token_id` is given, that refresh token's entry is deleted
    /// first; if it is already gone the call fails with `Authorization` and
    /// nothing is issued. This makes every refresh token single use.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens signed and the new refresh id recorded
    /// * `Err(DomainError::Authorization)` - Previous refresh token not live
    /// * `Err(DomainError::Internal)` - Signing or store write failed
    /// * `Err(DomainError::ServiceUnavailable)` - Context deadline exceeded
    pub async fn issue_pair(
        &self,
        ctx: &OpContext,
        user: &User,
        previous_token_id: Option<Uuid>,
    ) -> DomainResult<TokenPair> {
        if let Some(previous_id) = previous_token_id {
            if let Err(err) = self.store.delete_one(ctx, user.uid, previous_id).await {
                tracing::warn!(
                    uid = %user.uid,
                    token_id = %previous_id,
                    error = %err,
                    "Could not delete previous refresh token"
                );
                return Err(match err.kind() {
                    ErrorKind::ServiceUnavailable => err,
                    _ => DomainError::authorization(PREVIOUS_REJECTED),
                });
            }
        }

        let now = Utc::now().timestamp();

        let id_claims = IdTokenClaims {
            user: user.without_credential(),
            iat: now,
            exp: now + self.config.id_token_expiry_secs,
        };
        let id_ss = self.codec.encode_identity(&id_claims).map_err(|e| {
            tracing::error!(uid = %user.uid, error = %e, "Error generating identity token");
            DomainError::internal(e.to_string())
        })?;

        let token_id = Uuid::new_v4();
        let refresh_claims = RefreshTokenClaims {
            uid: user.uid,
            iat: now,
            exp: now + self.config.refresh_token_expiry_secs,
            jti: token_id.to_string(),
        };
        let refresh_ss = self.codec.encode_refresh(&refresh_claims).map_err(|e| {
            tracing::error!(uid = %user.uid, error = %e, "Error generating refresh token");
            DomainError::internal(e.to_string())
        })?;

        let expires_in = Duration::from_secs(self.config.refresh_token_expiry_secs.max(1) as u64);

        if let Err(err) = self.store.set(ctx, user.uid, token_id, expires_in).await {
            tracing::error!(
                uid = %user.uid,
                token_id = %token_id,
                error = %err,
                "Error storing refresh token id"
            );
            return Err(match err.kind() {
                ErrorKind::ServiceUnavailable => err,
                _ => DomainError::internal(format!("could not store refresh token: {}", err)),
            });
        }

        tracing::info!(uid = %user.uid, token_id = %token_id, rotated = previous_token_id.is_some(), "Issued token pair");

        Ok(TokenPair {
            id_token: IdToken { ss: id_ss },
            refresh_token: RefreshToken {
                id: token_id,
                uid: user.uid,
                ss: refresh_ss,
                expires_in,
            },
        })
    }

    /// Verifies an identity token and returns the embedded user.
    ///
    /// Pure signature and expiry check, the store is not consulted.
    pub fn validate_identity(&self, token: &str) -> DomainResult<User> {
        self.codec
            .decode_identity(token)
            .map(|claims| claims.user)
            .map_err(|e| {
                tracing::debug!(error = %e, "Identity token rejected");
                DomainError::authorization(IDENTITY_REJECTED)
            })
    }

    /// Verifies a refresh token's signature and expiry.
    ///
    /// Whether the token is still live is decided by the subsequent
    /// [`Self::issue_pair`] call, which deletes its entry.
    pub fn validate_refresh(&self, token: &str) -> DomainResult<RefreshToken> {
        let claims = self.codec.decode_refresh(token).map_err(|e| {
            tracing::debug!(error = %e, "Refresh token rejected");
            DomainError::authorization(REFRESH_REJECTED)
        })?;

        let id = Uuid::parse_str(&claims.jti).map_err(|e| {
            tracing::debug!(error = %e, "Refresh token id is not a uuid");
            DomainError::authorization(REFRESH_REJECTED)
        })?;

        let remaining = (claims.exp - Utc::now().timestamp()).max(0) as u64;

        Ok(RefreshToken {
            id,
            uid: claims.uid,
            ss: token.to_string(),
            expires_in: Duration::from_secs(remaining),
        })
    }

    /// Invalidates every refresh token of `uid`. Idempotent.
    ///
    /// Identity tokens already handed out stay valid until they expire.
    pub async fn signout(&self, ctx: &OpContext, uid: Uuid) -> DomainResult<()> {
        self.store.delete_all(ctx, uid).await.map_err(|err| {
            tracing::error!(%uid, error = %err, "Error deleting refresh tokens");
            err
        })?;

        tracing::info!(%uid, "Signed out of all sessions");
        Ok(())
    }
}

impl<R: RevocationStore> IdentityValidator for TokenService<R> {
    fn validate_identity(&self, token: &str) -> DomainResult<User> {
        TokenService::validate_identity(self, token)
    }
}
