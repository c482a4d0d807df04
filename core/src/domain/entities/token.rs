//! Token entities for the identity/refresh token pair.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Claims carried by an identity token (RS256)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// Snapshot of the user at issue time, credential excluded
    pub user: User,

    /// Issued at (unix seconds)
    pub iat: i64,

    /// Expiration (unix seconds)
    pub exp: i64,
}

/// Claims carried by a refresh token (HS256)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// Owning user id
    pub uid: Uuid,

    /// Issued at (unix seconds)
    pub iat: i64,

    /// Expiration (unix seconds)
    pub exp: i64,

    /// Token id, the revocation handle
    pub jti: String,
}

/// A signed identity token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdToken {
    pub ss: String,
}

/// A signed refresh token together with the ids it was minted for.
///
/// Only the signed string is part of the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken {
    #[serde(skip)]
    pub id: Uuid,

    #[serde(skip)]
    pub uid: Uuid,

    pub ss: String,

    #[serde(skip)]
    pub expires_in: Duration,
}

/// Identity + refresh token as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub id_token: IdToken,
    pub refresh_token: RefreshToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_wire_shape() {
        let pair = TokenPair {
            id_token: IdToken { ss: "id.jwt.sig".to_string() },
            refresh_token: RefreshToken {
                id: Uuid::new_v4(),
                uid: Uuid::new_v4(),
                ss: "refresh.jwt.sig".to_string(),
                expires_in: Duration::from_secs(60),
            },
        };

        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"idToken": "id.jwt.sig", "refreshToken": "refresh.jwt.sig"})
        );
    }

    #[test]
    fn test_id_claims_exclude_password() {
        let mut user = User::new("bob@bob.com", "hash-value");
        user.name = "Bob".to_string();
        let claims = IdTokenClaims { user, iat: 1, exp: 2 };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user"]["name"], "Bob");
        assert!(json["user"].get("password").is_none());
    }
}
