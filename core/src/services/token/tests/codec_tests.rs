//! Unit tests for the token codec

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::{IdTokenClaims, RefreshTokenClaims};
use crate::errors::TokenError;
use crate::services::token::{SigningKeys, TokenCodec};

use super::{bob, test_keys, OTHER_PUBLIC_KEY, PRIVATE_KEY, PUBLIC_KEY, REFRESH_SECRET};

fn id_claims(exp_offset: i64) -> IdTokenClaims {
    let now = Utc::now().timestamp();
    IdTokenClaims {
        user: bob().without_credential(),
        iat: now,
        exp: now + exp_offset,
    }
}

fn refresh_claims(exp_offset: i64) -> RefreshTokenClaims {
    let now = Utc::now().timestamp();
    RefreshTokenClaims {
        uid: Uuid::new_v4(),
        iat: now,
        exp: now + exp_offset,
        jti: Uuid::new_v4().to_string(),
    }
}

/// Change one character in the middle of the signature segment
fn tamper_signature(token: &str) -> String {
    let sig_start = token.rfind('.').unwrap() + 1;
    let target = sig_start + 10;
    let mut bytes = token.as_bytes().to_vec();
    bytes[target] = if bytes[target] == b'A' { b'B' } else { b'A' };
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_identity_round_trip() {
    let codec = TokenCodec::new(test_keys());
    let claims = id_claims(900);

    let token = codec.encode_identity(&claims).unwrap();
    let decoded = codec.decode_identity(&token).unwrap();

    assert_eq!(decoded, claims);
}

#[test]
fn test_refresh_round_trip() {
    let codec = TokenCodec::new(test_keys());
    let claims = refresh_claims(3600);

    let token = codec.encode_refresh(&claims).unwrap();
    assert_eq!(codec.decode_refresh(&token).unwrap(), claims);
}

#[test]
fn test_expired_tokens_rejected() {
    let codec = TokenCodec::new(test_keys());

    let id = codec.encode_identity(&id_claims(-5)).unwrap();
    assert_eq!(codec.decode_identity(&id), Err(TokenError::Expired));

    let refresh = codec.encode_refresh(&refresh_claims(-5)).unwrap();
    assert_eq!(codec.decode_refresh(&refresh), Err(TokenError::Expired));
}

#[test]
fn test_tampered_signature_rejected() {
    let codec = TokenCodec::new(test_keys());

    let id = codec.encode_identity(&id_claims(900)).unwrap();
    assert_eq!(
        codec.decode_identity(&tamper_signature(&id)),
        Err(TokenError::InvalidSignature)
    );

    let refresh = codec.encode_refresh(&refresh_claims(900)).unwrap();
    assert_eq!(
        codec.decode_refresh(&tamper_signature(&refresh)),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_identity_signed_by_other_key_rejected() {
    let signer = TokenCodec::new(test_keys());
    let verifier = TokenCodec::new(
        SigningKeys::from_pem(
            PRIVATE_KEY.as_bytes(),
            OTHER_PUBLIC_KEY.as_bytes(),
            REFRESH_SECRET.as_bytes(),
        )
        .unwrap(),
    );

    let token = signer.encode_identity(&id_claims(900)).unwrap();
    assert_eq!(verifier.decode_identity(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_refresh_signed_with_other_secret_rejected() {
    let signer = TokenCodec::new(test_keys());
    let verifier = TokenCodec::new(
        SigningKeys::from_pem(PRIVATE_KEY.as_bytes(), PUBLIC_KEY.as_bytes(), b"another-secret")
            .unwrap(),
    );

    let token = signer.encode_refresh(&refresh_claims(900)).unwrap();
    assert_eq!(verifier.decode_refresh(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_token_types_not_interchangeable() {
    let codec = TokenCodec::new(test_keys());

    let refresh = codec.encode_refresh(&refresh_claims(900)).unwrap();
    assert!(matches!(codec.decode_identity(&refresh), Err(TokenError::Malformed(_))));

    let id = codec.encode_identity(&id_claims(900)).unwrap();
    assert!(matches!(codec.decode_refresh(&id), Err(TokenError::Malformed(_))));
}

#[test]
fn test_garbage_is_malformed() {
    let codec = TokenCodec::new(test_keys());

    for input in ["", "not-a-token", "a.b", "a.b.c"] {
        assert!(
            matches!(codec.decode_identity(input), Err(TokenError::Malformed(_))),
            "input {:?} should be malformed",
            input
        );
    }
}

#[test]
fn test_invalid_key_material() {
    let err = SigningKeys::from_pem(b"not a pem", PUBLIC_KEY.as_bytes(), b"secret").unwrap_err();
    assert!(matches!(err, TokenError::KeyLoad(_)));

    let err = SigningKeys::from_pem(PRIVATE_KEY.as_bytes(), PUBLIC_KEY.as_bytes(), b"").unwrap_err();
    assert!(matches!(err, TokenError::KeyLoad(_)));
}

#[test]
fn test_missing_key_file() {
    let err = SigningKeys::from_files("/nonexistent/private.pem", "/nonexistent/public.pem", b"s")
        .unwrap_err();
    assert!(matches!(err, TokenError::KeyLoad(msg) if msg.contains("private key")));
}

#[test]
fn test_debug_hides_key_material() {
    let debug = format!("{:?}", test_keys());
    assert!(!debug.contains("BEGIN"));
    assert!(debug.contains("memory"));
}
