//! End-to-end session lifecycle through the public core API

use std::time::Duration;

use account_core::{
    ErrorKind, InMemoryRevocationStore, OpContext, SigningKeys, TokenService, TokenServiceConfig,
    User,
};

const PRIVATE_KEY: &str = include_str!("../keys/test_private_key.pem");
const PUBLIC_KEY: &str = include_str!("../keys/test_public_key.pem");

fn create_service(config: TokenServiceConfig) -> TokenService<InMemoryRevocationStore> {
    let keys = SigningKeys::from_pem(
        PRIVATE_KEY.as_bytes(),
        PUBLIC_KEY.as_bytes(),
        b"integration-refresh-secret",
    )
    .unwrap();
    TokenService::new(InMemoryRevocationStore::new(), keys, config)
}

#[tokio::test]
async fn test_bob_session_lifecycle() {
    let service = create_service(TokenServiceConfig {
        id_token_expiry_secs: 1,
        refresh_token_expiry_secs: 3600,
    });
    let ctx = OpContext::with_timeout(Duration::from_secs(5));
    let bob = User::new("bob@bob.com", "hash");

    let p1 = service.issue_pair(&ctx, &bob, None).await.unwrap();
    assert_eq!(service.validate_identity(&p1.id_token.ss).unwrap().uid, bob.uid);

    tokio::time::sleep(Duration::from_millis(2100)).await;
    let expired = service.validate_identity(&p1.id_token.ss).unwrap_err();
    assert_eq!(expired.kind(), ErrorKind::Authorization);

    let refresh = service.validate_refresh(&p1.refresh_token.ss).unwrap();
    let ctx = OpContext::with_timeout(Duration::from_secs(5));
    let p2 = service.issue_pair(&ctx, &bob, Some(refresh.id)).await.unwrap();
    assert_ne!(p2.refresh_token.id, p1.refresh_token.id);
    assert!(service.validate_identity(&p2.id_token.ss).is_ok());

    // P1's refresh token still verifies, but its entry is gone
    let replay = service.validate_refresh(&p1.refresh_token.ss).unwrap();
    let err = service.issue_pair(&ctx, &bob, Some(replay.id)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);
}

#[tokio::test]
async fn test_signout_then_fresh_login() {
    let service = create_service(TokenServiceConfig::default());
    let ctx = OpContext::background();
    let user = User::new("carol@example.com", "hash");

    let before = service.issue_pair(&ctx, &user, None).await.unwrap();
    service.signout(&ctx, user.uid).await.unwrap();
    service.signout(&ctx, user.uid).await.unwrap();

    let err = service
        .issue_pair(&ctx, &user, Some(before.refresh_token.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);

    let after = service.issue_pair(&ctx, &user, None).await.unwrap();
    let json = serde_json::to_value(&after).unwrap();
    assert!(json["idToken"].is_string());
    assert!(json["refreshToken"].is_string());
}
