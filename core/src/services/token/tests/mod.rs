//! Shared fixtures for token service tests

mod codec_tests;

use crate::domain::entities::user::User;
use crate::repositories::RevocationStore;

use super::{SigningKeys, TokenService, TokenServiceConfig};

pub(crate) const PRIVATE_KEY: &str = include_str!("../../../../keys/test_private_key.pem");
pub(crate) const PUBLIC_KEY: &str = include_str!("../../../../keys/test_public_key.pem");
pub(crate) const OTHER_PUBLIC_KEY: &str = include_str!("../../../../keys/other_public_key.pem");
pub(crate) const REFRESH_SECRET: &str = "test-refresh-secret";

pub(crate) fn test_keys() -> SigningKeys {
    SigningKeys::from_pem(
        PRIVATE_KEY.as_bytes(),
        PUBLIC_KEY.as_bytes(),
        REFRESH_SECRET.as_bytes(),
    )
    .expect("test keys should parse")
}

pub(crate) fn service_with<R: RevocationStore>(
    store: R,
    config: TokenServiceConfig,
) -> TokenService<R> {
    TokenService::new(store, test_keys(), config)
}

pub(crate) fn bob() -> User {
    let mut user = User::new("bob@bob.com", "$2b$12$not-a-real-hash");
    user.name = "Bob".to_string();
    user.website = "https://bob.example.com".to_string();
    user
}
