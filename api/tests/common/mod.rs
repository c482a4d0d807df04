//! Test harness shared by the API integration tests

#![allow(dead_code)]

use account_api::AppState;
use account_core::{
    InMemoryImageRepository, InMemoryRevocationStore, InMemoryUserRepository, SigningKeys,
    TokenService, TokenServiceConfig, UserService,
};
use account_infra::BcryptPasswordHasher;
use account_shared::config::ServerConfig;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::{header, StatusCode},
    test, web,
};
use serde_json::Value;

pub const BASE: &str = "/api/account";
pub const IMAGE_BASE_URL: &str = "http://images.test/profile";

pub const PRIVATE_KEY: &str = include_str!("../../../core/keys/test_private_key.pem");
pub const PUBLIC_KEY: &str = include_str!("../../../core/keys/test_public_key.pem");
pub const REFRESH_SECRET: &str = "api-test-refresh-secret";

pub type TestState = AppState<
    InMemoryRevocationStore,
    InMemoryUserRepository,
    InMemoryImageRepository,
    BcryptPasswordHasher,
>;

/// State plus handles on the in-memory stores behind it
pub struct Harness {
    pub state: web::Data<TestState>,
    pub store: InMemoryRevocationStore,
    pub users: InMemoryUserRepository,
    pub images: InMemoryImageRepository,
}

pub fn test_keys() -> SigningKeys {
    SigningKeys::from_pem(
        PRIVATE_KEY.as_bytes(),
        PUBLIC_KEY.as_bytes(),
        REFRESH_SECRET.as_bytes(),
    )
    .expect("test keys should parse")
}

pub fn harness() -> Harness {
    harness_with(TokenServiceConfig::default(), 64 * 1024)
}

pub fn harness_with(config: TokenServiceConfig, max_body_bytes: usize) -> Harness {
    let store = InMemoryRevocationStore::new();
    let users = InMemoryUserRepository::new();
    let images = InMemoryImageRepository::new(IMAGE_BASE_URL);

    let token_service = TokenService::new(store.clone(), test_keys(), config);
    // Low bcrypt cost keeps the suite fast
    let user_service = UserService::new(users.clone(), images.clone(), BcryptPasswordHasher::new(4));

    let server = ServerConfig {
        max_body_bytes,
        ..ServerConfig::default()
    };

    Harness {
        state: web::Data::new(AppState::new(token_service, user_service, &server)),
        store,
        users,
        images,
    }
}

pub fn uri(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Call the service and decode the JSON body
pub async fn call_json<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub fn signup_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&uri("/signup"))
        .set_json(serde_json::json!({ "email": email, "password": password }))
}

pub fn signin_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&uri("/signin"))
        .set_json(serde_json::json!({ "email": email, "password": password }))
}

pub fn refresh_request(refresh_token: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&uri("/tokens"))
        .set_json(serde_json::json!({ "refreshToken": refresh_token }))
}

/// `(idToken, refreshToken)` from a `{"tokens": ...}` body
pub fn tokens_of(body: &Value) -> (String, String) {
    (
        body["tokens"]["idToken"].as_str().expect("idToken").to_string(),
        body["tokens"]["refreshToken"].as_str().expect("refreshToken").to_string(),
    )
}
