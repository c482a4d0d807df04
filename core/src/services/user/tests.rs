//! Unit tests for the user service

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::context::OpContext;
use crate::errors::{DomainError, DomainResult, ErrorKind};
use crate::repositories::{InMemoryImageRepository, InMemoryUserRepository, UserRepository};

use super::{object_name_from_url, PasswordHasher, UserService};

/// Reversible stand-in for a real hasher
struct PrefixHasher;

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        match hash.strip_prefix("hashed:") {
            Some(stored) => Ok(stored == password),
            None => Err(DomainError::internal("unrecognised hash format")),
        }
    }
}

/// Counts every hash or verify, the expensive calls of a real hasher
#[derive(Clone, Default)]
struct CountingHasher {
    work: Arc<AtomicUsize>,
}

impl CountingHasher {
    fn work(&self) -> usize {
        self.work.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for CountingHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        self.work.fetch_add(1, Ordering::SeqCst);
        PrefixHasher.hash(password).await
    }

    async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        self.work.fetch_add(1, Ordering::SeqCst);
        PrefixHasher.verify(password, hash).await
    }
}

type TestService = UserService<InMemoryUserRepository, InMemoryImageRepository, PrefixHasher>;

fn create_test_service() -> (TestService, InMemoryUserRepository, InMemoryImageRepository) {
    let users = InMemoryUserRepository::new();
    let images = InMemoryImageRepository::new("https://images.example.com/profiles");
    let service = UserService::new(users.clone(), images.clone(), PrefixHasher);
    (service, users, images)
}

#[tokio::test]
async fn test_signup_hashes_password() {
    let (service, users, _) = create_test_service();
    let ctx = OpContext::background();

    let user = service.signup(&ctx, "bob@bob.com", "avalidpassword").await.unwrap();

    assert_eq!(user.password, "hashed:avalidpassword");
    assert_eq!(users.find_by_id(&ctx, user.uid).await.unwrap().email, "bob@bob.com");
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let (service, _, _) = create_test_service();
    let ctx = OpContext::background();

    service.signup(&ctx, "bob@bob.com", "password1").await.unwrap();
    let err = service.signup(&ctx, "bob@bob.com", "password2").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_signin_success() {
    let (service, _, _) = create_test_service();
    let ctx = OpContext::background();
    let created = service.signup(&ctx, "bob@bob.com", "password1").await.unwrap();

    let user = service.signin(&ctx, "bob@bob.com", "password1").await.unwrap();
    assert_eq!(user.uid, created.uid);
}

#[tokio::test]
async fn test_signin_failures_are_indistinguishable() {
    let (service, _, _) = create_test_service();
    let ctx = OpContext::background();
    service.signup(&ctx, "bob@bob.com", "password1").await.unwrap();

    let wrong_password = service.signin(&ctx, "bob@bob.com", "nope").await.unwrap_err();
    let unknown_email = service.signin(&ctx, "eve@bob.com", "password1").await.unwrap_err();

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password.kind(), ErrorKind::Authorization);
}

#[tokio::test]
async fn test_update_details() {
    let (service, _, _) = create_test_service();
    let ctx = OpContext::background();
    let user = service.signup(&ctx, "bob@bob.com", "password1").await.unwrap();

    let updated = service
        .update_details(&ctx, user.uid, "Bob", "robert@bob.com", "https://bob.dev")
        .await
        .unwrap();

    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.email, "robert@bob.com");
    assert_eq!(updated.password, "hashed:password1");
}

#[tokio::test]
async fn test_profile_image_reuses_object_name() {
    let (service, _, images) = create_test_service();
    let ctx = OpContext::background();
    let user = service.signup(&ctx, "bob@bob.com", "password1").await.unwrap();

    let first = service
        .set_profile_image(&ctx, user.uid, vec![1, 2, 3], "image/png")
        .await
        .unwrap();
    let second = service
        .set_profile_image(&ctx, user.uid, vec![4, 5], "image/jpeg")
        .await
        .unwrap();

    assert!(first.image_url.starts_with("https://images.example.com/profiles/"));
    assert_eq!(first.image_url, second.image_url);
    assert_eq!(images.len().await, 1);

    let name = object_name_from_url(&second.image_url).unwrap();
    let stored = images.get(&name).await.unwrap();
    assert_eq!(stored.bytes, vec![4, 5]);
    assert_eq!(stored.content_type, "image/jpeg");
}

#[tokio::test]
async fn test_clear_profile_image() {
    let (service, _, images) = create_test_service();
    let ctx = OpContext::background();
    let user = service.signup(&ctx, "bob@bob.com", "password1").await.unwrap();

    // nothing to clear yet
    service.clear_profile_image(&ctx, user.uid).await.unwrap();

    service
        .set_profile_image(&ctx, user.uid, vec![1], "image/png")
        .await
        .unwrap();
    service.clear_profile_image(&ctx, user.uid).await.unwrap();

    assert!(images.is_empty().await);
    assert!(service.get(&ctx, user.uid).await.unwrap().image_url.is_empty());
}

#[tokio::test]
async fn test_get_unknown_user() {
    let (service, _, _) = create_test_service();
    let err = service
        .get(&OpContext::background(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_object_name_for_empty_url_is_fresh_uuid() {
    let a = object_name_from_url("").unwrap();
    let b = object_name_from_url("").unwrap();

    assert!(Uuid::parse_str(&a).is_ok());
    assert_ne!(a, b);
}

#[test]
fn test_object_name_is_last_path_segment() {
    let name = object_name_from_url(
        "https://storage.googleapis.com/bucket/3c4d2e80-1b2a-4c5e-8f00-aa11bb22cc33?v=2",
    )
    .unwrap();
    assert_eq!(name, "3c4d2e80-1b2a-4c5e-8f00-aa11bb22cc33");

    assert_eq!(object_name_from_url("http://img/a/b/c.png/").unwrap(), "c.png");
}

#[test]
fn test_object_name_from_unparseable_url() {
    let err = object_name_from_url("::not a url::").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);

    let err = object_name_from_url("http://img.example.com/").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_unknown_email_costs_one_hash() {
    let hasher = CountingHasher::default();
    let service = UserService::new(
        InMemoryUserRepository::new(),
        InMemoryImageRepository::default(),
        hasher.clone(),
    );
    let ctx = OpContext::background();
    service.signup(&ctx, "bob@bob.com", "password1").await.unwrap();
    let after_signup = hasher.work();

    service.signin(&ctx, "bob@bob.com", "wrongpass").await.unwrap_err();
    let wrong_password_work = hasher.work() - after_signup;

    service.signin(&ctx, "eve@bob.com", "password1").await.unwrap_err();
    let unknown_email_work = hasher.work() - after_signup - wrong_password_work;

    assert_eq!(wrong_password_work, 1);
    assert_eq!(unknown_email_work, wrong_password_work);
}
