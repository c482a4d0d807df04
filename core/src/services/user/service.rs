//! User service: signup, signin and profile updates

use uuid::Uuid;

use crate::context::OpContext;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, ErrorKind};
use crate::repositories::{ImageRepository, UserRepository};

use super::object_name::object_name_from_url;
use super::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "invalid email and password combination";

/// Orchestrates user persistence, password hashing and image storage
pub struct UserService<U, I, P>
where
    U: UserRepository,
    I: ImageRepository,
    P: PasswordHasher,
{
    users: U,
    images: I,
    hasher: P,
}

impl<U, I, P> UserService<U, I, P>
where
    U: UserRepository,
    I: ImageRepository,
    P: PasswordHasher,
{
    pub fn new(users: U, images: I, hasher: P) -> Self {
        Self {
            users,
            images,
            hasher,
        }
    }

    /// Fetch a user by id
    pub async fn get(&self, ctx: &OpContext, uid: Uuid) -> DomainResult<User> {
        self.users.find_by_id(ctx, uid).await
    }

    /// Register a new account
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user, password field holding the hash
    /// * `Err(DomainError::Conflict)` - Email already registered
    pub async fn signup(&self, ctx: &OpContext, email: &str, password: &str) -> DomainResult<User> {
        let hash = self.hasher.hash(password).await?;
        let user = self.users.create(ctx, &User::new(email, hash)).await?;

        tracing::info!(uid = %user.uid, "User signed up");
        Ok(user)
    }

    /// Authenticate by email and password
    ///
    /// Unknown email and wrong password produce the same `Authorization` error
    /// after the same amount of hashing work.
    pub async fn signin(&self, ctx: &OpContext, email: &str, password: &str) -> DomainResult<User> {
        let user = match self.users.find_by_email(ctx, email).await {
            Ok(user) => user,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                // Same hashing work as a wrong password
                if let Err(e) = self.hasher.hash(password).await {
                    tracing::warn!(error = %e, "Hashing for unknown email failed");
                }
                return Err(DomainError::authorization(INVALID_CREDENTIALS));
            }
            Err(err) => return Err(err),
        };

        if !self.hasher.verify(password, &user.password).await? {
            tracing::debug!(uid = %user.uid, "Password mismatch");
            return Err(DomainError::authorization(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    /// Replace name, email and website of a user
    pub async fn update_details(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        name: &str,
        email: &str,
        website: &str,
    ) -> DomainResult<User> {
        let changes = User {
            uid,
            email: email.to_string(),
            name: name.to_string(),
            website: website.to_string(),
            ..Default::default()
        };
        self.users.update(ctx, &changes).await
    }

    /// Upload a new profile image, reusing the existing object name if any
    pub async fn set_profile_image(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> DomainResult<User> {
        let user = self.users.find_by_id(ctx, uid).await?;
        let object_name = object_name_from_url(&user.image_url)?;

        let image_url = self
            .images
            .update_profile(ctx, &object_name, bytes, content_type)
            .await?;

        let updated = self.users.update_image(ctx, uid, &image_url).await?;
        tracing::info!(%uid, %object_name, "Profile image updated");
        Ok(updated)
    }

    /// Delete the profile image, a no-op for users without one
    pub async fn clear_profile_image(&self, ctx: &OpContext, uid: Uuid) -> DomainResult<()> {
        let user = self.users.find_by_id(ctx, uid).await?;
        if !user.has_image() {
            return Ok(());
        }

        let object_name = object_name_from_url(&user.image_url)?;
        self.images.delete_profile(ctx, &object_name).await?;
        self.users.update_image(ctx, uid, "").await?;

        tracing::info!(%uid, %object_name, "Profile image cleared");
        Ok(())
    }
}
