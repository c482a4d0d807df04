//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::context::OpContext;
use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Emails are unique across users. Lookups that find nothing return
/// `DomainError::NotFound` rather than an empty option.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    ///
    /// # Returns
    /// * `Ok(User)` - User found
    /// * `Err(DomainError::NotFound)` - No user with this id
    async fn find_by_id(&self, ctx: &OpContext, uid: Uuid) -> Result<User, DomainError>;

    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(User)` - User found, including the stored password hash
    /// * `Err(DomainError::NotFound)` - No user with this email
    async fn find_by_email(&self, ctx: &OpContext, email: &str) -> Result<User, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Conflict)` - Email already registered
    async fn create(&self, ctx: &OpContext, user: &User) -> Result<User, DomainError>;

    /// Overwrite name, email and website of an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - User does not exist
    /// * `Err(DomainError::Conflict)` - New email belongs to another user
    async fn update(&self, ctx: &OpContext, user: &User) -> Result<User, DomainError>;

    /// Set (or clear, with an empty string) the profile image URL
    async fn update_image(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        image_url: &str,
    ) -> Result<User, DomainError>;
}
