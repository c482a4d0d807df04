//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::context::OpContext;
use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// User repository held in process memory
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn email_taken(users: &HashMap<Uuid, User>, email: &str, except: Option<Uuid>) -> bool {
    users
        .values()
        .any(|u| u.email.eq_ignore_ascii_case(email) && Some(u.uid) != except)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, ctx: &OpContext, uid: Uuid) -> Result<User, DomainError> {
        ctx.ensure_active("user lookup")?;
        let users = self.users.read().await;
        users
            .get(&uid)
            .cloned()
            .ok_or_else(|| DomainError::not_found("uid", uid.to_string()))
    }

    async fn find_by_email(&self, ctx: &OpContext, email: &str) -> Result<User, DomainError> {
        ctx.ensure_active("user lookup")?;
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or_else(|| DomainError::not_found("email", email))
    }

    async fn create(&self, ctx: &OpContext, user: &User) -> Result<User, DomainError> {
        ctx.ensure_active("user create")?;
        let mut users = self.users.write().await;

        if email_taken(&users, &user.email, None) {
            return Err(DomainError::conflict("email", user.email.clone()));
        }

        users.insert(user.uid, user.clone());
        Ok(user.clone())
    }

    async fn update(&self, ctx: &OpContext, user: &User) -> Result<User, DomainError> {
        ctx.ensure_active("user update")?;
        let mut users = self.users.write().await;

        if email_taken(&users, &user.email, Some(user.uid)) {
            return Err(DomainError::conflict("email", user.email.clone()));
        }

        let stored = users
            .get_mut(&user.uid)
            .ok_or_else(|| DomainError::not_found("uid", user.uid.to_string()))?;
        stored.name = user.name.clone();
        stored.email = user.email.clone();
        stored.website = user.website.clone();
        Ok(stored.clone())
    }

    async fn update_image(
        &self,
        ctx: &OpContext,
        uid: Uuid,
        image_url: &str,
    ) -> Result<User, DomainError> {
        ctx.ensure_active("user image update")?;
        let mut users = self.users.write().await;

        let stored = users
            .get_mut(&uid)
            .ok_or_else(|| DomainError::not_found("uid", uid.to_string()))?;
        stored.image_url = image_url.to_string();
        Ok(stored.clone())
    }
}
