//! User entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account holder.
///
/// `password` holds the credential hash and is skipped by serde, so it never
/// reaches a token claim or a response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: Uuid,

    pub email: String,

    #[serde(skip)]
    pub password: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub website: String,
}

impl User {
    /// Creates a new user with a fresh id and an already hashed password
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            uid: Uuid::new_v4(),
            email: email.into(),
            password: password_hash.into(),
            ..Default::default()
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Copy of this user with the credential cleared
    pub fn without_credential(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }
}
