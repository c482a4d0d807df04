//! Identity validation seam used by the request authorization gate

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Resolves a bearer identity token to the user it was issued for.
///
/// Object safe so the HTTP layer can hold it as `Arc<dyn IdentityValidator>`.
pub trait IdentityValidator: Send + Sync {
    /// Returns the user snapshot embedded in a valid token, or an
    /// `Authorization` error for any token that does not verify.
    fn validate_identity(&self, token: &str) -> DomainResult<User>;
}
