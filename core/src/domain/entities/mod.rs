//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::{IdToken, IdTokenClaims, RefreshToken, RefreshTokenClaims, TokenPair};
pub use user::User;
