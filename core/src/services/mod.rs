//! Business services containing domain logic and use cases.

pub mod token;
pub mod user;

pub use token::{
    IdentityValidator, SigningKeys, TokenCodec, TokenService, TokenServiceConfig,
};
pub use user::{object_name_from_url, PasswordHasher, UserService};
