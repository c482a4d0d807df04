//! # Account Core
//!
//! Domain layer for the account service: entities, the token session engine,
//! the user service, repository interfaces with in-memory implementations,
//! and the error types every layer maps onto.

pub mod context;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use context::OpContext;
pub use domain::entities::{IdToken, IdTokenClaims, RefreshToken, RefreshTokenClaims, TokenPair, User};
pub use errors::{DomainError, DomainResult, ErrorKind, TokenError};
pub use repositories::{
    ImageRepository, InMemoryImageRepository, InMemoryRevocationStore, InMemoryUserRepository,
    RevocationStore, UserRepository,
};
pub use services::{
    object_name_from_url, IdentityValidator, PasswordHasher, SigningKeys, TokenCodec,
    TokenService, TokenServiceConfig, UserService,
};
