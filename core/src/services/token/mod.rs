//! Token service module: the dual-token session lifecycle
//!
//! This module handles:
//! - Signing key material (RS256 for identity tokens, HS256 for refresh tokens)
//! - Encoding and decoding of both token types
//! - Issuing, validating and rotating token pairs
//! - Signing a user out of every session

mod codec;
mod config;
mod key_manager;
mod service;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use key_manager::SigningKeys;
pub use service::TokenService;
pub use validator::IdentityValidator;
