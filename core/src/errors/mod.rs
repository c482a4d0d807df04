//! Domain error types shared by every service and repository.
//!
//! Each [`DomainError`] belongs to exactly one [`ErrorKind`]; the HTTP layer
//! maps the kind to a status code and sends only [`DomainError::client_message`]
//! to the caller. The `Display` output carries full detail for server logs.

use thiserror::Error;

/// Failures produced while encoding or decoding signed tokens.
///
/// The distinction between variants is for logging only; callers collapse
/// decode failures into [`DomainError::Authorization`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("token signing failed: {0}")]
    SigningFailed(String),

    #[error("failed to load signing key: {0}")]
    KeyLoad(String),
}

/// The externally visible error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Authorization,
    BadRequest,
    Conflict,
    NotFound,
    Internal,
    PayloadTooLarge,
    UnsupportedMediaType,
    ServiceUnavailable,
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    Authorization { message: String },

    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("resource {resource} with value {value} already exists")]
    Conflict { resource: String, value: String },

    #[error("resource {resource} with value {value} not found")]
    NotFound { resource: String, value: String },

    #[error("internal error: {message}")]
    Internal { message: String },

    #[error("max payload size of {max_bytes} exceeded, actual size {content_length}")]
    PayloadTooLarge { max_bytes: usize, content_length: usize },

    #[error("{message}")]
    UnsupportedMediaType { message: String },

    #[error("service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

impl DomainError {
    pub fn authorization(message: impl Into<String>) -> Self {
        DomainError::Authorization { message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        DomainError::BadRequest { message: message.into() }
    }

    pub fn conflict(resource: impl Into<String>, value: impl Into<String>) -> Self {
        DomainError::Conflict {
            resource: resource.into(),
            value: value.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>, value: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
            value: value.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal { message: message.into() }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        DomainError::ServiceUnavailable { message: message.into() }
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        DomainError::UnsupportedMediaType { message: message.into() }
    }

    /// The class this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Authorization { .. } => ErrorKind::Authorization,
            DomainError::BadRequest { .. } => ErrorKind::BadRequest,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            DomainError::UnsupportedMediaType { .. } => ErrorKind::UnsupportedMediaType,
            DomainError::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,
        }
    }

    /// Message safe to return to a client.
    ///
    /// Internal and service-unavailable details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            DomainError::Internal { .. } => "internal server error".to_string(),
            DomainError::ServiceUnavailable { .. } => "service unavailable or timeout".to_string(),
            other => other.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
