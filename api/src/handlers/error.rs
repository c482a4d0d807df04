//! Mapping of domain errors onto HTTP responses
//!
//! Every failure leaves the service as `{"error": {"type", "message"}}` with the
//! status code of its kind. Full detail is logged here and never sent.

use std::fmt;

use account_core::errors::{DomainError, ErrorKind};
use account_shared::errors::{error_codes, ErrorResponse};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use validator::ValidationErrors;

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Authorization => StatusCode::UNAUTHORIZED,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorKind::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Wire type code for an error kind
pub fn error_code(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Authorization => error_codes::AUTHORIZATION,
        ErrorKind::BadRequest => error_codes::BAD_REQUEST,
        ErrorKind::Conflict => error_codes::CONFLICT,
        ErrorKind::NotFound => error_codes::NOT_FOUND,
        ErrorKind::Internal => error_codes::INTERNAL,
        ErrorKind::PayloadTooLarge => error_codes::PAYLOAD_TOO_LARGE,
        ErrorKind::UnsupportedMediaType => error_codes::UNSUPPORTED_MEDIA_TYPE,
        ErrorKind::ServiceUnavailable => error_codes::SERVICE_UNAVAILABLE,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let kind = error.kind();
    match kind {
        ErrorKind::Internal | ErrorKind::ServiceUnavailable => {
            tracing::error!(error = %error, kind = ?kind, "Request failed");
        }
        _ => {
            tracing::debug!(error = %error, kind = ?kind, "Request rejected");
        }
    }

    HttpResponse::build(status_for(kind))
        .json(ErrorResponse::new(error_code(kind), error.client_message()))
}

/// 400 response listing the failed validation codes per field
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    tracing::debug!(errors = %errors, "Request validation failed");

    let mut response = ErrorResponse::new(error_codes::BAD_REQUEST, "invalid request parameters");
    for (field, field_errors) in errors.field_errors() {
        let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
        response = response.add_detail(field, codes);
    }

    HttpResponse::BadRequest().json(response)
}

/// Domain error usable wherever actix expects an `actix_web::Error`
#[derive(Debug, Clone)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.kind())
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(self.0.clone())
    }
}
