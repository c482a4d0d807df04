use account_core::DomainError;
use actix_web::{HttpRequest, HttpResponse};

use crate::handlers::handle_domain_error;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "account-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    handle_domain_error(DomainError::not_found("route", req.path()))
}
