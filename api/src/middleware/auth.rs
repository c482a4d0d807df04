//! Identity token middleware for protected endpoints.
//!
//! Reads `Authorization: Bearer <token>`, verifies it through an
//! [`IdentityValidator`] and stores the resolved user in the request
//! extensions. Rejections are rendered as 401 responses here so the wrapped
//! handler never runs.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use account_core::{DomainError, IdentityValidator, User};
use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;

use crate::handlers::error::{handle_domain_error, ApiError};

/// The only message a rejected client sees, whatever check failed
const REJECTED: &str = "unable to verify user from identity token";

const MISSING_HEADER: &str = "missing Authorization header";
const BAD_SCHEME: &str = "Authorization header is not a Bearer token";

/// Authenticated user injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    validator: Arc<dyn IdentityValidator>,
}

impl JwtAuth {
    pub fn new(validator: Arc<dyn IdentityValidator>) -> Self {
        Self { validator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            validator: Arc::clone(&self.validator),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    validator: Arc<dyn IdentityValidator>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let validator = Arc::clone(&self.validator);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Ok(token) => token,
                Err(reason) => {
                    tracing::debug!(path = %req.path(), reason, "Rejected request");
                    return Ok(reject(req));
                }
            };

            let user = match validator.validate_identity(&token) {
                Ok(user) => user,
                Err(err) => {
                    tracing::debug!(path = %req.path(), error = %err, "Rejected identity token");
                    return Ok(reject(req));
                }
            };

            tracing::debug!(uid = %user.uid, path = %req.path(), "Authenticated request");
            req.extensions_mut().insert(AuthContext { user });

            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    req.into_response(handle_domain_error(DomainError::authorization(REJECTED)))
        .map_into_right_body()
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Result<String, &'static str> {
    let value = req.headers().get(AUTHORIZATION).ok_or(MISSING_HEADER)?;
    let value = value.to_str().map_err(|_| BAD_SCHEME)?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(BAD_SCHEME),
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            ApiError(DomainError::authorization("unable to extract user from request context"))
                .into()
        });
        ready(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req).unwrap(), "abc.def.ghi");

        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req).unwrap_err(), MISSING_HEADER);

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic Ym9iOnNlY3JldA=="))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req).unwrap_err(), BAD_SCHEME);

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert!(extract_bearer_token(&req).is_err());
    }

    #[actix_web::test]
    async fn test_auth_context_extraction_without_middleware() {
        let req = TestRequest::default().to_http_request();
        let result = AuthContext::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }
}
