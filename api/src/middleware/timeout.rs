//! Per-request time limit.
//!
//! A handler still running when the limit passes is dropped and the request
//! fails with a `ServiceUnavailable` error, rendered as the 503 envelope.
//! No `HttpRequest` clone may be held across the inner call: routing needs
//! unique access to the request.

use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
    time::Duration,
};

use account_core::DomainError;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;

use crate::handlers::error::ApiError;

/// Request timeout middleware factory
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    limit: Duration,
}

impl Timeout {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Timeout
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimeoutMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimeoutMiddleware {
            service: Rc::new(service),
            limit: self.limit,
        }))
    }
}

pub struct TimeoutMiddleware<S> {
    service: Rc<S>,
    limit: Duration,
}

impl<S, B> Service<ServiceRequest> for TimeoutMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let limit = self.limit;
        let path = req.path().to_string();

        Box::pin(async move {
            match tokio::time::timeout(limit, service.call(req)).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        path = %path,
                        limit_ms = limit.as_millis() as u64,
                        "Request timed out"
                    );
                    Err(ApiError(DomainError::service_unavailable(
                        "request exceeded handler timeout",
                    ))
                    .into())
                }
            }
        })
    }
}
