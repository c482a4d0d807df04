//! Per-operation deadline carried into every store call

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::{DomainError, DomainResult};

/// Cancellation context for a single storage or network operation.
///
/// A context without a deadline never expires. Contexts are cheap to copy and
/// are passed by reference down to the repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpContext {
    deadline: Option<Instant>,
}

impl OpContext {
    /// A context with no deadline
    pub fn background() -> Self {
        Self { deadline: None }
    }

    /// A context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.deadline, Some(d) if Instant::now() >= d)
    }

    /// Fail fast if the deadline has already passed.
    pub fn ensure_active(&self, operation: &str) -> DomainResult<()> {
        if self.is_expired() {
            return Err(DomainError::service_unavailable(format!(
                "deadline exceeded before {}",
                operation
            )));
        }
        Ok(())
    }

    /// Run `fut` under this context's deadline.
    ///
    /// The future is never polled if the deadline has already passed, and is
    /// dropped if the deadline is reached while it is pending.
    pub async fn run<F, T>(&self, operation: &str, fut: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        self.ensure_active(operation)?;
        match self.deadline {
            None => fut.await,
            Some(deadline) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| {
                    DomainError::service_unavailable(format!(
                        "deadline exceeded during {}",
                        operation
                    ))
                })?,
        }
    }
}
